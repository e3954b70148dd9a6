//! Chain failure type and its single error kind.
//!
//! A sample chain signals failure by returning a `ChainError` through every
//! frame; nothing in the chain recovers it. The error records where it was
//! constructed, so diagnostics can point at the terminal function without
//! any stack walking.

use std::fmt;
use std::panic::Location;

/// The kinds of failure a call chain can signal.
///
/// There is exactly one: the terminal function rejects the argument it was
/// handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

impl ErrorKind {
    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failure signalled inside a sample call chain.
///
/// Carries the kind, the message, and the source location where the error
/// was constructed. The location is captured from the caller, so the frame
/// that signals the failure is the one on record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainError {
    kind: ErrorKind,
    message: String,
    origin: &'static Location<'static>,
}

impl ChainError {
    /// Signal an `InvalidArgument` failure carrying `message`.
    #[must_use]
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ChainError {
            kind: ErrorKind::InvalidArgument,
            message: message.into(),
            origin: Location::caller(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location where the failure was constructed, as `file:line`.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}:{}", self.origin.file(), self.origin.line())
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ChainError {}
