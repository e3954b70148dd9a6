//! The three shipped sample variants and their call chains.
//!
//! Each variant is a fixed, non-branching chain of two or three functions.
//! The printing frames write their literal arguments to standard output, the
//! terminal frame rejects the fixed message, and the resulting failure
//! propagates out of every frame unrecovered. The chains take no external
//! input of any kind.

mod byte;
mod hello;
mod plain;

use std::fmt;

use crate::error::ChainError;
use crate::runner::RunContext;

/// The message every terminal function rejects.
pub const FAILURE_MESSAGE: &str = "Test exception";

/// One of the shipped sample variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Prints `TEST METHOD!!`, then fails without further output.
    Plain,

    /// Prints five literal arguments on one line, then fails two calls
    /// deeper.
    Hello,

    /// Prints a byte and a boolean on separate lines from separate frames,
    /// then fails.
    Byte,
}

impl Sample {
    /// All shipped samples, in the order the driver runs them.
    pub const ALL: [Sample; 3] = [Sample::Plain, Sample::Hello, Sample::Byte];

    /// Short name used in reports and summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Sample::Plain => "plain",
            Sample::Hello => "hello",
            Sample::Byte => "byte",
        }
    }

    /// Name of the compiled binary for this sample.
    #[must_use]
    pub fn bin_name(self) -> &'static str {
        match self {
            Sample::Plain => "failtrail-plain",
            Sample::Hello => "failtrail-hello",
            Sample::Byte => "failtrail-byte",
        }
    }

    /// The exact stdout lines the sample writes before failing.
    #[must_use]
    pub fn expected_stdout(self) -> Vec<String> {
        match self {
            Sample::Plain => plain::expected_stdout(),
            Sample::Hello => hello::expected_stdout(),
            Sample::Byte => byte::expected_stdout(),
        }
    }

    /// Execute this sample's call chain against `ctx`.
    ///
    /// Pure apart from the writes into `ctx`: no arguments, environment, or
    /// global state are consulted, so the same call works from a test with an
    /// in-memory writer and from the process entry point with real stdout.
    ///
    /// # Errors
    ///
    /// Returns the `InvalidArgument` failure signalled by the chain's
    /// terminal function. The shipped chains never return `Ok`.
    pub fn run(self, ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
        match self {
            Sample::Plain => plain::run(ctx),
            Sample::Hello => hello::run(ctx),
            Sample::Byte => byte::run(ctx),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
