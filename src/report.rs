//! Assembled record of one sample run and its diagnostic rendering.

use crate::error::ErrorKind;
use crate::trace::{Event, Trace};

/// The failure a run ended with, as observed at the raise point.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,

    /// Source location that constructed the error, as `file:line`.
    pub origin: String,

    /// Live stack at the raise, topmost first.
    pub frames: Vec<String>,
}

/// Complete record of one sample run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Sample name
    pub sample: String,

    /// Every observation, in order
    pub events: Vec<Event>,

    /// First failure raised, if any
    pub failure: Option<Failure>,

    /// Frames that absorbed a failure instead of propagating it
    pub caught: Vec<String>,

    /// Execution duration in milliseconds
    pub duration_ms: u128,

    /// Timestamp when execution started (Unix epoch ms)
    pub started_at: u128,
}

impl RunReport {
    /// Assemble a report from a finished trace.
    #[must_use]
    pub fn from_trace(sample: &str, trace: Trace, duration_ms: u128, started_at: u128) -> Self {
        let events = trace.into_events();

        let failure = events.iter().find_map(|event| match event {
            Event::Raised {
                kind,
                message,
                origin,
                frames,
                ..
            } => Some(Failure {
                kind: *kind,
                message: message.clone(),
                origin: origin.clone(),
                frames: frames.clone(),
            }),
            _ => None,
        });

        let caught = events
            .iter()
            .filter_map(|event| match event {
                Event::Caught { frame, .. } => Some(frame.clone()),
                _ => None,
            })
            .collect();

        RunReport {
            sample: sample.to_string(),
            events,
            failure,
            caught,
            duration_ms,
            started_at,
        }
    }

    /// True when the run failed and no frame absorbed the failure.
    #[must_use]
    pub fn failed_unrecovered(&self) -> bool {
        self.failure.is_some() && self.caught.is_empty()
    }

    /// Render the failure block for the diagnostic channel.
    ///
    /// The first line is the stable form `error: <kind>: <message>`, followed
    /// by the origin and the frame trail topmost-first:
    ///
    /// ```text
    /// error: invalid argument: Test exception
    ///   at src/sample/hello.rs:64
    ///   frames:
    ///     throwing_method
    ///     test_method2
    ///     test_method
    /// ```
    #[must_use]
    pub fn render_failure(&self) -> Option<String> {
        let failure = self.failure.as_ref()?;

        let mut block = String::new();
        block.push_str(&format!("error: {}: {}\n", failure.kind, failure.message));
        block.push_str(&format!("  at {}\n", failure.origin));

        if !failure.frames.is_empty() {
            block.push_str("  frames:\n");
            for frame in &failure.frames {
                block.push_str(&format!("    {frame}\n"));
            }
        }

        Some(block)
    }
}
