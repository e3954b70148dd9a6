//! In-process record of a chain run: frame entries, exits, and failures.
//!
//! The recorder is passive. Chains report into it as they execute and it
//! never influences control flow or the sample's standard output. A failure
//! that a frame absorbs instead of propagating shows up as a `Caught` event,
//! which the shipped samples must never produce.

use crate::error::{ChainError, ErrorKind};
use crate::value::Value;

/// One observation in a chain run, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The run began.
    Started { sample: String },

    /// A chain function was entered with these argument values.
    Entered { frame: String, args: Vec<Value> },

    /// A failure was constructed and started propagating. `frames` is the
    /// live stack at that moment, topmost first.
    Raised {
        frame: String,
        kind: ErrorKind,
        message: String,
        origin: String,
        frames: Vec<String>,
    },

    /// A chain function returned. `unwound` marks exits driven by a
    /// propagating failure rather than a normal return.
    Exited { frame: String, unwound: bool },

    /// A frame exited normally while a failure was pending, which means the
    /// failure was absorbed there instead of propagating.
    Caught { frame: String, message: String },

    /// The run ended.
    Finished { failed: bool },
}

/// Recorder for a single chain run.
#[derive(Debug, Default)]
pub struct Trace {
    events: Vec<Event>,
    stack: Vec<String>,
    pending: Option<String>,
}

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Trace::default()
    }

    /// Record the start of a run.
    pub fn start(&mut self, sample: &str) {
        self.events.push(Event::Started {
            sample: sample.to_string(),
        });
    }

    /// Record entry into `frame` with its argument values.
    pub fn enter(&mut self, frame: &str, args: Vec<Value>) {
        self.stack.push(frame.to_string());
        self.events.push(Event::Entered {
            frame: frame.to_string(),
            args,
        });
    }

    /// Record a failure at the point it is constructed.
    ///
    /// Snapshots the live stack topmost-first and marks the failure as
    /// propagating until a frame either unwinds past it or absorbs it.
    pub fn raise(&mut self, error: &ChainError) {
        let frame = self.stack.last().cloned().unwrap_or_default();
        let mut frames = self.stack.clone();
        frames.reverse();

        self.pending = Some(error.message().to_string());
        self.events.push(Event::Raised {
            frame,
            kind: error.kind(),
            message: error.message().to_string(),
            origin: error.origin(),
            frames,
        });
    }

    /// Record exit from `frame`.
    ///
    /// A normal exit while a failure is pending means the frame absorbed the
    /// failure: a `Caught` event is recorded and the pending mark cleared.
    /// Unwound exits leave the failure propagating.
    pub fn exit(&mut self, frame: &str, unwound: bool) {
        self.stack.pop();

        if !unwound && let Some(message) = self.pending.take() {
            self.events.push(Event::Caught {
                frame: frame.to_string(),
                message,
            });
        }

        self.events.push(Event::Exited {
            frame: frame.to_string(),
            unwound,
        });
    }

    /// Record the end of a run.
    pub fn finish(&mut self, failed: bool) {
        self.events.push(Event::Finished { failed });
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raise_in(trace: &mut Trace, message: &str) -> ChainError {
        let error = ChainError::invalid_argument(message);
        trace.raise(&error);
        error
    }

    #[test]
    fn test_events_record_in_order() {
        let mut trace = Trace::new();
        trace.start("demo");
        trace.enter("outer", vec![]);
        trace.enter("inner", vec![Value::from(1)]);
        trace.exit("inner", false);
        trace.exit("outer", false);
        trace.finish(false);

        let kinds: Vec<&Event> = trace.events().iter().collect();
        assert_eq!(kinds.len(), 6);
        assert!(matches!(kinds[0], Event::Started { .. }));
        assert!(matches!(kinds[1], Event::Entered { frame, .. } if frame == "outer"));
        assert!(matches!(kinds[2], Event::Entered { frame, .. } if frame == "inner"));
        assert!(matches!(kinds[3], Event::Exited { frame, unwound: false } if frame == "inner"));
        assert!(matches!(kinds[4], Event::Exited { frame, unwound: false } if frame == "outer"));
        assert!(matches!(kinds[5], Event::Finished { failed: false }));
    }

    #[test]
    fn test_raise_snapshots_stack_topmost_first() {
        let mut trace = Trace::new();
        trace.enter("level1", vec![]);
        trace.enter("level2", vec![]);
        trace.enter("level3", vec![]);
        raise_in(&mut trace, "Test exception");

        let raised = trace
            .events()
            .iter()
            .find_map(|event| match event {
                Event::Raised { frame, frames, .. } => Some((frame.clone(), frames.clone())),
                _ => None,
            })
            .expect("raise should be recorded");

        assert_eq!(raised.0, "level3");
        assert_eq!(raised.1, vec!["level3", "level2", "level1"]);
    }

    #[test]
    fn test_unwound_exits_do_not_catch() {
        let mut trace = Trace::new();
        trace.enter("level1", vec![]);
        trace.enter("level2", vec![]);
        raise_in(&mut trace, "Test exception");
        trace.exit("level2", true);
        trace.exit("level1", true);

        assert!(
            !trace
                .events()
                .iter()
                .any(|event| matches!(event, Event::Caught { .. })),
            "unwinding past a failure must not record a catch"
        );
    }

    #[test]
    fn test_normal_exit_with_pending_failure_records_catch() {
        let mut trace = Trace::new();
        trace.enter("swallower", vec![]);
        trace.enter("inner", vec![]);
        raise_in(&mut trace, "Test exception");
        trace.exit("inner", true);
        // The outer frame pretends nothing happened.
        trace.exit("swallower", false);

        let caught = trace
            .events()
            .iter()
            .find_map(|event| match event {
                Event::Caught { frame, message } => Some((frame.clone(), message.clone())),
                _ => None,
            })
            .expect("a normal exit past a pending failure should be caught");

        assert_eq!(caught.0, "swallower");
        assert_eq!(caught.1, "Test exception");
    }

    #[test]
    fn test_catch_clears_the_pending_failure() {
        let mut trace = Trace::new();
        trace.enter("outer", vec![]);
        trace.enter("swallower", vec![]);
        trace.enter("inner", vec![]);
        raise_in(&mut trace, "Test exception");
        trace.exit("inner", true);
        trace.exit("swallower", false);
        trace.exit("outer", false);

        let catches = trace
            .events()
            .iter()
            .filter(|event| matches!(event, Event::Caught { .. }))
            .count();
        assert_eq!(catches, 1, "only the absorbing frame catches");
    }

    #[test]
    fn test_raised_event_carries_kind_and_origin() {
        let mut trace = Trace::new();
        trace.enter("only", vec![]);
        raise_in(&mut trace, "boom");

        match trace.events().last().unwrap() {
            Event::Raised {
                kind,
                message,
                origin,
                ..
            } => {
                assert_eq!(*kind, ErrorKind::InvalidArgument);
                assert_eq!(message, "boom");
                assert!(origin.contains("trace.rs:"), "origin was: {origin}");
            }
            other => panic!("expected a raise, got {other:?}"),
        }
    }
}
