//! Chain execution against a writer, and the process boundary for samples.

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::error::ChainError;
use crate::report::RunReport;
use crate::sample::Sample;
use crate::trace::Trace;
use crate::value::Value;

/// Execution context a chain reports into while it runs.
///
/// Owns the trace and borrows the output writer, so the same chain code
/// drives real stdout in the sample binaries and an in-memory buffer in
/// tests.
pub struct RunContext<'a> {
    out: &'a mut dyn Write,
    trace: Trace,
}

impl<'a> RunContext<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        RunContext {
            out,
            trace: Trace::new(),
        }
    }

    /// Record entry into a chain function.
    pub fn enter(&mut self, frame: &str, args: Vec<Value>) {
        self.trace.enter(frame, args);
    }

    /// Record a failure at the point it is constructed.
    pub fn raise(&mut self, error: &ChainError) {
        self.trace.raise(error);
    }

    /// Record exit from a chain function; `unwound` marks error-driven exits.
    pub fn exit(&mut self, frame: &str, unwound: bool) {
        self.trace.exit(frame, unwound);
    }

    /// Write one line to the sample's output.
    ///
    /// Output is not part of the failure path, so a write error is ignored
    /// rather than turned into a chain failure.
    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }

    #[must_use]
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

/// Run one sample chain against `out`, returning the assembled report along
/// with the live result so callers can decide the process outcome.
pub fn run_sample(sample: Sample, out: &mut dyn Write) -> (RunReport, Result<(), ChainError>) {
    let started_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    let start = Instant::now();

    let mut ctx = RunContext::new(out);
    ctx.trace.start(sample.name());
    let result = sample.run(&mut ctx);
    ctx.trace.finish(result.is_err());

    let report = RunReport::from_trace(
        sample.name(),
        ctx.into_trace(),
        start.elapsed().as_millis(),
        started_at,
    );
    (report, result)
}

/// Process boundary for the sample binaries.
///
/// Runs the chain against real standard output, flushes it, and converts the
/// result into the exit status: the failure block goes to standard error and
/// the process exits 1. Every stdout write lands before the diagnostic.
pub fn sample_main(sample: Sample) -> ! {
    let mut stdout = io::stdout().lock();
    let (report, result) = run_sample(sample, &mut stdout);
    let _ = stdout.flush();

    match result {
        Ok(()) => std::process::exit(0),
        Err(error) => {
            match report.render_failure() {
                Some(block) => eprint!("{block}"),
                None => eprintln!("error: {error}"),
            }
            std::process::exit(1);
        }
    }
}
