//! Child-process harness: run a sample binary and assess what it did.
//!
//! The driver observes the samples strictly from outside, the way any user
//! would: spawn the binary with no arguments, capture stdout, stderr, and
//! exit status, then check the run against the sample's contract.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::sample::{FAILURE_MESSAGE, Sample};

/// Captured result of running one sample binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// The binary that was executed
    pub binary: String,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Process exit code (None if killed by signal)
    pub exit_code: Option<i32>,

    /// Execution duration in milliseconds
    pub duration_ms: u128,

    /// Timestamp when execution started (Unix epoch ms)
    pub started_at: u128,
}

/// Locate a sibling binary next to the current executable.
///
/// The driver and the sample binaries are built into the same directory, so
/// no search path or environment lookup is involved.
///
/// # Errors
///
/// Returns an error when the current executable cannot be resolved or the
/// sibling binary does not exist.
pub fn sibling_binary(bin_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut path = std::env::current_exe()?;
    path.pop();
    path.push(format!("{bin_name}{}", std::env::consts::EXE_SUFFIX));

    if !path.exists() {
        return Err(format!("sample binary not found: {}", path.display()).into());
    }
    Ok(path)
}

/// Run a sample binary with no arguments and capture everything it did.
///
/// # Errors
///
/// Returns an error when the binary cannot be spawned or the system clock
/// reads before the Unix epoch.
pub fn run_binary(binary: &Path) -> Result<RunOutput, Box<dyn std::error::Error>> {
    let started_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let start = Instant::now();

    let output = Command::new(binary).output()?;

    Ok(RunOutput {
        binary: binary.display().to_string(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        duration_ms: start.elapsed().as_millis(),
        started_at,
    })
}

/// Static regex for the stable failure line (compiled once)
static FAILURE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^error: ([a-z][a-z ]*): (.+)$").expect("failure line pattern is valid")
});

/// Extract the failure kind and message from a sample's diagnostic output.
///
/// Matches the first line of the failure block, `error: <kind>: <message>`.
#[must_use]
pub fn extract_failure(stderr: &str) -> Option<(String, String)> {
    let caps = FAILURE_LINE.captures(stderr)?;

    Some((
        caps.get(1)?.as_str().to_string(), // kind
        caps.get(2)?.as_str().to_string(), // message
    ))
}

/// Outcome of assessing one captured run against the sample's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Everything that deviated from the contract; empty means the sample
    /// failed exactly as designed.
    pub problems: Vec<String>,
}

impl Verdict {
    #[must_use]
    pub fn as_designed(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Assess a captured run against `sample`'s contract: a non-zero exit, the
/// exact expected stdout lines, and the fixed failure on the diagnostic
/// channel.
#[must_use]
pub fn assess(sample: Sample, output: &RunOutput) -> Verdict {
    let mut problems = Vec::new();

    match output.exit_code {
        Some(0) => problems.push("exited 0 instead of failing".to_string()),
        Some(_) => {}
        None => problems.push("killed by a signal instead of exiting".to_string()),
    }

    let expected = sample.expected_stdout();
    let actual: Vec<String> = output.stdout.lines().map(str::to_string).collect();
    if actual != expected {
        problems.push(format!(
            "stdout mismatch: expected {expected:?}, got {actual:?}"
        ));
    }

    match extract_failure(&output.stderr) {
        Some((kind, message)) => {
            if kind != ErrorKind::InvalidArgument.label() {
                problems.push(format!("unexpected failure kind: {kind}"));
            }
            if message != FAILURE_MESSAGE {
                problems.push(format!("unexpected failure message: {message}"));
            }
        }
        None => problems.push("no failure block on stderr".to_string()),
    }

    Verdict { problems }
}

/// One sample's line in the machine-readable summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResult {
    /// Sample name
    pub sample: String,

    /// Process exit code (None if killed by signal)
    pub exit_code: Option<i32>,

    /// Whether the run matched the contract end to end
    pub as_designed: bool,

    /// Failure extracted from the diagnostic channel, as `<kind>: <message>`
    pub failure: Option<String>,

    /// Execution duration in milliseconds
    pub duration_ms: u128,
}

impl SampleResult {
    /// Build one summary entry from a captured run and its verdict.
    #[must_use]
    pub fn new(sample: Sample, output: &RunOutput, verdict: &Verdict) -> Self {
        SampleResult {
            sample: sample.name().to_string(),
            exit_code: output.exit_code,
            as_designed: verdict.as_designed(),
            failure: extract_failure(&output.stderr)
                .map(|(kind, message)| format!("{kind}: {message}")),
            duration_ms: output.duration_ms,
        }
    }
}

/// Machine-readable summary of a full driver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-sample results (in execution order)
    pub samples: Vec<SampleResult>,

    /// Number of samples run
    pub total: usize,

    /// Number of samples that failed exactly as designed
    pub as_designed: usize,
}

impl RunSummary {
    /// Create from a collection of per-sample results.
    #[must_use]
    pub fn from_results(samples: Vec<SampleResult>) -> Self {
        let total = samples.len();
        let as_designed = samples.iter().filter(|s| s.as_designed).count();
        RunSummary {
            samples,
            total,
            as_designed,
        }
    }

    /// True when every sample failed exactly as designed.
    #[must_use]
    pub fn all_as_designed(&self) -> bool {
        self.as_designed == self.total
    }

    /// Format as a single JSON line for machine consumption.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
