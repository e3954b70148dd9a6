//! # failtrail
//!
//! Driver binary: runs each sample binary as a child process, captures its
//! stdout, stderr, and exit status, and checks that the sample failed exactly
//! as designed. Prints one report block per sample followed by a single-line
//! JSON summary, and exits 0 only when every sample held its contract.
//!
//! Reads no command-line arguments and no environment variables; the sample
//! binaries are located next to the driver's own executable.

use failtrail::fatal_error;
use failtrail::harness::{self, RunOutput, RunSummary, SampleResult, Verdict};
use failtrail::sample::Sample;

/// Print the human-readable block for one sample run.
fn print_block(sample: Sample, output: &RunOutput, verdict: &Verdict) {
    println!("== {} ==", sample.name());
    println!("binary: {}", output.binary);
    match output.exit_code {
        Some(code) => println!("exit: {code}"),
        None => println!("exit: killed by a signal"),
    }

    if !output.stdout.is_empty() {
        println!("stdout:");
        for line in output.stdout.lines() {
            println!("  {line}");
        }
    }

    if let Some((kind, message)) = harness::extract_failure(&output.stderr) {
        println!("failure: {kind}: {message}");
    }

    if verdict.as_designed() {
        println!("verdict: failed as designed");
    } else {
        println!("verdict: NOT as designed");
        for problem in &verdict.problems {
            println!("  - {problem}");
        }
    }
    println!();
}

fn main() {
    let mut results = Vec::new();

    for sample in Sample::ALL {
        let binary = match harness::sibling_binary(sample.bin_name()) {
            Ok(path) => path,
            Err(e) => fatal_error(&format!("{}: {}", sample.name(), e)),
        };

        let output = match harness::run_binary(&binary) {
            Ok(output) => output,
            Err(e) => fatal_error(&format!("{}: {}", sample.name(), e)),
        };

        let verdict = harness::assess(sample, &output);
        print_block(sample, &output, &verdict);
        results.push(SampleResult::new(sample, &output, &verdict));
    }

    let summary = RunSummary::from_results(results);
    println!("{}", summary.to_json());

    if !summary.all_as_designed() {
        std::process::exit(1);
    }
}
