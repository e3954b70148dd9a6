//! Black-box tests for the three sample binaries: exact stdout, the failure
//! block on stderr, and the non-zero exit status.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn test_plain_stdout_exact() {
    let output = run_binary("failtrail-plain");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "TEST METHOD!!\n");
}

#[test]
fn test_plain_exits_nonzero() {
    let output = run_binary("failtrail-plain");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_plain_reports_failure_on_stderr() {
    let output = run_binary("failtrail-plain");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: invalid argument: Test exception"),
        "stderr was:\n{stderr}"
    );
    assert!(stderr.contains("throwing_method"), "stderr was:\n{stderr}");
}

#[test]
fn test_hello_stdout_exact() {
    let output = run_binary("failtrail-hello");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "TEST METHOD test string 123 234 127 true\n"
    );
}

#[test]
fn test_hello_output_is_complete_despite_the_failure() {
    let output = run_binary("failtrail-hello");
    assert!(!output.status.success());
    // The whole line landed before the process died: output is flushed
    // before the failure is reported.
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("true\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Test exception"));
}

#[test]
fn test_hello_frame_trail_lists_raising_frame_first() {
    let output = run_binary("failtrail-hello");
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let raising = stderr.find("throwing_method").expect("trail missing");
    let middle = stderr.find("test_method2").expect("trail missing");
    assert!(
        raising < middle,
        "frame trail should start at the raise:\n{stderr}"
    );
}

#[test]
fn test_hello_origin_line_present() {
    let output = run_binary("failtrail-hello");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("  at ") && stderr.contains("hello.rs:"),
        "origin missing from stderr:\n{stderr}"
    );
}

#[test]
fn test_byte_stdout_exact_lines() {
    let output = run_binary("failtrail-byte");
    assert_eq!(
        lines_of(&output.stdout),
        vec!["TEST METHOD 127", "TEST METHOD true"]
    );
}

#[test]
fn test_byte_fails_with_the_fixed_message() {
    let output = run_binary("failtrail-byte");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Test exception"));
}

#[test]
fn test_every_sample_exits_nonzero_with_the_message() {
    for bin in SAMPLE_BINS {
        let output = run_binary(bin);
        assert!(!output.status.success(), "{bin} should not exit cleanly");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("invalid argument") && stderr.contains("Test exception"),
            "{bin} stderr was:\n{stderr}"
        );
    }
}

#[test]
fn test_samples_keep_stdout_clean_of_diagnostics() {
    for bin in SAMPLE_BINS {
        let output = run_binary(bin);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            !stdout.contains("error:"),
            "{bin} leaked diagnostics into stdout:\n{stdout}"
        );
        for line in stdout.lines() {
            assert!(
                line.starts_with("TEST METHOD"),
                "{bin} printed an unexpected line: {line}"
            );
        }
    }
}
