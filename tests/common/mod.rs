//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Helper to get the path of a compiled binary by name
pub fn get_binary_path(bin_name: &str) -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push(format!("{bin_name}{}", env::consts::EXE_SUFFIX));

    // If the binary doesn't exist yet, build it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", bin_name])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build {bin_name}: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to run a binary with no arguments and capture its output
pub fn run_binary(bin_name: &str) -> Output {
    let binary = get_binary_path(bin_name);
    Command::new(binary)
        .output()
        .expect("Failed to execute binary")
}

/// Lines of a byte stream, lossily decoded
pub fn lines_of(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Every sample binary shipped with the crate
pub const SAMPLE_BINS: [&str; 3] = ["failtrail-plain", "failtrail-hello", "failtrail-byte"];
