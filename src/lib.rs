//! # failtrail
//!
//! Deliberately failing sample programs and the harness that watches them
//! fail. Each sample prints fixed literal lines, then signals an
//! `InvalidArgument` failure that propagates unrecovered through the whole
//! call chain to a non-zero process exit. The driver binary runs the samples
//! as child processes and verifies the contract from outside.

pub mod error;
pub mod harness;
pub mod report;
pub mod runner;
pub mod sample;
pub mod trace;
pub mod value;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
