//! Sample binary `failtrail-byte`: prints a byte and a boolean on separate
//! lines, then fails with an unrecovered `InvalidArgument` carrying
//! `"Test exception"` and exits 1.

use failtrail::runner;
use failtrail::sample::Sample;

fn main() {
    runner::sample_main(Sample::Byte);
}
