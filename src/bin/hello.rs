//! Sample binary `failtrail-hello`: prints its five literal arguments on one
//! line, then fails two calls deeper with an unrecovered `InvalidArgument`
//! carrying `"Test exception"` and exits 1.

use failtrail::runner;
use failtrail::sample::Sample;

fn main() {
    runner::sample_main(Sample::Hello);
}
