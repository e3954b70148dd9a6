//! Five-argument variant: one formatted line, then a failure two calls deep.

use crate::error::ChainError;
use crate::runner::RunContext;
use crate::sample::FAILURE_MESSAGE;
use crate::value::Value;

const TEST1: &str = "test string";
const TEST2: i32 = 123;
const TEST3: i64 = 234;
const TEST4: i8 = 127;
const TEST5: bool = true;

pub(super) fn expected_stdout() -> Vec<String> {
    vec![format!("TEST METHOD {TEST1} {TEST2} {TEST3} {TEST4} {TEST5}")]
}

/// Entry: build the five literals and hand them down the chain.
pub(super) fn run(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    test_method(ctx, TEST1, TEST2, TEST3, TEST4, TEST5)
}

fn test_method(
    ctx: &mut RunContext<'_>,
    test1: &str,
    test2: i32,
    test3: i64,
    test4: i8,
    test5: bool,
) -> Result<(), ChainError> {
    let args = vec![
        Value::from(test1),
        Value::from(test2),
        Value::from(test3),
        Value::from(test4),
        Value::from(test5),
    ];
    ctx.enter("test_method", args.clone());
    ctx.write_line(&format!("TEST METHOD {}", Value::join(&args)));

    let result = test_method2(ctx);
    ctx.exit("test_method", result.is_err());
    result
}

fn test_method2(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    ctx.enter("test_method2", vec![]);
    let result = throwing_method(ctx, FAILURE_MESSAGE);
    ctx.exit("test_method2", result.is_err());
    result
}

fn throwing_method(ctx: &mut RunContext<'_>, message: &str) -> Result<(), ChainError> {
    ctx.enter("throwing_method", vec![Value::from(message)]);
    let error = ChainError::invalid_argument(message);
    ctx.raise(&error);
    ctx.exit("throwing_method", true);
    Err(error)
}
