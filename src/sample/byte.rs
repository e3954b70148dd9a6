//! Byte variant: two printed lines from two frames, then the failure.

use crate::error::ChainError;
use crate::runner::RunContext;
use crate::sample::FAILURE_MESSAGE;
use crate::value::Value;

const TEST_BYTE: i8 = 127;
const TEST_FLAG: bool = true;

pub(super) fn expected_stdout() -> Vec<String> {
    vec![
        format!("TEST METHOD {TEST_BYTE}"),
        format!("TEST METHOD {TEST_FLAG}"),
    ]
}

/// Entry: hand the byte to the chain; the boolean joins one level down.
pub(super) fn run(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    test_method(ctx, TEST_BYTE)
}

fn test_method(ctx: &mut RunContext<'_>, test1: i8) -> Result<(), ChainError> {
    let args = vec![Value::from(test1)];
    ctx.enter("test_method", args.clone());
    ctx.write_line(&format!("TEST METHOD {}", Value::join(&args)));

    let result = test_method2(ctx, TEST_FLAG);
    ctx.exit("test_method", result.is_err());
    result
}

fn test_method2(ctx: &mut RunContext<'_>, test2: bool) -> Result<(), ChainError> {
    let args = vec![Value::from(test2)];
    ctx.enter("test_method2", args.clone());
    ctx.write_line(&format!("TEST METHOD {}", Value::join(&args)));

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
