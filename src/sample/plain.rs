//! The simplest variant: one printed line, then a direct terminal call.

use crate::error::ChainError;
use crate::runner::RunContext;
use crate::sample::FAILURE_MESSAGE;

pub(super) fn expected_stdout() -> Vec<String> {
    vec!["TEST METHOD!!".to_string()]
}

/// Entry: print once, then fail. The failure unwinds through this frame only.
pub(super) fn run(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    test_method(ctx)?;
    throwing_method(ctx)
}

fn test_method(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    ctx.enter("test_method", vec![]);
    ctx.write_line("TEST METHOD!!");
    ctx.exit("test_method", false);
    Ok(())
}

fn throwing_method(ctx: &mut RunContext<'_>) -> Result<(), ChainError> {
    ctx.enter("throwing_method", vec![]);
    let error = ChainError::invalid_argument(FAILURE_MESSAGE);
    ctx.raise(&error);
    ctx.exit("throwing_method", true);
    Err(error)
}
