//! Length validation for kernel operands.
//!
//! The `validate_*` functions back the checked (`try_*`) entry points. The
//! `assert_*` variants are used by the kernels themselves: they run once per
//! call, before any memory is touched, and panic with the same message.

use crate::error::{KernelError, KernelResult};

/// Validate that a second operand covers the first (`actual >= required`).
#[inline]
pub fn validate_operand_len(op: &'static str, required: usize, actual: usize) -> KernelResult<()> {
    if actual < required {
        return Err(KernelError::OperandTooShort { op, required, actual });
    }
    Ok(())
}

/// Validate that a destination buffer can hold `required` results.
#[inline]
pub fn validate_output_len(op: &'static str, required: usize, actual: usize) -> KernelResult<()> {
    if actual < required {
        return Err(KernelError::OutputTooShort { op, required, actual });
    }
    Ok(())
}

#[inline(always)]
#[track_caller]
pub(crate) fn assert_operand_len(op: &'static str, required: usize, actual: usize) {
    if let Err(err) = validate_operand_len(op, required, actual) {
        panic!("{err}");
    }
}

#[inline(always)]
#[track_caller]
pub(crate) fn assert_output_len(op: &'static str, required: usize, actual: usize) {
    if let Err(err) = validate_output_len(op, required, actual) {
        panic!("{err}");
    }
}
