//! `Result`-returning variants of the facade operations that take a second
//! operand or an output buffer.
//!
//! On rejection nothing is written and the error is logged at debug level.

use crate::error::{KernelError, KernelResult};
use crate::ops::arith;
use crate::traits::Element;
use crate::validation::{validate_operand_len, validate_output_len};

fn log_rejection(err: &KernelError) {
    log::debug!("rejected kernel call: {}", err);
}

/// Checked [`arith::elementwise_multiply`].
pub fn try_elementwise_multiply<E: Element>(x: &mut [E], y: &[E]) -> KernelResult<()> {
    validate_operand_len("elementwise_multiply", x.len(), y.len()).inspect_err(log_rejection)?;
    arith::elementwise_multiply(x, y);
    Ok(())
}

/// Checked [`arith::elementwise_multiply_out`].
pub fn try_elementwise_multiply_out<E: Element>(
    out: &mut [E],
    x: &[E],
    y: &[E],
) -> KernelResult<()> {
    validate_operand_len("elementwise_multiply_out", x.len(), y.len())
        .and_then(|()| validate_output_len("elementwise_multiply_out", x.len(), out.len()))
        .inspect_err(log_rejection)?;
    arith::elementwise_multiply_out(out, x, y);
    Ok(())
}

/// Checked [`arith::elementwise_add`].
pub fn try_elementwise_add<E: Element>(x: &mut [E], y: &[E]) -> KernelResult<()> {
    validate_operand_len("elementwise_add", x.len(), y.len()).inspect_err(log_rejection)?;
    arith::elementwise_add(x, y);
    Ok(())
}
