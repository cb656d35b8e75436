use thiserror::Error;

/// Precondition failures reported by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("{op}: operand has {actual} elements, need at least {required}")]
    OperandTooShort {
        op: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("{op}: output has {actual} elements, need at least {required}")]
    OutputTooShort {
        op: &'static str,
        required: usize,
        actual: usize,
    },
}

pub type KernelResult<T> = Result<T, KernelError>;
