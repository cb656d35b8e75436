pub mod arith;
pub mod checked;
pub mod round;

pub use arith::{
    clamp_below_scalar, elementwise_add, elementwise_add_scalar, elementwise_multiply,
    elementwise_multiply_out, elementwise_multiply_scalar, sum,
};
pub use checked::{try_elementwise_add, try_elementwise_multiply, try_elementwise_multiply_out};
pub use round::{round, round_up};
