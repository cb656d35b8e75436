//! fvec-kernels: vectorized arithmetic over contiguous `f32`/`f64` buffers.
//!
//! This crate provides a small set of array kernels with:
//! - **Compile-Time Dispatch**: SSE2/AVX on x86_64, NEON on aarch64, scalar loops elsewhere
//! - **Zero-Cost Facade**: free functions routed through a `cfg`-selected `DefaultBackend`
//! - **Reference Kernels**: the `fvec-scalar-ops` loops define the semantics every
//!   native kernel is tested against
//!
//! # Quick Start
//!
//! ```
//! use fvec_kernels::{elementwise_multiply_out, sum};
//!
//! let mut out = vec![0.0f64; 5];
//! elementwise_multiply_out(&mut out, &[2.0, 3.0, 4.0, 1.0], &[2.0, 2.0, 2.0, 3.0]);
//! assert_eq!(out, vec![4.0, 6.0, 8.0, 3.0, 0.0]);
//! assert_eq!(sum(&out), 21.0);
//! ```
//!
//! Enable the `portable` feature to run the scalar loops on every target.

#[macro_use]
pub mod macros;

pub mod backend;
pub mod cpu_kernels;
pub mod error;
pub mod ops;
pub mod traits;
pub mod validation;

pub use backend::{backend_info, BackendInfo, DefaultBackend, PortableBackend};
pub use cpu_kernels::{get_isa_level, IsaLevel, PortableKernels, NATIVE_ISA};
pub use error::{KernelError, KernelResult};
pub use fvec_scalar_ops::ScalarFloat;
pub use ops::arith::{
    clamp_below_scalar, elementwise_add, elementwise_add_scalar, elementwise_multiply,
    elementwise_multiply_out, elementwise_multiply_scalar, sum,
};
pub use ops::checked::{try_elementwise_add, try_elementwise_multiply, try_elementwise_multiply_out};
pub use ops::round::{round, round_up};
pub use traits::{Backend, Element, Kernels};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use backend::NativeBackend;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use cpu_kernels::NativeKernels;
