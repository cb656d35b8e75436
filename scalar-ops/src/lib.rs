//! Portable scalar-loop implementations of the fvec arithmetic kernels.
//!
//! These serve as:
//! 1. The fallback kernel on targets without a native vector backend.
//! 2. The golden reference that every native kernel is tested against.
//!
//! Every operation is a direct index-by-index loop in storage order, emitted
//! as a non-generic function per float type. This crate is compiled with
//! `opt-level = 1` (configured in the workspace root Cargo.toml); because the
//! loops are not generic they are code-generated here under that setting, so
//! they are not unrolled or auto-vectorized in downstream binaries.

pub mod arith;

use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Floating-point element accepted by the scalar reference loops.
///
/// Each method forwards to the non-generic loop for that type in [`arith`].
pub trait ScalarFloat:
    Copy + PartialOrd + Add<Output = Self> + Mul<Output = Self> + AddAssign + MulAssign
{
    /// Additive identity (`+0.0`).
    const ZERO: Self;

    fn scalar_sum(x: &[Self]) -> Self;
    fn scalar_mul(x: &mut [Self], y: &[Self]);
    fn scalar_mul_into(out: &mut [Self], x: &[Self], y: &[Self]);
    fn scalar_mul_scalar(x: &mut [Self], a: Self);
    fn scalar_add(x: &mut [Self], y: &[Self]);
    fn scalar_add_scalar(x: &mut [Self], a: Self);
    fn scalar_clamp_below(x: &mut [Self], a: Self);
}

pub use arith::{
    scalar_add, scalar_add_scalar, scalar_clamp_below, scalar_mul, scalar_mul_into,
    scalar_mul_scalar, scalar_sum,
};
