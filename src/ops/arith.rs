//! Dispatch facade for the arithmetic kernels.
//!
//! Every function forwards to `DefaultBackend`, which is fixed at compile
//! time, so each call inlines to the selected kernel with no runtime branch.
//!
//! # Example
//!
//! ```
//! use fvec_kernels::ops::arith::{clamp_below_scalar, elementwise_multiply, sum};
//!
//! let mut x = vec![2.0f32, -3.0, 4.0];
//! elementwise_multiply(&mut x, &[2.0, 2.0, 2.0]);
//! clamp_below_scalar(&mut x, 0.0);
//! assert_eq!(x, vec![4.0, 0.0, 8.0]);
//! assert_eq!(sum(&x), 12.0);
//! ```
//!
//! # Panics
//!
//! The binary operations panic if `y` (or `out`) is shorter than `x`. Nothing
//! is written in that case. See [`crate::ops::checked`] for `Result`-returning
//! variants.

use crate::backend::DefaultBackend;
use crate::traits::{Backend, Element, Kernels};

#[inline(always)]
fn kernels<E: Element>() -> <DefaultBackend as Backend>::Kernels<E> {
    DefaultBackend::init::<E>()
}

/// Sum of `x`; `0` for an empty slice.
///
/// The portable kernel adds strictly left to right. The native kernel adds
/// per lane first, so the result may differ by rounding (never for
/// integer-valued inputs that sum exactly).
#[inline(always)]
pub fn sum<E: Element>(x: &[E]) -> E {
    kernels::<E>().sum(x)
}

/// `x[i] *= y[i]` for every `i < x.len()`.
#[inline(always)]
pub fn elementwise_multiply<E: Element>(x: &mut [E], y: &[E]) {
    kernels::<E>().elementwise_multiply(x, y)
}

/// `out[i] = x[i] * y[i]` for every `i < x.len()`. `out[x.len()..]` is not touched.
#[inline(always)]
pub fn elementwise_multiply_out<E: Element>(out: &mut [E], x: &[E], y: &[E]) {
    kernels::<E>().elementwise_multiply_out(out, x, y)
}

#[inline(always)]
pub fn elementwise_multiply_scalar<E: Element>(x: &mut [E], a: E) {
    kernels::<E>().elementwise_multiply_scalar(x, a)
}

#[inline(always)]
pub fn elementwise_add<E: Element>(x: &mut [E], y: &[E]) {
    kernels::<E>().elementwise_add(x, y)
}

#[inline(always)]
pub fn elementwise_add_scalar<E: Element>(x: &mut [E], a: E) {
    kernels::<E>().elementwise_add_scalar(x, a)
}

/// Zero every element strictly below `a`.
///
/// Elements under the threshold become `0`, not `a`; this is not a
/// `max(x, a)`. NaN elements are kept.
#[inline(always)]
pub fn clamp_below_scalar<E: Element>(x: &mut [E], a: E) {
    kernels::<E>().clamp_below_scalar(x, a)
}
