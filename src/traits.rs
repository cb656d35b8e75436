use std::fmt::Debug;

use fvec_scalar_ops::ScalarFloat;

use crate::cpu_kernels::IsaLevel;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Core element trait for the arithmetic kernels.
///
/// Implemented for `f32` and `f64` only; the trait is sealed so `ELEM_ID`
/// always identifies the concrete type, which the native dispatch relies on
/// when it reinterprets `&[E]` as `&[f32]` or `&[f64]`.
pub trait Element:
    ScalarFloat + sealed::Sealed + Debug + Default + Send + Sync + 'static
{
    const ONE: Self;
    /// Element type discriminant: 0=f32, 1=f64
    const ELEM_ID: u8;

    /// Convert from `f64`, rounding to nearest for `f32`.
    fn from_f64(v: f64) -> Self;
    /// Widen to `f64` (exact for both element types).
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    const ONE: Self = 1.0;
    const ELEM_ID: u8 = 0;

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const ONE: Self = 1.0;
    const ELEM_ID: u8 = 1;

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}

// ==========================================================================
// Backend Trait
// ==========================================================================

/// A kernel implementation strategy, fixed at compile time.
///
/// Backends are zero-sized; `init` is free and is called on every facade
/// invocation.
pub trait Backend: Send + Sync + 'static {
    const NAME: &'static str;
    /// Instruction set the backend's kernels are written against.
    const ISA: IsaLevel;

    /// Associated kernel type, parameterized by element precision.
    type Kernels<E: Element>: Kernels<E>;

    /// Initialize kernels for a given precision.
    fn init<E: Element>() -> Self::Kernels<E>;
}

// ==========================================================================
// Kernels Trait
// ==========================================================================

/// The arithmetic operation set every backend provides.
///
/// Binary operations process `x.len()` elements and read only the first
/// `x.len()` elements of `y` (and write only that prefix of `out`). A `y` or
/// `out` shorter than `x` is a caller bug and panics.
pub trait Kernels<E: Element>: Send + Sync {
    /// Sum of all elements in storage order; `0` for an empty slice.
    fn sum(&self, x: &[E]) -> E;

    /// `x[i] *= y[i]`
    fn elementwise_multiply(&self, x: &mut [E], y: &[E]);

    /// `out[i] = x[i] * y[i]`; `out[x.len()..]` is not touched.
    fn elementwise_multiply_out(&self, out: &mut [E], x: &[E], y: &[E]);

    /// `x[i] *= a`
    fn elementwise_multiply_scalar(&self, x: &mut [E], a: E);

    /// `x[i] += y[i]`
    fn elementwise_add(&self, x: &mut [E], y: &[E]);

    /// `x[i] += a`
    fn elementwise_add_scalar(&self, x: &mut [E], a: E);

    /// `x[i] = 0` where `x[i] < a`; other elements (and NaN) are unchanged.
    fn clamp_below_scalar(&self, x: &mut [E], a: E);
}
