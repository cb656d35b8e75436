//! Elementwise arithmetic and reductions over float slices.
//!
//! Each loop is emitted once per float type as a plain, non-generic
//! `#[inline(never)]` function (`scalar_sum_f32`, `scalar_mul_f64`, ...), so it
//! is code-generated inside this crate at this crate's opt-level. The generic
//! `scalar_*` entry points only forward to them through [`ScalarFloat`].
//!
//! Binary operations read only `y[..x.len()]`; indexing past the end of a
//! short `y` or `out` panics.

use crate::ScalarFloat;

macro_rules! define_scalar_arith {
    (
        $t:ident,
        $sum:ident,
        $mul:ident,
        $mul_into:ident,
        $mul_scalar:ident,
        $add:ident,
        $add_scalar:ident,
        $clamp_below:ident
    ) => {
        /// Sum: `x[0] + x[1] + ... + x[n-1]`, accumulated left to right.
        ///
        /// Returns `+0.0` for an empty slice.
        #[inline(never)]
        pub fn $sum(x: &[$t]) -> $t {
            let mut acc: $t = 0.0;
            for i in 0..x.len() {
                acc += x[i];
            }
            acc
        }

        /// Vector mul in place: `x[i] *= y[i]`
        #[inline(never)]
        pub fn $mul(x: &mut [$t], y: &[$t]) {
            for i in 0..x.len() {
                x[i] *= y[i];
            }
        }

        /// Vector mul into a destination: `out[i] = x[i] * y[i]`
        ///
        /// `out[x.len()..]` is left as it was.
        #[inline(never)]
        pub fn $mul_into(out: &mut [$t], x: &[$t], y: &[$t]) {
            for i in 0..x.len() {
                out[i] = x[i] * y[i];
            }
        }

        /// Scale: `x[i] *= a`
        #[inline(never)]
        pub fn $mul_scalar(x: &mut [$t], a: $t) {
            for i in 0..x.len() {
                x[i] *= a;
            }
        }

        /// Vector add in place: `x[i] += y[i]`
        #[inline(never)]
        pub fn $add(x: &mut [$t], y: &[$t]) {
            for i in 0..x.len() {
                x[i] += y[i];
            }
        }

        /// Offset: `x[i] += a`
        #[inline(never)]
        pub fn $add_scalar(x: &mut [$t], a: $t) {
            for i in 0..x.len() {
                x[i] += a;
            }
        }

        /// Clamp below: `x[i] = 0` where `x[i] < a`, otherwise unchanged.
        ///
        /// Values under the threshold are zeroed, not raised to `a`. NaN
        /// compares false and is kept.
        #[inline(never)]
        pub fn $clamp_below(x: &mut [$t], a: $t) {
            for i in 0..x.len() {
                if x[i] < a {
                    x[i] = 0.0;
                }
            }
        }

        impl ScalarFloat for $t {
            const ZERO: Self = 0.0;

            #[inline(always)]
            fn scalar_sum(x: &[Self]) -> Self {
                $sum(x)
            }

            #[inline(always)]
            fn scalar_mul(x: &mut [Self], y: &[Self]) {
                $mul(x, y)
            }

            #[inline(always)]
            fn scalar_mul_into(out: &mut [Self], x: &[Self], y: &[Self]) {
                $mul_into(out, x, y)
            }

            #[inline(always)]
            fn scalar_mul_scalar(x: &mut [Self], a: Self) {
                $mul_scalar(x, a)
            }

            #[inline(always)]
            fn scalar_add(x: &mut [Self], y: &[Self]) {
                $add(x, y)
            }

            #[inline(always)]
            fn scalar_add_scalar(x: &mut [Self], a: Self) {
                $add_scalar(x, a)
            }

            #[inline(always)]
            fn scalar_clamp_below(x: &mut [Self], a: Self) {
                $clamp_below(x, a)
            }
        }
    };
}

define_scalar_arith!(
    f32,
    scalar_sum_f32,
    scalar_mul_f32,
    scalar_mul_into_f32,
    scalar_mul_scalar_f32,
    scalar_add_f32,
    scalar_add_scalar_f32,
    scalar_clamp_below_f32
);

define_scalar_arith!(
    f64,
    scalar_sum_f64,
    scalar_mul_f64,
    scalar_mul_into_f64,
    scalar_mul_scalar_f64,
    scalar_add_f64,
    scalar_add_scalar_f64,
    scalar_clamp_below_f64
);

/// Sum of `x`, accumulated left to right.
#[inline(always)]
pub fn scalar_sum<T: ScalarFloat>(x: &[T]) -> T {
    T::scalar_sum(x)
}

/// `x[i] *= y[i]`
#[inline(always)]
pub fn scalar_mul<T: ScalarFloat>(x: &mut [T], y: &[T]) {
    T::scalar_mul(x, y)
}

/// `out[i] = x[i] * y[i]`; `out[x.len()..]` is untouched.
#[inline(always)]
pub fn scalar_mul_into<T: ScalarFloat>(out: &mut [T], x: &[T], y: &[T]) {
    T::scalar_mul_into(out, x, y)
}

/// `x[i] *= a`
#[inline(always)]
pub fn scalar_mul_scalar<T: ScalarFloat>(x: &mut [T], a: T) {
    T::scalar_mul_scalar(x, a)
}

/// `x[i] += y[i]`
#[inline(always)]
pub fn scalar_add<T: ScalarFloat>(x: &mut [T], y: &[T]) {
    T::scalar_add(x, y)
}

/// `x[i] += a`
#[inline(always)]
pub fn scalar_add_scalar<T: ScalarFloat>(x: &mut [T], a: T) {
    T::scalar_add_scalar(x, a)
}

/// `x[i] = 0` where `x[i] < a`
#[inline(always)]
pub fn scalar_clamp_below<T: ScalarFloat>(x: &mut [T], a: T) {
    T::scalar_clamp_below(x, a)
}
