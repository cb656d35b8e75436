//! Decimal rounding helpers for scalar values.

use crate::traits::Element;

#[inline]
fn scale(prec: i32) -> f64 {
    10f64.powi(prec)
}

/// Round `value` to `prec` decimal places, halves away from zero.
///
/// A negative `prec` rounds to tens, hundreds and so on. The computation is
/// done in `f64`.
///
/// ```
/// assert_eq!(fvec_kernels::round(0.123456789f64, 3), 0.123);
/// assert_eq!(fvec_kernels::round(1234.5f32, -2), 1200.0);
/// ```
pub fn round<E: Element>(value: E, prec: i32) -> E {
    let s = scale(prec);
    E::from_f64((value.to_f64() * s).round() / s)
}

/// Round `value` up (towards positive infinity) to `prec` decimal places.
pub fn round_up<E: Element>(value: E, prec: i32) -> E {
    let s = scale(prec);
    E::from_f64((value.to_f64() * s).ceil() / s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64() {
        assert_eq!(round(0.123456789f64, 3), 0.123);
        assert_eq!(round(2.5f64, 0), 3.0);
        assert_eq!(round(-2.5f64, 0), -3.0);
        assert_eq!(round(1234.5f64, -2), 1200.0);
    }

    #[test]
    fn round_f32() {
        assert_eq!(round(0.123456789f32, 3), 0.123f32);
        assert_eq!(round(0.0005f32, 2), 0.0);
    }

    #[test]
    fn round_up_both_precisions() {
        assert_eq!(round_up(0.123456789f64, 3), 0.124);
        assert_eq!(round_up(0.123456789f32, 3), 0.124f32);
        assert_eq!(round_up(-0.1239f64, 3), -0.123);
        assert_eq!(round_up(1201.0f64, -2), 1300.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round(f64::NAN, 2).is_nan());
        assert_eq!(round(f32::INFINITY, 2), f32::INFINITY);
        assert_eq!(round_up(f64::NEG_INFINITY, 1), f64::NEG_INFINITY);
    }
}
