//! # CPU Kernel Macro Architecture
//!
//! 3-layer macro system for ISA-specialized SIMD kernels:
//!
//! ## Layer 1: `simd_primitive!` (src/macros/simd_primitive.rs)
//! Maps abstract ops to hardware intrinsics: `simd_primitive!(sse2, f32, add, a, b)`.
//! Covers sse2/avx/neon × f32/f64.
//!
//! ## Layer 2: `define_arith_ops!` (src/macros/operator_templates.rs)
//! Operator bodies parameterized by ISA+Element.
//!
//! ## Layer 3: `expand_isa_impls!` (src/macros/expand.rs)
//! Generates per-ISA modules: `expand_isa_impls!(sse2_f32, sse2, f32)`.
//!
//! ## Dispatch macros (this file)
//! Selection is a compile-time constant (`NATIVE_ISA`), so every `match`
//! below folds to a single arm.
//!
//! | Macro | Signature | Used by |
//! |---|---|---|
//! | `dispatch_sum_raw!` | `(x, res)` | sum |
//! | `dispatch_inplace_binary!` | `(x, y, op)` | mul/add |
//! | `dispatch_with_scalar!` | `(x, a, op)` | mul_scalar/add_scalar/clamp_below |
//! | `dispatch_mul_into!` | `(out, x, y)` | mul_into |

use std::fmt;

#[cfg(test)]
#[macro_use]
mod test_templates;

pub mod portable;

#[cfg(target_arch = "x86_64")]
pub mod sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub mod avx;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use portable::PortableKernels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsaLevel {
    Scalar,
    Sse2,
    Avx,
    Neon,
}

impl IsaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            IsaLevel::Scalar => "scalar",
            IsaLevel::Sse2 => "sse2",
            IsaLevel::Avx => "avx",
            IsaLevel::Neon => "neon",
        }
    }

    /// f32 elements per vector register.
    pub const fn lanes_f32(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Sse2 => crate::simd_primitive!(sse2, f32, lanes),
            IsaLevel::Avx => crate::simd_primitive!(avx, f32, lanes),
            IsaLevel::Neon => crate::simd_primitive!(neon, f32, lanes),
        }
    }

    /// f64 elements per vector register.
    pub const fn lanes_f64(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Sse2 => crate::simd_primitive!(sse2, f64, lanes),
            IsaLevel::Avx => crate::simd_primitive!(avx, f64, lanes),
            IsaLevel::Neon => crate::simd_primitive!(neon, f64, lanes),
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Widest instruction set the native kernels were compiled for.
///
/// AVX is only picked when the build enables it (`-C target-feature=+avx`
/// or a `target-cpu` that implies it); there is no runtime probing.
pub const NATIVE_ISA: IsaLevel = if cfg!(all(target_arch = "x86_64", target_feature = "avx")) {
    IsaLevel::Avx
} else if cfg!(target_arch = "x86_64") {
    IsaLevel::Sse2
} else if cfg!(target_arch = "aarch64") {
    IsaLevel::Neon
} else {
    IsaLevel::Scalar
};

/// ISA level the public facade runs on: `Scalar` when the `portable`
/// feature is enabled, `NATIVE_ISA` otherwise.
pub const fn get_isa_level() -> IsaLevel {
    if cfg!(feature = "portable") {
        IsaLevel::Scalar
    } else {
        NATIVE_ISA
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use native::NativeKernels;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod native {
    use std::marker::PhantomData;

    use super::IsaLevel;
    #[cfg(target_arch = "x86_64")]
    use super::sse2;
    #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
    use super::avx;
    #[cfg(target_arch = "aarch64")]
    use super::neon;
    use super::NATIVE_ISA;
    use crate::traits::{Element, Kernels};

    /// SIMD kernels for the compiled-in ISA.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NativeKernels<E: Element> {
        _phantom: PhantomData<E>,
    }

    impl<E: Element> NativeKernels<E> {
        pub fn new() -> Self {
            Self { _phantom: PhantomData }
        }
    }

    // Reinterpret `&[E]` as `&[$t]`. Only valid inside an arm that matched
    // `E::ELEM_ID` to `$t`; `Element` is sealed, so the ID identifies the type.
    macro_rules! as_typed_slice {
        ($slice:expr, $t:ty) => {
            unsafe { std::slice::from_raw_parts($slice.as_ptr() as *const $t, $slice.len()) }
        };
    }

    macro_rules! as_typed_slice_mut {
        ($slice:expr, $t:ty) => {
            unsafe { std::slice::from_raw_parts_mut($slice.as_mut_ptr() as *mut $t, $slice.len()) }
        };
    }

    macro_rules! dispatch_sum_raw {
        ($x:expr, $res:expr) => {
            // SAFETY: the matched arm's element type is E; pointer and length
            // come from the same live slice and `$res` points at a local.
            unsafe {
                match (NATIVE_ISA, E::ELEM_ID) {
                    #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                    (IsaLevel::Avx, 0) => {
                        avx::avx_f32::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                    (IsaLevel::Avx, 1) => {
                        avx::avx_f64::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    #[cfg(target_arch = "x86_64")]
                    (IsaLevel::Sse2, 0) => {
                        sse2::sse2_f32::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    #[cfg(target_arch = "x86_64")]
                    (IsaLevel::Sse2, 1) => {
                        sse2::sse2_f64::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    #[cfg(target_arch = "aarch64")]
                    (IsaLevel::Neon, 0) => {
                        neon::neon_f32::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    #[cfg(target_arch = "aarch64")]
                    (IsaLevel::Neon, 1) => {
                        neon::neon_f64::sum_raw($x.as_ptr().cast(), $x.len(), $res.cast())
                    }
                    _ => unreachable!(
                        "no native kernel for {} / element {}",
                        NATIVE_ISA,
                        E::ELEM_ID
                    ),
                }
            }
        };
    }

    macro_rules! dispatch_inplace_binary {
        ($x:expr, $y:expr, $op:ident) => {
            match (NATIVE_ISA, E::ELEM_ID) {
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 0) => {
                    avx::avx_f32::$op(as_typed_slice_mut!($x, f32), as_typed_slice!($y, f32))
                }
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 1) => {
                    avx::avx_f64::$op(as_typed_slice_mut!($x, f64), as_typed_slice!($y, f64))
                }
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 0) => {
                    sse2::sse2_f32::$op(as_typed_slice_mut!($x, f32), as_typed_slice!($y, f32))
                }
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 1) => {
                    sse2::sse2_f64::$op(as_typed_slice_mut!($x, f64), as_typed_slice!($y, f64))
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 0) => {
                    neon::neon_f32::$op(as_typed_slice_mut!($x, f32), as_typed_slice!($y, f32))
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 1) => {
                    neon::neon_f64::$op(as_typed_slice_mut!($x, f64), as_typed_slice!($y, f64))
                }
                _ => unreachable!("no native kernel for {} / element {}", NATIVE_ISA, E::ELEM_ID),
            }
        };
    }

    /// Usage: dispatch_with_scalar!(x_mut_slice, scalar, op_name)
    macro_rules! dispatch_with_scalar {
        ($x:expr, $a:expr, $op:ident) => {
            match (NATIVE_ISA, E::ELEM_ID) {
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 0) => {
                    avx::avx_f32::$op(as_typed_slice_mut!($x, f32), $a.to_f64() as f32)
                }
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 1) => avx::avx_f64::$op(as_typed_slice_mut!($x, f64), $a.to_f64()),
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 0) => {
                    sse2::sse2_f32::$op(as_typed_slice_mut!($x, f32), $a.to_f64() as f32)
                }
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 1) => {
                    sse2::sse2_f64::$op(as_typed_slice_mut!($x, f64), $a.to_f64())
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 0) => {
                    neon::neon_f32::$op(as_typed_slice_mut!($x, f32), $a.to_f64() as f32)
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 1) => {
                    neon::neon_f64::$op(as_typed_slice_mut!($x, f64), $a.to_f64())
                }
                _ => unreachable!("no native kernel for {} / element {}", NATIVE_ISA, E::ELEM_ID),
            }
        };
    }

    macro_rules! dispatch_mul_into {
        ($out:expr, $x:expr, $y:expr) => {
            match (NATIVE_ISA, E::ELEM_ID) {
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 0) => {
                    avx::avx_f32::mul_into(
                        as_typed_slice_mut!($out, f32),
                        as_typed_slice!($x, f32),
                        as_typed_slice!($y, f32),
                    )
                }
                #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
                (IsaLevel::Avx, 1) => {
                    avx::avx_f64::mul_into(
                        as_typed_slice_mut!($out, f64),
                        as_typed_slice!($x, f64),
                        as_typed_slice!($y, f64),
                    )
                }
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 0) => {
                    sse2::sse2_f32::mul_into(
                        as_typed_slice_mut!($out, f32),
                        as_typed_slice!($x, f32),
                        as_typed_slice!($y, f32),
                    )
                }
                #[cfg(target_arch = "x86_64")]
                (IsaLevel::Sse2, 1) => {
                    sse2::sse2_f64::mul_into(
                        as_typed_slice_mut!($out, f64),
                        as_typed_slice!($x, f64),
                        as_typed_slice!($y, f64),
                    )
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 0) => {
                    neon::neon_f32::mul_into(
                        as_typed_slice_mut!($out, f32),
                        as_typed_slice!($x, f32),
                        as_typed_slice!($y, f32),
                    )
                }
                #[cfg(target_arch = "aarch64")]
                (IsaLevel::Neon, 1) => {
                    neon::neon_f64::mul_into(
                        as_typed_slice_mut!($out, f64),
                        as_typed_slice!($x, f64),
                        as_typed_slice!($y, f64),
                    )
                }
                _ => unreachable!("no native kernel for {} / element {}", NATIVE_ISA, E::ELEM_ID),
            }
        };
    }

    impl<E: Element> Kernels<E> for NativeKernels<E> {
        #[inline(always)]
        fn sum(&self, x: &[E]) -> E {
            let mut res = E::ZERO;
            let out: *mut E = &mut res;
            dispatch_sum_raw!(x, out);
            res
        }

        #[inline(always)]
        fn elementwise_multiply(&self, x: &mut [E], y: &[E]) {
            dispatch_inplace_binary!(x, y, mul);
        }

        #[inline(always)]
        fn elementwise_multiply_out(&self, out: &mut [E], x: &[E], y: &[E]) {
            dispatch_mul_into!(out, x, y);
        }

        #[inline(always)]
        fn elementwise_multiply_scalar(&self, x: &mut [E], a: E) {
            dispatch_with_scalar!(x, a, mul_scalar);
        }

        #[inline(always)]
        fn elementwise_add(&self, x: &mut [E], y: &[E]) {
            dispatch_inplace_binary!(x, y, add);
        }

        #[inline(always)]
        fn elementwise_add_scalar(&self, x: &mut [E], a: E) {
            dispatch_with_scalar!(x, a, add_scalar);
        }

        #[inline(always)]
        fn clamp_below_scalar(&self, x: &mut [E], a: E) {
            dispatch_with_scalar!(x, a, clamp_below);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_isa_matches_target() {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
        assert_eq!(NATIVE_ISA, IsaLevel::Avx);
        #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
        assert_eq!(NATIVE_ISA, IsaLevel::Sse2);
        #[cfg(target_arch = "aarch64")]
        assert_eq!(NATIVE_ISA, IsaLevel::Neon);
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        assert_eq!(NATIVE_ISA, IsaLevel::Scalar);
    }

    #[test]
    fn lanes_fill_128_or_256_bits() {
        assert_eq!(IsaLevel::Sse2.lanes_f32(), 4);
        assert_eq!(IsaLevel::Sse2.lanes_f64(), 2);
        assert_eq!(IsaLevel::Avx.lanes_f32(), 8);
        assert_eq!(IsaLevel::Avx.lanes_f64(), 4);
        assert_eq!(IsaLevel::Neon.lanes_f32(), 4);
        assert_eq!(IsaLevel::Neon.lanes_f64(), 2);
        assert_eq!(IsaLevel::Scalar.lanes_f32(), 1);
    }

    #[test]
    fn display_uses_short_name() {
        assert_eq!(IsaLevel::Avx.to_string(), "avx");
        assert_eq!(format!("{}", IsaLevel::Scalar), "scalar");
    }

    #[cfg(feature = "portable")]
    #[test]
    fn portable_feature_forces_scalar() {
        assert_eq!(get_isa_level(), IsaLevel::Scalar);
    }

    #[cfg(not(feature = "portable"))]
    #[test]
    fn facade_isa_is_native_isa() {
        assert_eq!(get_isa_level(), NATIVE_ISA);
    }
}
