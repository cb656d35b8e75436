/// Defines the arithmetic operator set (sum, mul, mul_into, mul_scalar, add,
/// add_scalar, clamp_below) for one ISA/element pair.
///
/// Every operator runs a full-vector main loop followed by a scalar
/// remainder. Multiplies and adds are never fused, so each lane rounds
/// exactly like the scalar loop in `fvec-scalar-ops`.
#[macro_export]
macro_rules! define_arith_ops {
    ($isa:ident, $elem:ident) => {
        /// Elements per vector register.
        pub const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);

        /// Sum `len` elements starting at `buf`, writing the result to `res`.
        ///
        /// One vector accumulator is reduced horizontally, then the tail is
        /// added in storage order. For `len < LANES` the result is exactly the
        /// sequential sum.
        ///
        /// # Safety
        /// `buf` must be valid for reads of `len` elements (it may dangle when
        /// `len == 0`) and `res` must be valid for a write of one element.
        #[inline(always)]
        pub(crate) unsafe fn sum_raw(buf: *const $elem, len: usize, res: *mut $elem) {
            debug_assert!(!buf.is_null());
            debug_assert!(!res.is_null());

            let mut i = 0;
            #[allow(unused_unsafe)]
            let mut acc = unsafe { $crate::simd_primitive!($isa, $elem, zero) };
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let v = $crate::simd_primitive!($isa, $elem, load, buf.add(i));
                    acc = $crate::simd_primitive!($isa, $elem, add, acc, v);
                }
                i += LANES;
            }
            #[allow(unused_unsafe)]
            let mut total: $elem = unsafe { $crate::simd_primitive!($isa, $elem, reduce_sum, acc) };
            while i < len {
                total += unsafe { *buf.add(i) };
                i += 1;
            }
            unsafe { *res = total };
        }

        /// sum: returns sum of all elements
        #[inline(always)]
        pub fn sum(a: &[$elem]) -> $elem {
            debug_assert!(a.len() <= isize::MAX as usize / std::mem::size_of::<$elem>());
            let mut res: $elem = 0.0;
            // SAFETY: pointer and length describe the live slice `a`.
            unsafe { sum_raw(a.as_ptr(), a.len(), &mut res) };
            res
        }

        /// mul: x[i] *= y[i]
        #[inline(always)]
        pub fn mul(x: &mut [$elem], y: &[$elem]) {
            let len = x.len();
            $crate::validation::assert_operand_len("elementwise_multiply", len, y.len());

            let mut i = 0;
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let vy = $crate::simd_primitive!($isa, $elem, load, y.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, mul, vx, vy);
                    $crate::simd_primitive!($isa, $elem, store, x.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }

            // Handle remainder
            while i < len {
                x[i] *= y[i];
                i += 1;
            }
        }

        /// mul_into: out[i] = x[i] * y[i] for i < x.len(); the rest of `out` is left alone
        #[inline(always)]
        pub fn mul_into(out: &mut [$elem], x: &[$elem], y: &[$elem]) {
            let len = x.len();
            $crate::validation::assert_operand_len("elementwise_multiply_out", len, y.len());
            $crate::validation::assert_output_len("elementwise_multiply_out", len, out.len());

            let mut i = 0;
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let vy = $crate::simd_primitive!($isa, $elem, load, y.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, mul, vx, vy);
                    $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            while i < len {
                out[i] = x[i] * y[i];
                i += 1;
            }
        }

        /// mul_scalar: x[i] *= a
        #[inline(always)]
        pub fn mul_scalar(x: &mut [$elem], a: $elem) {
            let len = x.len();
            let mut i = 0;
            #[allow(unused_unsafe)]
            let va = unsafe { $crate::simd_primitive!($isa, $elem, splat, a) };
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, mul, vx, va);
                    $crate::simd_primitive!($isa, $elem, store, x.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            while i < len { x[i] *= a; i += 1; }
        }

        /// add: x[i] += y[i]
        #[inline(always)]
        pub fn add(x: &mut [$elem], y: &[$elem]) {
            let len = x.len();
            $crate::validation::assert_operand_len("elementwise_add", len, y.len());

            let mut i = 0;
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let vy = $crate::simd_primitive!($isa, $elem, load, y.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, add, vx, vy);
                    $crate::simd_primitive!($isa, $elem, store, x.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            while i < len { x[i] += y[i]; i += 1; }
        }

        /// add_scalar: x[i] += a
        #[inline(always)]
        pub fn add_scalar(x: &mut [$elem], a: $elem) {
            let len = x.len();
            let mut i = 0;
            #[allow(unused_unsafe)]
            let va = unsafe { $crate::simd_primitive!($isa, $elem, splat, a) };
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, add, vx, va);
                    $crate::simd_primitive!($isa, $elem, store, x.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            while i < len { x[i] += a; i += 1; }
        }

        /// clamp_below: x[i] = 0 where x[i] < a. NaN never compares below, so it is kept.
        #[inline(always)]
        pub fn clamp_below(x: &mut [$elem], a: $elem) {
            let len = x.len();
            let mut i = 0;
            #[allow(unused_unsafe)]
            let va = unsafe { $crate::simd_primitive!($isa, $elem, splat, a) };
            while i + LANES <= len {
                #[allow(unused_unsafe)]
                unsafe {
                    let vx = $crate::simd_primitive!($isa, $elem, load, x.as_ptr().add(i));
                    let res = $crate::simd_primitive!($isa, $elem, zero_lt, vx, va);
                    $crate::simd_primitive!($isa, $elem, store, x.as_mut_ptr().add(i), res);
                }
                i += LANES;
            }
            while i < len {
                if x[i] < a {
                    x[i] = 0.0;
                }
                i += 1;
            }
        }
    };
}
