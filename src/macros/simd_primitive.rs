/// Maps abstract SIMD operations to concrete hardware intrinsics.
///
/// # Architecture
/// This macro is "Layer 1" of the macro architecture. It provides a unified
/// interface for:
/// - Architecture constants (lanes)
/// - Compute primitives (splat, load, store, add, mul, zero_lt, reduce_sum)
///
/// Intrinsic arms expand to calls of `unsafe fn`s; callers wrap them in an
/// `unsafe` block. `load`/`store` are unaligned.
///
/// # Usage
/// ```ignore
/// simd_primitive!(sse2, f32, add, a, b) // -> _mm_add_ps(a, b)
/// simd_primitive!(avx, f64, lanes)      // -> 4
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // x86_64 SSE2 (baseline, always present)
    // ========================================================================

    (sse2, f32, lanes) => { 4 };
    (sse2, f32, zero) => { std::arch::x86_64::_mm_setzero_ps() };
    (sse2, f32, splat, $v:expr) => { std::arch::x86_64::_mm_set1_ps($v) };
    (sse2, f32, load, $p:expr) => { std::arch::x86_64::_mm_loadu_ps($p) };
    (sse2, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (sse2, f32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_ps($a, $b) };
    (sse2, f32, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm_mul_ps($a, $b) };
    // lanes where v < t (ordered) become +0.0
    (sse2, f32, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        std::arch::x86_64::_mm_andnot_ps(std::arch::x86_64::_mm_cmplt_ps(v, $t), v)
    }};
    (sse2, f32, reduce_sum, $v:expr) => {{
        let v = $v;
        let hi = std::arch::x86_64::_mm_movehl_ps(v, v);
        let pair = std::arch::x86_64::_mm_add_ps(v, hi);
        let odd = std::arch::x86_64::_mm_shuffle_ps(pair, pair, 1);
        std::arch::x86_64::_mm_cvtss_f32(std::arch::x86_64::_mm_add_ss(pair, odd))
    }};

    (sse2, f64, lanes) => { 2 };
    (sse2, f64, zero) => { std::arch::x86_64::_mm_setzero_pd() };
    (sse2, f64, splat, $v:expr) => { std::arch::x86_64::_mm_set1_pd($v) };
    (sse2, f64, load, $p:expr) => { std::arch::x86_64::_mm_loadu_pd($p) };
    (sse2, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_pd($p, $v) };
    (sse2, f64, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_pd($a, $b) };
    (sse2, f64, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm_mul_pd($a, $b) };
    (sse2, f64, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        std::arch::x86_64::_mm_andnot_pd(std::arch::x86_64::_mm_cmplt_pd(v, $t), v)
    }};
    (sse2, f64, reduce_sum, $v:expr) => {{
        let v = $v;
        let hi = std::arch::x86_64::_mm_unpackhi_pd(v, v);
        std::arch::x86_64::_mm_cvtsd_f64(std::arch::x86_64::_mm_add_sd(v, hi))
    }};

    // ========================================================================
    // x86_64 AVX (target_feature = "avx")
    // ========================================================================

    (avx, f32, lanes) => { 8 };
    (avx, f32, zero) => { std::arch::x86_64::_mm256_setzero_ps() };
    (avx, f32, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_ps($v) };
    (avx, f32, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx, f32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_ps($a, $b) };
    (avx, f32, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_ps($a, $b) };
    (avx, f32, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        let mask = std::arch::x86_64::_mm256_cmp_ps::<{ std::arch::x86_64::_CMP_LT_OQ }>(v, $t);
        std::arch::x86_64::_mm256_andnot_ps(mask, v)
    }};
    (avx, f32, reduce_sum, $v:expr) => {{
        let v = $v;
        let lo = std::arch::x86_64::_mm256_castps256_ps128(v);
        let hi = std::arch::x86_64::_mm256_extractf128_ps(v, 1);
        $crate::simd_primitive!(sse2, f32, reduce_sum, std::arch::x86_64::_mm_add_ps(lo, hi))
    }};

    (avx, f64, lanes) => { 4 };
    (avx, f64, zero) => { std::arch::x86_64::_mm256_setzero_pd() };
    (avx, f64, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_pd($v) };
    (avx, f64, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_pd($p) };
    (avx, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_pd($p, $v) };
    (avx, f64, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_pd($a, $b) };
    (avx, f64, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_pd($a, $b) };
    (avx, f64, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        let mask = std::arch::x86_64::_mm256_cmp_pd::<{ std::arch::x86_64::_CMP_LT_OQ }>(v, $t);
        std::arch::x86_64::_mm256_andnot_pd(mask, v)
    }};
    (avx, f64, reduce_sum, $v:expr) => {{
        let v = $v;
        let lo = std::arch::x86_64::_mm256_castpd256_pd128(v);
        let hi = std::arch::x86_64::_mm256_extractf128_pd(v, 1);
        $crate::simd_primitive!(sse2, f64, reduce_sum, std::arch::x86_64::_mm_add_pd(lo, hi))
    }};

    // ========================================================================
    // aarch64 NEON
    // ========================================================================

    (neon, f32, lanes) => { 4 };
    (neon, f32, zero) => { std::arch::aarch64::vdupq_n_f32(0.0) };
    (neon, f32, splat, $v:expr) => { std::arch::aarch64::vdupq_n_f32($v) };
    (neon, f32, load, $p:expr) => { std::arch::aarch64::vld1q_f32($p) };
    (neon, f32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f32($p, $v) };
    (neon, f32, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_f32($a, $b) };
    (neon, f32, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_f32($a, $b) };
    (neon, f32, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        let mask = std::arch::aarch64::vcltq_f32(v, $t);
        std::arch::aarch64::vbslq_f32(mask, std::arch::aarch64::vdupq_n_f32(0.0), v)
    }};
    (neon, f32, reduce_sum, $v:expr) => { std::arch::aarch64::vaddvq_f32($v) };

    (neon, f64, lanes) => { 2 };
    (neon, f64, zero) => { std::arch::aarch64::vdupq_n_f64(0.0) };
    (neon, f64, splat, $v:expr) => { std::arch::aarch64::vdupq_n_f64($v) };
    (neon, f64, load, $p:expr) => { std::arch::aarch64::vld1q_f64($p) };
    (neon, f64, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f64($p, $v) };
    (neon, f64, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_f64($a, $b) };
    (neon, f64, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_f64($a, $b) };
    (neon, f64, zero_lt, $v:expr, $t:expr) => {{
        let v = $v;
        let mask = std::arch::aarch64::vcltq_f64(v, $t);
        std::arch::aarch64::vbslq_f64(mask, std::arch::aarch64::vdupq_n_f64(0.0), v)
    }};
    (neon, f64, reduce_sum, $v:expr) => { std::arch::aarch64::vaddvq_f64($v) };
}
