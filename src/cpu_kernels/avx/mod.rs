// Expand AVX implementations; only compiled when the build enables `avx`.
crate::expand_isa_impls!(avx_f32, avx, f32);
crate::expand_isa_impls!(avx_f64, avx, f64);
