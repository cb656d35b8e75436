// Expand NEON implementations (aarch64 always has Advanced SIMD)
crate::expand_isa_impls!(neon_f32, neon, f32);
crate::expand_isa_impls!(neon_f64, neon, f64);
