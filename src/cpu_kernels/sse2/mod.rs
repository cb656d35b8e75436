// SSE2 is part of the x86_64 baseline, so these modules are always available there.
crate::expand_isa_impls!(sse2_f32, sse2, f32);
crate::expand_isa_impls!(sse2_f64, sse2, f64);
