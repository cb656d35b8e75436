use fvec_kernels::backend::DefaultBackend;
use fvec_kernels::{backend_info, get_isa_level, Backend, IsaLevel};

#[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(feature = "portable")))]
#[test]
fn default_backend_is_native() {
    let name = std::any::type_name::<DefaultBackend>();
    assert!(name.to_lowercase().contains("native"), "type name: {name}");
    assert_eq!(DefaultBackend::NAME, "native");
    assert_ne!(get_isa_level(), IsaLevel::Scalar);
}

#[cfg(not(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(feature = "portable"))))]
#[test]
fn default_backend_is_portable() {
    let name = std::any::type_name::<DefaultBackend>();
    assert!(name.to_lowercase().contains("portable"), "type name: {name}");
    assert_eq!(get_isa_level(), IsaLevel::Scalar);
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx", not(feature = "portable")))]
#[test]
fn avx_build_selects_avx() {
    assert_eq!(get_isa_level(), IsaLevel::Avx);
    assert_eq!(backend_info().lanes_f32, 8);
}

#[test]
fn backend_info_reports_selection() {
    let _ = env_logger::builder().is_test(true).try_init();
    let info = backend_info();
    assert_eq!(info.name, DefaultBackend::NAME);
    assert_eq!(info.isa, DefaultBackend::ISA);
    assert_eq!(info.lanes_f32, info.isa.lanes_f32());
    if info.isa != IsaLevel::Scalar {
        assert_eq!(info.lanes_f32, 2 * info.lanes_f64);
    }
}
