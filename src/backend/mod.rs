use std::fmt;
use std::sync::Once;

use crate::cpu_kernels::{IsaLevel, PortableKernels};
use crate::traits::{Backend, Element};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use crate::cpu_kernels::{NativeKernels, NATIVE_ISA};

/// SIMD backend for the compiled-in ISA (SSE2/AVX on x86_64, NEON on aarch64).
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl Backend for NativeBackend {
    const NAME: &'static str = "native";
    const ISA: IsaLevel = NATIVE_ISA;

    type Kernels<E: Element> = NativeKernels<E>;

    fn init<E: Element>() -> Self::Kernels<E> {
        NativeKernels::new()
    }
}

/// Scalar-loop backend, available on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableBackend;

impl Backend for PortableBackend {
    const NAME: &'static str = "portable";
    const ISA: IsaLevel = IsaLevel::Scalar;

    type Kernels<E: Element> = PortableKernels<E>;

    fn init<E: Element>() -> Self::Kernels<E> {
        PortableKernels::new()
    }
}

/// Backend behind the public facade.
#[cfg(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable")
))]
pub type DefaultBackend = NativeBackend;

/// Backend behind the public facade.
#[cfg(not(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable")
)))]
pub type DefaultBackend = PortableBackend;

/// Static description of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: &'static str,
    pub isa: IsaLevel,
    pub lanes_f32: usize,
    pub lanes_f64: usize,
}

impl BackendInfo {
    pub const fn of<B: Backend>() -> Self {
        Self {
            name: B::NAME,
            isa: B::ISA,
            lanes_f32: B::ISA.lanes_f32(),
            lanes_f64: B::ISA.lanes_f64(),
        }
    }
}

impl fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} x f32, {} x f64)",
            self.name, self.isa, self.lanes_f32, self.lanes_f64
        )
    }
}

static SELECTION_LOGGED: Once = Once::new();

/// Describe the backend behind the facade. The first call logs the selection
/// at debug level.
pub fn backend_info() -> BackendInfo {
    let info = BackendInfo::of::<DefaultBackend>();
    SELECTION_LOGGED.call_once(|| {
        log::debug!("fvec-kernels using {} backend", info);
    });
    info
}
