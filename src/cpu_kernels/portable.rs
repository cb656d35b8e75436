//! Portable kernels: the `fvec-scalar-ops` loops behind the `Kernels` trait.

use std::marker::PhantomData;

use fvec_scalar_ops as scalar;

use crate::traits::{Element, Kernels};
use crate::validation::{assert_operand_len, assert_output_len};

/// Scalar-loop kernels, available on every target.
///
/// Length preconditions are checked up front so a violation panics with the
/// same message the native kernels use, before any element is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableKernels<E: Element> {
    _phantom: PhantomData<E>,
}

impl<E: Element> PortableKernels<E> {
    pub fn new() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<E: Element> Kernels<E> for PortableKernels<E> {
    fn sum(&self, x: &[E]) -> E {
        scalar::scalar_sum(x)
    }

    fn elementwise_multiply(&self, x: &mut [E], y: &[E]) {
        assert_operand_len("elementwise_multiply", x.len(), y.len());
        scalar::scalar_mul(x, y);
    }

    fn elementwise_multiply_out(&self, out: &mut [E], x: &[E], y: &[E]) {
        assert_operand_len("elementwise_multiply_out", x.len(), y.len());
        assert_output_len("elementwise_multiply_out", x.len(), out.len());
        scalar::scalar_mul_into(out, x, y);
    }

    fn elementwise_multiply_scalar(&self, x: &mut [E], a: E) {
        scalar::scalar_mul_scalar(x, a);
    }

    fn elementwise_add(&self, x: &mut [E], y: &[E]) {
        assert_operand_len("elementwise_add", x.len(), y.len());
        scalar::scalar_add(x, y);
    }

    fn elementwise_add_scalar(&self, x: &mut [E], a: E) {
        scalar::scalar_add_scalar(x, a);
    }

    fn clamp_below_scalar(&self, x: &mut [E], a: E) {
        scalar::scalar_clamp_below(x, a);
    }
}
