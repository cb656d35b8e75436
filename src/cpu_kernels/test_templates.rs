//! Shared test bodies for the generated ISA modules.
//!
//! Every ISA module is checked against the scalar loops in `fvec-scalar-ops`.
//! Elementwise results must match bit for bit; NaN matches any NaN.

macro_rules! isa_kernel_tests {
    ($name:ident, $isa_mod:ident, $module:ident, $elem:ident) => {
        mod $name {
            use crate::cpu_kernels::$isa_mod::$module as k;
            use fvec_scalar_ops as oracle;

            const SPECIALS: [$elem; 12] = [
                1.5,
                -2.0,
                0.0,
                -0.0,
                $elem::NAN,
                $elem::INFINITY,
                $elem::NEG_INFINITY,
                $elem::MIN_POSITIVE / 4.0,
                -$elem::MIN_POSITIVE / 8.0,
                $elem::MAX,
                $elem::MIN,
                3.25,
            ];

            fn mixed(n: usize, shift: usize) -> Vec<$elem> {
                (0..n)
                    .map(|i| {
                        if i % 5 == 0 {
                            SPECIALS[(i + shift) % SPECIALS.len()]
                        } else {
                            (i as $elem) * 0.375 - 7.0
                        }
                    })
                    .collect()
            }

            fn sizes() -> Vec<usize> {
                vec![0, 1, k::LANES - 1, k::LANES, k::LANES + 1, 4 * k::LANES + 3, 1024, 1025]
            }

            fn assert_same(actual: &[$elem], expected: &[$elem]) {
                assert_eq!(actual.len(), expected.len());
                for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
                    let same = (a.is_nan() && e.is_nan()) || a.to_bits() == e.to_bits();
                    assert!(same, "index {}: got {:?}, expected {:?}", i, a, e);
                }
            }

            #[test]
            fn sum_scenario() {
                assert_eq!(k::sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
                assert_eq!(k::sum(&[]), 0.0);
            }

            #[test]
            fn sum_below_one_vector_is_sequential() {
                for n in 0..k::LANES {
                    let x = mixed(n, 1);
                    let got = k::sum(&x);
                    let want = oracle::scalar_sum(&x);
                    assert_same(&[got], &[want]);
                }
            }

            #[test]
            fn sum_integer_values_is_exact() {
                let x: Vec<$elem> = (0..1025).map(|i| i as $elem).collect();
                assert_eq!(k::sum(&x), (1024 * 1025 / 2) as $elem);
            }

            #[test]
            fn sum_within_reordering_tolerance() {
                let x: Vec<$elem> = (0..1025)
                    .map(|i| ((i * 37 % 101) as $elem) * 0.01 - 0.5)
                    .collect();
                let abs: $elem = x.iter().map(|v| v.abs()).sum();
                let tol = (x.len() as $elem) * $elem::EPSILON * abs;
                let got = k::sum(&x);
                let want = oracle::scalar_sum(&x);
                assert!((got - want).abs() <= tol, "got {}, want {}, tol {}", got, want, tol);
            }

            #[test]
            fn sum_propagates_nan_and_inf() {
                let mut x = vec![1.0 as $elem; 3 * k::LANES + 1];
                x[k::LANES] = $elem::INFINITY;
                assert_eq!(k::sum(&x), $elem::INFINITY);
                // opposite infinity in a different lane slot and in the tail
                x[0] = $elem::NEG_INFINITY;
                assert!(k::sum(&x).is_nan());
                x[0] = 1.0;
                x[3 * k::LANES] = $elem::NEG_INFINITY;
                assert!(k::sum(&x).is_nan());
            }

            #[test]
            fn sum_raw_writes_through_pointer() {
                let x: [$elem; 3] = [1.0, 2.0, 3.0];
                let mut res: $elem = -1.0;
                unsafe { k::sum_raw(x.as_ptr(), x.len(), &mut res) };
                assert_eq!(res, 6.0);

                let empty: &[$elem] = &[];
                unsafe { k::sum_raw(empty.as_ptr(), 0, &mut res) };
                assert_eq!(res, 0.0);
            }

            #[test]
            fn sum_of_subslice_reads_only_that_window() {
                let x: Vec<$elem> = (0..4 * k::LANES + 3).map(|i| i as $elem).collect();
                let start = k::LANES + 1;
                let window = &x[start..start + 2 * k::LANES + 1];
                let want: $elem = window.iter().copied().sum();
                assert_eq!(k::sum(window), want);
            }

            #[test]
            fn mul_matches_scalar_loop() {
                for n in sizes() {
                    let y = mixed(n, 3);
                    let mut got = mixed(n, 0);
                    let mut want = got.clone();
                    k::mul(&mut got, &y);
                    oracle::scalar_mul(&mut want, &y);
                    assert_same(&got, &want);
                }
            }

            #[test]
            fn mul_reads_prefix_of_longer_y() {
                let mut x: Vec<$elem> = vec![2.0, 3.0, 4.0];
                let y: Vec<$elem> = vec![2.0, 2.0, 2.0, 100.0, 100.0];
                k::mul(&mut x, &y);
                assert_eq!(x, vec![4.0, 6.0, 8.0]);
            }

            #[test]
            fn mul_into_scenario_leaves_tail() {
                let mut out: Vec<$elem> = vec![0.0; 5];
                k::mul_into(&mut out, &[2.0, 3.0, 4.0, 1.0], &[2.0, 2.0, 2.0, 3.0]);
                assert_eq!(out, vec![4.0, 6.0, 8.0, 3.0, 0.0]);
            }

            #[test]
            fn mul_into_matches_scalar_loop() {
                for n in sizes() {
                    let x = mixed(n, 2);
                    let y = mixed(n, 7);
                    let mut got = vec![-9.0 as $elem; n + k::LANES];
                    let mut want = got.clone();
                    k::mul_into(&mut got, &x, &y);
                    oracle::scalar_mul_into(&mut want, &x, &y);
                    assert_same(&got, &want);
                }
            }

            #[test]
            fn mul_scalar_matches_scalar_loop() {
                for a in [0.5 as $elem, -0.0, $elem::NAN, $elem::INFINITY] {
                    for n in sizes() {
                        let mut got = mixed(n, 4);
                        let mut want = got.clone();
                        k::mul_scalar(&mut got, a);
                        oracle::scalar_mul_scalar(&mut want, a);
                        assert_same(&got, &want);
                    }
                }
                let mut x: Vec<$elem> = vec![2.0, 3.0, 4.0];
                k::mul_scalar(&mut x, 0.5);
                assert_eq!(x, vec![1.0, 1.5, 2.0]);
            }

            #[test]
            fn add_matches_scalar_loop() {
                for n in sizes() {
                    let y = mixed(n, 5);
                    let mut got = mixed(n, 6);
                    let mut want = got.clone();
                    k::add(&mut got, &y);
                    oracle::scalar_add(&mut want, &y);
                    assert_same(&got, &want);
                }
            }

            #[test]
            fn add_scalar_matches_scalar_loop() {
                for a in [1.0 as $elem, -0.0, $elem::NEG_INFINITY] {
                    for n in sizes() {
                        let mut got = mixed(n, 8);
                        let mut want = got.clone();
                        k::add_scalar(&mut got, a);
                        oracle::scalar_add_scalar(&mut want, a);
                        assert_same(&got, &want);
                    }
                }
            }

            #[test]
            fn clamp_below_zeroes_instead_of_raising() {
                let mut x: Vec<$elem> = vec![2.0, -3.0, 4.0, -10.0];
                k::clamp_below(&mut x, 0.0);
                assert_eq!(x, vec![2.0, 0.0, 4.0, 0.0]);

                let mut y: Vec<$elem> = vec![5.0; 2 * k::LANES + 1];
                k::clamp_below(&mut y, 10.0);
                assert!(y.iter().all(|&v| v.to_bits() == (0.0 as $elem).to_bits()));
            }

            #[test]
            fn clamp_below_matches_scalar_loop() {
                for a in [0.0 as $elem, -0.0, 1.0, $elem::NAN, $elem::INFINITY] {
                    for n in sizes() {
                        let mut got = mixed(n, 9);
                        let mut want = got.clone();
                        k::clamp_below(&mut got, a);
                        oracle::scalar_clamp_below(&mut want, a);
                        assert_same(&got, &want);
                    }
                }
            }

            #[test]
            #[should_panic(expected = "elementwise_add")]
            fn short_operand_panics() {
                let mut x: Vec<$elem> = vec![1.0; 4];
                k::add(&mut x, &[1.0; 3]);
            }

            #[test]
            #[should_panic(expected = "output has 2 elements")]
            fn short_output_panics() {
                let mut out: Vec<$elem> = vec![0.0; 2];
                k::mul_into(&mut out, &[1.0; 3], &[1.0; 3]);
            }
        }
    };
}
