// Error function and standard normal CDF identities over a fixed grid plus
// seeded random points, with a relative tolerance of 1e-7.

mod util;

mod error_function_tests {
    use super::util::{assert_close, assert_rel_close, check_identity, sample_points};
    use gamma_kernels::kernels::scientific::distributions::shared::scalar::{
        std_normal_cdf, std_normal_cdf_upper,
    };
    use gamma_kernels::kernels::scientific::erf::{erf, erfc};
    use gamma_kernels::kernels::scientific::incomplete_gamma::{
        lower_incomplete_gamma, upper_incomplete_gamma,
    };

    const SEED: u64 = 0xe7f;

    #[test]
    fn erfc_is_one_minus_erf() {
        let pts: Vec<f64> = sample_points(SEED)
            .into_iter()
            .filter(|&x| (-3.0..3.0).contains(&x))
            .collect();
        check_identity("erfc = 1 − erf", &pts, erfc, |x| 1.0 - erf(x));
    }

    #[test]
    fn erf_through_lower_incomplete_gamma() {
        let pts = sample_points(SEED);
        let sqrt_pi = std::f64::consts::PI.sqrt();
        check_identity(
            "erf(x) = sgn(x) γ(½, x²)/√π",
            &pts,
            erf,
            |x| {
                let sign = if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                sign * lower_incomplete_gamma(0.5, x * x) / sqrt_pi
            },
        );
    }

    #[test]
    fn erfc_through_upper_incomplete_gamma() {
        let pts: Vec<f64> = sample_points(SEED).into_iter().filter(|&x| x >= 0.0).collect();
        let sqrt_pi = std::f64::consts::PI.sqrt();
        check_identity(
            "erfc(x) = Γ(½, x²)/√π",
            &pts,
            erfc,
            |x| upper_incomplete_gamma(0.5, x * x) / sqrt_pi,
        );
    }

    #[test]
    fn normal_upper_is_one_minus_lower() {
        let pts = sample_points(SEED);
        check_identity("1 − Φ", &pts, std_normal_cdf_upper, |x| 1.0 - std_normal_cdf(x));
    }

    #[test]
    fn normal_through_erf() {
        let pts = sample_points(SEED);
        let r = std::f64::consts::FRAC_1_SQRT_2;
        check_identity("Φ = (1 + erf(x/√2))/2", &pts, std_normal_cdf, |x| {
            0.5 * (1.0 + erf(x * r))
        });
    }

    #[test]
    fn erfc_deep_tail() {
        // mpmath.erfc
        assert_rel_close(erfc(5.0), 1.5374597944280349e-12, 1e-10);
        assert_rel_close(erfc(10.0), 2.088487583762545e-45, 1e-10);
        assert_rel_close(std_normal_cdf(-8.0), 6.220960574271784e-16, 1e-10);
    }

    #[test]
    fn erf_limits() {
        assert_close(erf(6.0), 1.0, 1e-15);
        assert_close(erf(-6.0), -1.0, 1e-15);
        assert_close(erfc(-6.0), 2.0, 1e-15);
        assert_eq!(std_normal_cdf(0.0), 0.5);
        assert_eq!(std_normal_cdf_upper(0.0), 0.5);
    }
}

#[cfg(feature = "universal_functions")]
mod error_function_array_tests {
    use super::util::assert_slice_close;
    use gamma_kernels::kernels::scientific::erf::{erf as erf_scalar, erfc as erfc_scalar};
    use gamma_kernels::kernels::scientific::scalar::{erf, erfc, std_normal_cdf};
    use minarrow::vec64;

    #[test]
    fn erf_array_matches_scalar() {
        let x = vec64![-2.5, -0.5, 0.0, 0.25, 1.0, 3.5];
        let got = erf(&x, None, None).unwrap();
        let expect: Vec<f64> = x.iter().map(|&v| erf_scalar(v)).collect();
        assert_slice_close(&got, &expect, 0.0);

        let got = erfc(&x, None, None).unwrap();
        let expect: Vec<f64> = x.iter().map(|&v| erfc_scalar(v)).collect();
        assert_slice_close(&got, &expect, 0.0);
    }

    #[test]
    fn std_normal_cdf_array_reference() {
        let x = vec64![-1.96, 0.0, 1.0, 1.96];
        let expect = [
            0.024997895148220435,
            0.5,
            0.8413447460685429,
            0.9750021048517795,
        ];
        let got = std_normal_cdf(&x, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-12);
    }
}
