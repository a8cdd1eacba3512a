use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use super::polynomial::ComplexPolynomial;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceParams {
    /// A point that has not escaped after this many iterations is treated as part of the set.
    #[serde(default = "ConvergenceParams::default_iteration_limit")]
    pub iteration_limit: u32,
    /// Number of rays used when tightening the escape radius.
    #[serde(default = "ConvergenceParams::default_angular_sample_count")]
    pub angular_sample_count: u32,
}

impl ConvergenceParams {
    pub const DEFAULT_ITERATION_LIMIT: u32 = 50;
    pub const DEFAULT_ANGULAR_SAMPLE_COUNT: u32 = 60;

    fn default_iteration_limit() -> u32 {
        Self::DEFAULT_ITERATION_LIMIT
    }

    fn default_angular_sample_count() -> u32 {
        Self::DEFAULT_ANGULAR_SAMPLE_COUNT
    }
}

impl Default for ConvergenceParams {
    fn default() -> Self {
        ConvergenceParams {
            iteration_limit: Self::DEFAULT_ITERATION_LIMIT,
            angular_sample_count: Self::DEFAULT_ANGULAR_SAMPLE_COUNT,
        }
    }
}

/// Iterates `z := p(z)` until `|z| > escape_radius` or the iteration limit is reached.
///
/// @return: iteration count on [1, iteration_limit]. A count of 1 means that `z` started
/// outside of the escape radius and was never iterated; `iteration_limit` means that the
/// point never escaped.
#[inline]
pub fn escape_count(
    z: Complex64,
    polynomial: &ComplexPolynomial,
    escape_radius: f64,
    iteration_limit: u32,
) -> u32 {
    assert!(iteration_limit >= 1, "iteration limit must be positive");
    let escape_radius_squared = escape_radius * escape_radius;
    let mut z = z;
    let mut count = 1;
    while count < iteration_limit && z.norm_sqr() <= escape_radius_squared {
        z = polynomial.evaluate(z);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_squared() -> ComplexPolynomial {
        ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [0.0, 0.0]])
    }

    #[test]
    fn test_outside_point_returns_sentinel() {
        let polynomial = ComplexPolynomial::from_pairs(&[[0.3, 0.9], [1.0, -2.0], [0.0, 0.5]]);
        for z in [
            Complex64::new(2.01, 0.0),
            Complex64::new(-1.5, 1.5),
            Complex64::new(0.0, -100.0),
        ] {
            assert_eq!(escape_count(z, &polynomial, 2.0, 50), 1);
        }
    }

    #[test]
    fn test_origin_never_escapes_under_z_squared() {
        assert_eq!(escape_count(Complex64::new(0.0, 0.0), &z_squared(), 2.0, 50), 50);
    }

    #[test]
    fn test_known_escape_sequence() {
        // 1.5 -> 2.25 (escaped): the first check passes, the second one fails.
        assert_eq!(escape_count(Complex64::new(1.5, 0.0), &z_squared(), 2.0, 50), 2);
        // 1.2 -> 1.44 -> 2.0736 (escaped)
        assert_eq!(escape_count(Complex64::new(1.2, 0.0), &z_squared(), 2.0, 50), 3);
    }

    #[test]
    fn test_count_is_bounded() {
        let polynomial = ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [-0.8, 0.156]]);
        for limit in [1, 2, 7, 50] {
            for k in 0..40 {
                let z = Complex64::from_polar(0.1 * k as f64, 0.37 * k as f64);
                let count = escape_count(z, &polynomial, 2.0, limit);
                assert!(count >= 1 && count <= limit, "count {} for limit {}", count, limit);
            }
        }
    }

    #[test]
    fn test_boundary_point_is_not_escaped() {
        // |z| == escape radius still counts as inside.
        assert_eq!(escape_count(Complex64::new(2.0, 0.0), &z_squared(), 2.0, 50), 2);
    }

    #[test]
    fn test_convergence_params_defaults_from_json() {
        let params: ConvergenceParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, ConvergenceParams::default());
        assert_eq!(params.iteration_limit, 50);
        assert_eq!(params.angular_sample_count, 60);
    }
}
