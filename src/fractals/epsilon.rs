//! Escape radius ("epsilon") estimation. The same radius is used both as the half-width
//! of the square view and as the escape threshold of the iteration.

use more_asserts::assert_gt;
use num::complex::Complex64;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use super::{
    escape_time::escape_count,
    polynomial::{ComplexPolynomial, MIN_COEFFICIENT_COUNT, MIN_LEADING_COEFFICIENT_NORM},
};

/// A ray stops marching inward at the first sample that survives more than this many
/// iterations.
const SURVIVAL_COUNT_THRESHOLD: u32 = 2;

/// How the escape radius is chosen for each frame of a series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpsilonMode {
    /// Each frame gets its own (tightest) radius; the view tracks the polynomial.
    #[default]
    PerFrame,
    /// Every frame uses the largest per-frame radius of the whole series.
    SequenceStable,
}

/// Analytic escape radius: any point beyond it diverges under iteration.
/// For coefficients `(a_n, ..., a_0)`:
/// `max(1, 2 * sum(|a_i|, i < n) / |a_n|, (2 * 1.0001 / |a_n|)^(1 / (n - 2)))`
pub fn theoretical_epsilon(polynomial: &ComplexPolynomial) -> f64 {
    let coefficients = polynomial.coefficients();
    let n = coefficients.len();
    assert!(n >= MIN_COEFFICIENT_COUNT);
    let leading_norm = coefficients[0].norm();
    assert!(leading_norm > MIN_LEADING_COEFFICIENT_NORM);

    let sum: f64 = coefficients[1..].iter().map(|a_i| a_i.norm()).sum();
    let linear_bound = 2.0 * sum / leading_norm;
    let power_bound = (2.0 * 1.0001 / leading_norm).powf(1.0 / (n - 2) as f64);
    1.0_f64.max(linear_bound.max(power_bound))
}

/// Tightens the theoretical radius by marching inward along evenly spaced rays.
///
/// Each ray starts at radius `2 * theoretical_eps` and steps toward the origin by
/// `2 * theoretical_eps / resolution` (one pixel width). The march stops at the first
/// sample that survives more than two iterations. The result is the largest stopping
/// radius over all rays plus one step, never more than `theoretical_eps`.
pub fn simulated_epsilon(
    polynomial: &ComplexPolynomial,
    theoretical_eps: f64,
    resolution: u32,
    angular_sample_count: u32,
    iteration_limit: u32,
) -> f64 {
    assert!(resolution > 0, "resolution must be positive");
    assert!(angular_sample_count > 0, "angular sample count must be positive");
    assert_gt!(theoretical_eps, 0.0);
    let step = 2.0 * theoretical_eps / resolution as f64;
    let angle_step = 2.0 * std::f64::consts::PI / angular_sample_count as f64;

    let max_radius = (0..angular_sample_count)
        .map(|k| {
            let direction = Complex64::from_polar(step, angle_step * k as f64);
            ray_stop_radius(polynomial, theoretical_eps, direction, resolution, iteration_limit)
        })
        .fold(0.0, f64::max);

    let epsilon = (max_radius + step).min(theoretical_eps);
    log::debug!(
        "simulated epsilon: {} (theoretical: {}, step: {})",
        epsilon,
        theoretical_eps,
        step
    );
    epsilon
}

/// Radius at which a ray marching inward along `direction` first hits a point that
/// survives more than two iterations, or `|direction|` if it reaches the origin first.
fn ray_stop_radius(
    polynomial: &ComplexPolynomial,
    theoretical_eps: f64,
    direction: Complex64,
    resolution: u32,
    iteration_limit: u32,
) -> f64 {
    for m in (2..=resolution).rev() {
        let z = direction * m as f64;
        let count = escape_count(z, polynomial, theoretical_eps, iteration_limit);
        if count > SURVIVAL_COUNT_THRESHOLD {
            return z.norm();
        }
    }
    direction.norm()
}

/// Theoretical bound followed by the ray simulation.
pub fn frame_epsilon(
    polynomial: &ComplexPolynomial,
    resolution: u32,
    angular_sample_count: u32,
    iteration_limit: u32,
) -> f64 {
    simulated_epsilon(
        polynomial,
        theoretical_epsilon(polynomial),
        resolution,
        angular_sample_count,
        iteration_limit,
    )
}

/// Computes the escape radius of every frame (in parallel), then applies `mode`.
/// In `SequenceStable` mode every entry is the maximum over the series.
pub fn frame_epsilons(
    polynomials: &[ComplexPolynomial],
    mode: EpsilonMode,
    resolution: u32,
    angular_sample_count: u32,
    iteration_limit: u32,
) -> Vec<f64> {
    let per_frame: Vec<f64> = polynomials
        .par_iter()
        .map(|polynomial| {
            frame_epsilon(polynomial, resolution, angular_sample_count, iteration_limit)
        })
        .collect();

    match mode {
        EpsilonMode::PerFrame => per_frame,
        EpsilonMode::SequenceStable => {
            let stable = per_frame.iter().copied().fold(0.0, f64::max);
            log::info!("Sequence-stable epsilon: {}", stable);
            vec![stable; per_frame.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn z_squared() -> ComplexPolynomial {
        ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [0.0, 0.0]])
    }

    fn sample_polynomials() -> Vec<ComplexPolynomial> {
        vec![
            z_squared(),
            ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [-0.8, 0.156]]),
            ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [-1.0, 0.0]]),
            ComplexPolynomial::from_pairs(&[[0.5, 0.5], [0.1, -0.2], [0.3, 0.0], [-0.4, 0.2]]),
            ComplexPolynomial::from_pairs(&[[3.0, 0.0], [0.0, 1.0], [0.0, 0.0], [0.0, 0.0], [0.2, 0.0]]),
            ComplexPolynomial::from_pairs(&[[0.1, 0.0], [1.0, 0.0], [0.25, 0.0]]),
        ]
    }

    #[test]
    fn test_theoretical_epsilon_z_squared() {
        assert_relative_eq!(theoretical_epsilon(&z_squared()), 2.0002, epsilon = 1e-12);
    }

    #[test]
    fn test_theoretical_epsilon_linear_bound_dominates() {
        // sum = |0| + |-3| = 3, leading = 1  -->  2 * 3 / 1 = 6
        let polynomial = ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [-3.0, 0.0]]);
        assert_relative_eq!(theoretical_epsilon(&polynomial), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_theoretical_epsilon_is_at_least_one() {
        // Large leading coefficient and tiny tail: both bounds are below one.
        let polynomial =
            ComplexPolynomial::from_pairs(&[[100.0, 0.0], [0.01, 0.0], [0.0, 0.0], [0.01, 0.0]]);
        assert_eq!(theoretical_epsilon(&polynomial), 1.0);
        for polynomial in sample_polynomials() {
            assert!(theoretical_epsilon(&polynomial) >= 1.0);
        }
    }

    #[test]
    fn test_simulated_epsilon_never_exceeds_theoretical() {
        for polynomial in sample_polynomials() {
            let theoretical = theoretical_epsilon(&polynomial);
            for resolution in [4, 37, 200] {
                let simulated = simulated_epsilon(&polynomial, theoretical, resolution, 60, 50);
                assert!(simulated > 0.0);
                assert!(
                    simulated <= theoretical,
                    "simulated {} > theoretical {}",
                    simulated,
                    theoretical
                );
            }
        }
    }

    #[test]
    fn test_simulated_epsilon_tightens_z_squared() {
        // The filled Julia set of z^2 is the unit disk. Rays stop once |z|^2 <= eps, which
        // happens near sqrt(2.0002); the result is one step beyond that.
        let theoretical = theoretical_epsilon(&z_squared());
        let resolution = 1000;
        let step = 2.0 * theoretical / resolution as f64;
        let simulated = simulated_epsilon(&z_squared(), theoretical, resolution, 60, 50);
        assert!(simulated < theoretical);
        assert_relative_eq!(simulated, theoretical.sqrt() + step, epsilon = 1.5 * step);
    }

    #[test]
    fn test_simulated_epsilon_coarse_grid_z_squared() {
        let theoretical = theoretical_epsilon(&z_squared());
        let simulated = simulated_epsilon(&z_squared(), theoretical, 4, 60, 50);
        assert_relative_eq!(simulated, 2.0, epsilon = 0.01);
    }

    #[test]
    fn test_frame_epsilons_modes() {
        let polynomials = vec![
            z_squared(),
            ComplexPolynomial::from_pairs(&[[1.0, 0.0], [0.0, 0.0], [-1.8, 0.0]]),
        ];
        let per_frame = frame_epsilons(&polynomials, EpsilonMode::PerFrame, 200, 60, 50);
        assert_eq!(per_frame.len(), 2);
        assert!(per_frame[0] != per_frame[1]);
        for (polynomial, eps) in polynomials.iter().zip(&per_frame) {
            assert_eq!(*eps, frame_epsilon(polynomial, 200, 60, 50));
        }

        let stable = frame_epsilons(&polynomials, EpsilonMode::SequenceStable, 200, 60, 50);
        assert_eq!(stable.len(), 2);
        assert_eq!(stable[0], stable[1]);
        assert_eq!(stable[0], per_frame[0].max(per_frame[1]));
    }

    #[test]
    fn test_epsilon_mode_json() {
        let mode: EpsilonMode = serde_json::from_str(r#""SequenceStable""#).unwrap();
        assert_eq!(mode, EpsilonMode::SequenceStable);
        assert_eq!(EpsilonMode::default(), EpsilonMode::PerFrame);
    }
}
