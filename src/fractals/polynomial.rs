use num::complex::Complex64;
use num::Zero;
use serde::{Deserialize, Serialize};

/// Leading coefficients at or below this magnitude are rejected; the escape radius
/// divides by the leading magnitude.
pub const MIN_LEADING_COEFFICIENT_NORM: f64 = 1e-9;

/// Minimum number of coefficients (a quadratic). The escape radius uses `1 / (n - 2)`.
pub const MIN_COEFFICIENT_COUNT: usize = 3;

/// Complex polynomial, stored with the highest degree coefficient first:
/// `(a_n, ..., a_1, a_0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexPolynomial {
    coefficients: Vec<Complex64>,
}

impl ComplexPolynomial {
    pub fn new(coefficients: Vec<Complex64>) -> ComplexPolynomial {
        assert!(
            coefficients.len() >= MIN_COEFFICIENT_COUNT,
            "polynomial needs at least {} coefficients, got {}",
            MIN_COEFFICIENT_COUNT,
            coefficients.len()
        );
        assert!(
            coefficients[0].norm() > MIN_LEADING_COEFFICIENT_NORM,
            "leading coefficient {} is too close to zero",
            coefficients[0]
        );
        ComplexPolynomial { coefficients }
    }

    /// Convenience constructor from `[re, im]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> ComplexPolynomial {
        ComplexPolynomial::new(
            pairs
                .iter()
                .map(|[re, im]| Complex64::new(*re, *im))
                .collect(),
        )
    }

    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    pub fn leading_coefficient(&self) -> Complex64 {
        self.coefficients[0]
    }

    /// Horner's method: `acc = acc * z + a_i`, starting from zero.
    #[inline]
    pub fn evaluate(&self, z: Complex64) -> Complex64 {
        self.coefficients
            .iter()
            .fold(Complex64::zero(), |acc, a_i| acc * z + a_i)
    }
}

/// Generates the polynomial to render at a given point in time.
pub trait PolynomialPath: Sync {
    fn polynomial_at(&self, time: f64) -> ComplexPolynomial;
}

impl<F> PolynomialPath for F
where
    F: Fn(f64) -> ComplexPolynomial + Sync,
{
    fn polynomial_at(&self, time: f64) -> ComplexPolynomial {
        self(time)
    }
}

/// Paths that can be selected from a parameter file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PolynomialPathParams {
    /// z^2 + t
    RealQuadratic,
    /// Cubic whose coefficients all oscillate in time.
    CubicOscillator,
    /// The same polynomial at every time, as `[re, im]` pairs, highest degree first.
    Fixed { coefficients: Vec<[f64; 2]> },
}

impl PolynomialPath for PolynomialPathParams {
    fn polynomial_at(&self, t: f64) -> ComplexPolynomial {
        match self {
            PolynomialPathParams::RealQuadratic => ComplexPolynomial::new(vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(t, 0.0),
            ]),
            PolynomialPathParams::CubicOscillator => ComplexPolynomial::new(vec![
                Complex64::new(t.sin() / 10.0, 0.5),
                Complex64::new(0.01 * t * t.cos(), 0.001 * t.sin()),
                Complex64::new(t.cos(), -(2.0 * t).sin()),
                Complex64::new(-t.sin() / 10.0, t / 10.0),
            ]),
            PolynomialPathParams::Fixed { coefficients } => {
                ComplexPolynomial::from_pairs(coefficients)
            }
        }
    }
}
