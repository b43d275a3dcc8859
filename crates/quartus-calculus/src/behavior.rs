//! Qualitative shape of a polynomial: end behavior, symmetry, and local
//! monotonicity and concavity.

use std::fmt;

use quartus_poly::Polynomial;

use crate::derivative::{derivative, nth_derivative};
use crate::evaluate::evaluate;

/// A quadrant of the Cartesian plane.
///
/// ```text
///  II | I
/// ----+----
/// III | IV
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// x > 0, y > 0.
    I,
    /// x < 0, y > 0.
    II,
    /// x < 0, y < 0.
    III,
    /// x > 0, y < 0.
    IV,
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        };
        f.write_str(name)
    }
}

/// Where the two ends of the graph head as x → ±∞.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EndBehavior {
    /// The quadrant the graph ends in as x → −∞.
    pub left: Quadrant,
    /// The quadrant the graph ends in as x → +∞.
    pub right: Quadrant,
}

/// Determines the end behavior from the leading coefficient and the parity
/// of the degree.
///
/// A leading coefficient that is not positive, including that of the zero
/// polynomial, counts as negative.
#[must_use]
pub fn end_behavior(p: &Polynomial) -> EndBehavior {
    let odd = p.degree() % 2 != 0;
    let (left, right) = match (p.leading_coefficient() > 0.0, odd) {
        (true, true) => (Quadrant::III, Quadrant::I),
        (true, false) => (Quadrant::II, Quadrant::I),
        (false, true) => (Quadrant::II, Quadrant::IV),
        (false, false) => (Quadrant::III, Quadrant::IV),
    };
    EndBehavior { left, right }
}

/// True if every exponent is even, so that p(−x) = p(x).
#[must_use]
pub fn is_even(p: &Polynomial) -> bool {
    p.terms().iter().all(|t| t.exponent() % 2 == 0)
}

/// True if every exponent is odd, so that p(−x) = −p(x).
#[must_use]
pub fn is_odd(p: &Polynomial) -> bool {
    p.terms().iter().all(|t| t.exponent() % 2 != 0)
}

/// Direction of a polynomial at a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Monotonicity {
    /// The derivative is positive.
    Increasing,
    /// The derivative is negative.
    Decreasing,
    /// The derivative is zero.
    Stationary,
}

/// Bending of a polynomial at a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Concavity {
    /// The second derivative is positive.
    Up,
    /// The second derivative is negative.
    Down,
    /// The second derivative is zero.
    Flat,
}

/// Classifies `p` at `x` by the sign of `p'(x)`.
#[must_use]
pub fn monotonicity_at(p: &Polynomial, x: f64) -> Monotonicity {
    let slope = evaluate(&derivative(p), x);
    if slope > 0.0 {
        Monotonicity::Increasing
    } else if slope < 0.0 {
        Monotonicity::Decreasing
    } else {
        Monotonicity::Stationary
    }
}

/// Classifies `p` at `x` by the sign of `p''(x)`.
#[must_use]
pub fn concavity_at(p: &Polynomial, x: f64) -> Concavity {
    let bend = evaluate(&nth_derivative(p, 2), x);
    if bend > 0.0 {
        Concavity::Up
    } else if bend < 0.0 {
        Concavity::Down
    } else {
        Concavity::Flat
    }
}
