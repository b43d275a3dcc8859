//! Local extrema and inflection points.
//!
//! Critical points are classified by probing the sign of the derivative a
//! short distance to either side.

use quartus_calculus::{derivative, evaluate, nth_derivative};
use quartus_poly::Polynomial;

use crate::error::Result;
use crate::roots::RootSolver;

/// Distance from a critical point at which the derivative is probed.
const PROBE: f64 = 0.1;

/// Returns the local maxima of `p`, optionally restricted to
/// `x_min ≤ x ≤ x_max`. Each bound applies on its own.
///
/// # Errors
///
/// Propagates errors from solving the derivative.
pub fn local_maxima(p: &Polynomial, x_min: Option<f64>, x_max: Option<f64>) -> Result<Vec<f64>> {
    classified(p, x_min, x_max, |left, right| left > 0.0 && right < 0.0)
}

/// Returns the local minima of `p`, optionally restricted to
/// `x_min ≤ x ≤ x_max`. Each bound applies on its own.
///
/// # Errors
///
/// Propagates errors from solving the derivative.
pub fn local_minima(p: &Polynomial, x_min: Option<f64>, x_max: Option<f64>) -> Result<Vec<f64>> {
    classified(p, x_min, x_max, |left, right| left < 0.0 && right > 0.0)
}

/// Returns the points where the concavity of `p` changes.
///
/// # Errors
///
/// Propagates errors from solving the second derivative.
pub fn inflection_points(p: &Polynomial) -> Result<Vec<f64>> {
    let second = nth_derivative(p, 2);
    let candidates = RootSolver::new().roots(&second)?;
    Ok(candidates
        .into_iter()
        .filter(|&x| evaluate(&second, x - PROBE) * evaluate(&second, x + PROBE) < 0.0)
        .collect())
}

fn classified(
    p: &Polynomial,
    x_min: Option<f64>,
    x_max: Option<f64>,
    keep: impl Fn(f64, f64) -> bool,
) -> Result<Vec<f64>> {
    let slope = derivative(p);
    let critical = RootSolver::new().roots(&slope)?;
    Ok(critical
        .into_iter()
        .filter(|&x| keep(evaluate(&slope, x - PROBE), evaluate(&slope, x + PROBE)))
        .filter(|&x| x_min.map_or(true, |lo| x >= lo))
        .filter(|&x| x_max.map_or(true, |hi| x <= hi))
        .collect())
}
