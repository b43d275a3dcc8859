//! Closed-form solutions for degrees one through four.
//!
//! Each public solver checks the degree of its operand and snaps every root
//! with the process-wide policy. Complex roots are not reported as such:
//! the quadratic formula yields NaN for a negative discriminant, and the
//! cubic and quartic formulas only produce real values.

use quartus_poly::{Polynomial, SnapPolicy};

use crate::error::{Result, SolveError};

/// Solves `ax + b = 0`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDegree`] unless `p` has degree 1.
pub fn roots_linear(p: &Polynomial) -> Result<Vec<f64>> {
    linear(p, &SnapPolicy::current())
}

/// Solves `ax² + bx + c = 0` with the quadratic formula.
///
/// Both roots are returned, `(-b + √Δ) / 2a` first. A negative
/// discriminant gives two NaNs.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDegree`] unless `p` has degree 2.
pub fn roots_quadratic(p: &Polynomial) -> Result<Vec<f64>> {
    quadratic(p, &SnapPolicy::current())
}

/// Solves `ax³ + bx² + cx + d = 0`.
///
/// Returns one root when the other two are complex, and three roots
/// otherwise. A triple root is repeated three times.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDegree`] unless `p` has degree 3.
pub fn roots_cubic(p: &Polynomial) -> Result<Vec<f64>> {
    cubic(p, &SnapPolicy::current())
}

/// Solves `ax⁴ + bx³ + cx² + dx + e = 0` through its resolvent cubic.
///
/// Returns four roots, or none when the resolvent cubic has fewer than two
/// non-zero roots.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDegree`] unless `p` has degree 4.
pub fn roots_quartic(p: &Polynomial) -> Result<Vec<f64>> {
    quartic(p, &SnapPolicy::current())
}

pub(crate) fn linear(p: &Polynomial, policy: &SnapPolicy) -> Result<Vec<f64>> {
    check_degree(p, 1)?;
    let (a, b) = (p.coefficient(1), p.coefficient(0));
    Ok(snapped(vec![-b / a], policy))
}

pub(crate) fn quadratic(p: &Polynomial, policy: &SnapPolicy) -> Result<Vec<f64>> {
    check_degree(p, 2)?;
    let (a, b, c) = (p.coefficient(2), p.coefficient(1), p.coefficient(0));
    let sqrt_disc = (b * b - 4.0 * a * c).sqrt();
    Ok(snapped(
        vec![(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)],
        policy,
    ))
}

pub(crate) fn cubic(p: &Polynomial, policy: &SnapPolicy) -> Result<Vec<f64>> {
    check_degree(p, 3)?;
    let roots = solve_cubic(
        p.coefficient(3),
        p.coefficient(2),
        p.coefficient(1),
        p.coefficient(0),
    );
    Ok(snapped(roots, policy))
}

pub(crate) fn quartic(p: &Polynomial, policy: &SnapPolicy) -> Result<Vec<f64>> {
    check_degree(p, 4)?;

    // Monic form x⁴ + bx³ + cx² + dx + e
    let lead = p.leading_coefficient();
    let b = p.coefficient(3) / lead;
    let c = p.coefficient(2) / lead;
    let d = p.coefficient(1) / lead;
    let e = p.coefficient(0) / lead;

    let f = c - 3.0 * b * b / 8.0;
    let g = d + b.powi(3) / 8.0 - b * c / 2.0;
    let h = e - 3.0 * b.powi(4) / 256.0 + b * b * (c / 16.0) - b * d / 4.0;

    let resolvent = snapped(
        solve_cubic(1.0, f / 2.0, (f * f - 4.0 * h) / 16.0, -(g * g) / 64.0),
        policy,
    );

    let mut nonzero = resolvent.into_iter().filter(|&y| y != 0.0).map(f64::sqrt);
    let (Some(p), Some(q)) = (nonzero.next(), nonzero.next()) else {
        tracing::debug!(f, g, h, "resolvent cubic has fewer than two non-zero roots");
        return Ok(Vec::new());
    };

    let r = -g / (8.0 * p * q);
    let s = b / 4.0;
    Ok(snapped(
        vec![
            p + q + r - s,
            p - q - r - s,
            -p + q - r - s,
            -p - q + r - s,
        ],
        policy,
    ))
}

/// Cardano's method with a trigonometric branch for three real roots.
#[allow(clippy::float_cmp)]
#[allow(clippy::many_single_char_names)]
fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let f = (3.0 * c / a - b * b / (a * a)) / 3.0;
    let g = (2.0 * b.powi(3) / a.powi(3) - 9.0 * b * c / (a * a) + 27.0 * d / a) / 27.0;
    let h = g * g / 4.0 + f.powi(3) / 27.0;
    let shift = b / (3.0 * a);

    if h > 0.0 {
        let s = (-(g / 2.0) + h.sqrt()).cbrt();
        let u = (-(g / 2.0) - h.sqrt()).cbrt();
        vec![s + u - shift]
    } else if f == 0.0 && g == 0.0 && h == 0.0 {
        let root = -(d / a).cbrt();
        vec![root; 3]
    } else {
        let i = (g * g / 4.0 - h).sqrt();
        let j = i.cbrt();
        let k = (-(g / (2.0 * i))).clamp(-1.0, 1.0).acos();
        let m = (k / 3.0).cos();
        let n = 3.0_f64.sqrt() * (k / 3.0).sin();
        vec![2.0 * j * m - shift, -j * (m + n) - shift, -j * (m - n) - shift]
    }
}

fn check_degree(p: &Polynomial, expected: i32) -> Result<()> {
    let found = p.degree();
    if found == expected {
        Ok(())
    } else {
        Err(SolveError::InvalidDegree { expected, found })
    }
}

fn snapped(mut roots: Vec<f64>, policy: &SnapPolicy) -> Vec<f64> {
    policy.snap_all(&mut roots);
    roots
}
