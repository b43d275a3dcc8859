//! Canonical string output.
//!
//! Terms are written highest exponent first and joined with ` + ` / ` - `.
//! A unit coefficient is elided before `x`, `x^1` is written `x`, and an
//! `x^0` term is written as its bare coefficient. Coefficients carry at
//! most [`SIGNIFICANT_DIGITS`] significant digits and never use scientific
//! notation, so the output always parses back to the same polynomial.

use std::fmt::{self, Write};

use crate::polynomial::Polynomial;

/// Significant digits printed for each coefficient.
pub const SIGNIFICANT_DIGITS: i32 = 12;

impl Polynomial {
    /// Renders the canonical form, with or without spaces around the
    /// joining signs (`4x^2 - 2x` or `4x^2-2x`).
    #[must_use]
    pub fn render(&self, spaces: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_polynomial(&mut out, self, spaces);
        out
    }

    /// Renders the canonical form without spaces.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        self.render(false)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_polynomial(f, self, true)
    }
}

fn write_polynomial<W: Write>(out: &mut W, poly: &Polynomial, spaces: bool) -> fmt::Result {
    let terms = poly.terms();
    if terms.is_empty() {
        return out.write_str("0");
    }

    for (i, term) in terms.iter().enumerate() {
        let negative = term.coefficient().is_sign_negative();
        match (i, negative, spaces) {
            (0, true, _) => out.write_str("-")?,
            (0, false, _) => {}
            (_, true, true) => out.write_str(" - ")?,
            (_, false, true) => out.write_str(" + ")?,
            (_, true, false) => out.write_str("-")?,
            (_, false, false) => out.write_str("+")?,
        }
        write_monomial(out, term.coefficient().abs(), term.exponent())?;
    }
    Ok(())
}

/// Writes `magnitude·x^exponent` without a sign.
pub(crate) fn write_monomial<W: Write>(out: &mut W, magnitude: f64, exponent: i32) -> fmt::Result {
    let coefficient = format_coefficient(magnitude);
    if exponent == 0 {
        return out.write_str(&coefficient);
    }
    if coefficient != "1" {
        out.write_str(&coefficient)?;
    }
    if exponent == 1 {
        out.write_str("x")
    } else {
        write!(out, "x^{exponent}")
    }
}

/// Formats a coefficient with at most [`SIGNIFICANT_DIGITS`] significant
/// digits, trimming trailing zeros.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_coefficient(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let mut text = format!("{value:.decimals$}");

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}
