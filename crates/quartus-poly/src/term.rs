//! Single polynomial terms.

use std::fmt;

use crate::display::write_monomial;

/// A monomial `coefficient · x^exponent`.
///
/// Terms are plain values; a term whose coefficient is zero is treated as
/// absent and is never stored inside a normalized [`Polynomial`].
///
/// [`Polynomial`]: crate::Polynomial
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Term {
    coefficient: f64,
    exponent: i32,
}

impl Term {
    /// Creates the term `coefficient · x^exponent`.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The additive identity `0 · x^0`.
    ///
    /// Also used as the sentinel returned for out-of-range term lookups.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0)
    }

    /// Creates a term from a real exponent, truncating it toward zero.
    ///
    /// Exponents outside the `i32` range saturate; a NaN exponent becomes 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncated(coefficient: f64, exponent: f64) -> Self {
        Self::new(coefficient, exponent.trunc() as i32)
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Replaces the coefficient.
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    /// Replaces the exponent.
    pub fn set_exponent(&mut self, exponent: i32) {
        self.exponent = exponent;
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Returns the term with its coefficient negated.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.coefficient.is_sign_negative() {
            f.write_str("-")?;
        }
        write_monomial(f, self.coefficient.abs(), self.exponent)
    }
}
