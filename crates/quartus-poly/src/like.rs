//! Coercion of loosely typed operands.
//!
//! Entry points that accept "anything that reads as a polynomial" take a
//! [`PolynomialLike`]. Strings are parsed, numbers become constants, and
//! polynomials are borrowed without copying.

use std::borrow::Cow;

use crate::error::{PolyError, Result};
use crate::parse::parse;
use crate::polynomial::Polynomial;

/// An operand that can be coerced into a [`Polynomial`].
#[derive(Clone, Debug)]
pub enum PolynomialLike<'a> {
    /// An existing polynomial, used as is.
    Borrowed(&'a Polynomial),
    /// An owned polynomial.
    Owned(Polynomial),
    /// Text in the forgiving input syntax.
    Text(Cow<'a, str>),
    /// A constant.
    Number(f64),
}

impl<'a> PolynomialLike<'a> {
    /// Resolves the operand. Borrowed polynomials are not copied.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::MalformedParameter`] for a non-finite number.
    pub fn coerce(self) -> Result<Cow<'a, Polynomial>> {
        match self {
            Self::Borrowed(p) => Ok(Cow::Borrowed(p)),
            Self::Owned(p) => Ok(Cow::Owned(p)),
            Self::Text(text) => Ok(Cow::Owned(parse(&text))),
            Self::Number(n) if n.is_finite() => Ok(Cow::Owned(Polynomial::constant(n))),
            Self::Number(n) => Err(PolyError::MalformedParameter(format!(
                "{n} is not a finite number"
            ))),
        }
    }

    /// Resolves the operand into an owned polynomial.
    ///
    /// # Errors
    ///
    /// Same as [`PolynomialLike::coerce`].
    pub fn into_polynomial(self) -> Result<Polynomial> {
        self.coerce().map(Cow::into_owned)
    }
}

impl<'a> From<&'a Polynomial> for PolynomialLike<'a> {
    fn from(p: &'a Polynomial) -> Self {
        Self::Borrowed(p)
    }
}

impl From<Polynomial> for PolynomialLike<'_> {
    fn from(p: Polynomial) -> Self {
        Self::Owned(p)
    }
}

impl<'a> From<&'a str> for PolynomialLike<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for PolynomialLike<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for PolynomialLike<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<f64> for PolynomialLike<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PolynomialLike<'_> {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_is_not_copied() {
        let p = Polynomial::x();
        let coerced = PolynomialLike::from(&p).coerce().unwrap();
        assert!(matches!(coerced, Cow::Borrowed(_)));
    }

    #[test]
    fn test_text_and_numbers() {
        let p = PolynomialLike::from("2x^2 + 1").into_polynomial().unwrap();
        assert_eq!(p.to_string(), "2x^2 + 1");

        let c = PolynomialLike::from(-4).into_polynomial().unwrap();
        assert_eq!(c.to_string(), "-4");

        let c = PolynomialLike::from(2.5).into_polynomial().unwrap();
        assert_eq!(c.degree(), 0);
    }

    #[test]
    fn test_non_finite_number_is_rejected() {
        let err = PolynomialLike::from(f64::NAN).coerce().unwrap_err();
        assert!(matches!(err, PolyError::MalformedParameter(_)));
        assert!(PolynomialLike::from(f64::INFINITY).coerce().is_err());
    }
}
