//! Forgiving polynomial parser.
//!
//! Grammar: signed terms joined by `+` / `-`, each term one of `x`, `C`,
//! `Cx`, `x^E` or `Cx^E`. Whitespace is ignored and `X` is accepted for
//! `x`. Subtraction is rewritten as addition of a negated term before the
//! input is split on `+`.
//!
//! Parsing never fails. A chunk that matches none of the term forms
//! contributes nothing, so `"3x + foo"` parses as `3x`. This leniency is
//! part of the public contract.

use std::convert::Infallible;
use std::str::FromStr;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Parses a polynomial from its string form.
///
/// # Example
///
/// ```
/// use quartus_poly::parse;
///
/// let p = parse("2x + 4X^2 + 1");
/// assert_eq!(p.to_string(), "4x^2 + 2x + 1");
/// ```
#[must_use]
pub fn parse(input: &str) -> Polynomial {
    let cleaned = normalize_input(input).replace("--", "+");

    // A '-' after '^' belongs to a negative exponent, not to a new term.
    let mut signed = String::with_capacity(cleaned.len() * 2);
    let mut previous = None;
    for ch in cleaned.chars() {
        if ch == '-' && previous != Some('^') {
            signed.push('+');
        }
        signed.push(ch);
        previous = Some(ch);
    }

    signed
        .split('+')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let term = parse_term(chunk);
            if term.is_zero() {
                tracing::trace!(chunk, "discarding zero or unrecognised term");
            }
            term
        })
        .collect()
}

/// Parses a single term such as `-3x^2`.
///
/// Returns [`Term::zero`] if the text matches no term form.
#[must_use]
pub fn parse_term(chunk: &str) -> Term {
    let text = normalize_input(chunk);
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };

    let term = match_term(body).unwrap_or_else(Term::zero);
    if negative {
        term.negate()
    } else {
        term
    }
}

fn match_term(body: &str) -> Option<Term> {
    if body.is_empty() {
        return None;
    }
    if body == "x" {
        return Some(Term::new(1.0, 1));
    }

    if let Some((coefficient, exponent)) = body.split_once("x^") {
        let coefficient = if coefficient.is_empty() {
            1.0
        } else {
            parse_number(coefficient)?
        };
        return Some(Term::truncated(coefficient, parse_number(exponent)?));
    }

    if let Some(coefficient) = body.strip_suffix('x') {
        return Some(Term::new(parse_number(coefficient)?, 1));
    }

    Some(Term::new(parse_number(body)?, 0))
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn normalize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Polynomial {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for Polynomial {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

impl From<&String> for Polynomial {
    fn from(s: &String) -> Self {
        parse(s)
    }
}

impl From<String> for Polynomial {
    fn from(s: String) -> Self {
        parse(&s)
    }
}
