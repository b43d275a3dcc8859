//! Lazily normalized univariate polynomials.
//!
//! A [`Polynomial`] accepts terms in any order. Normalization (sort by
//! descending exponent, then combine like terms) is deferred until the
//! polynomial is observed, so building a polynomial term by term costs
//! O(1) per term.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;

use smallvec::SmallVec;

use crate::term::Term;

/// Inline storage for the common low-degree case.
type TermList = SmallVec<[Term; 8]>;

/// Where the term list stands on the way to normal form.
///
/// `Combined` implies sorted. Combining requires a sorted list because it
/// only merges adjacent terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Normalization {
    /// Arbitrary order, may contain like terms.
    Unnormalized,
    /// Descending exponents, may contain adjacent like terms.
    Sorted,
    /// Strictly descending exponents, no zero coefficients.
    Combined,
}

/// A polynomial `Σ cᵢ·x^eᵢ` with real coefficients and integer exponents.
///
/// Observers take `&self` and normalize on demand through interior
/// mutability. As a consequence `Polynomial` is `Send` but not `Sync`:
/// share it across threads only behind external synchronization.
///
/// Equality is canonical-string equality (see [`crate::arith::equals`]).
#[derive(Clone)]
pub struct Polynomial {
    terms: RefCell<TermList>,
    state: Cell<Normalization>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: RefCell::new(TermList::new()),
            state: Cell::new(Normalization::Combined),
        }
    }

    /// Creates a polynomial from terms given in any order.
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut poly = Self::new();
        for term in terms {
            poly.add_term(term);
        }
        poly
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial `c·x^exponent`.
    #[must_use]
    pub fn monomial(c: f64, exponent: i32) -> Self {
        Self::from_terms([Term::new(c, exponent)])
    }

    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Appends a term.
    ///
    /// Zero-coefficient terms are silently dropped. Appending keeps the
    /// polynomial normalized when the new exponent is below every existing
    /// one, so descending-order construction never needs a sort.
    pub fn add_term(&mut self, term: Term) -> &mut Self {
        if term.is_zero() {
            return self;
        }

        let state = self.state.get();
        let terms = self.terms.get_mut();
        let next = match terms.last() {
            None => Normalization::Combined,
            Some(last) if state == Normalization::Combined && term.exponent() < last.exponent() => {
                Normalization::Combined
            }
            Some(last) if state != Normalization::Unnormalized && term.exponent() <= last.exponent() => {
                Normalization::Sorted
            }
            Some(_) => Normalization::Unnormalized,
        };

        terms.push(term);
        self.state.set(next);
        self
    }

    /// Appends the term `coefficient·x^exponent`.
    pub fn push(&mut self, coefficient: f64, exponent: i32) -> &mut Self {
        self.add_term(Term::new(coefficient, exponent))
    }

    /// Returns the number of terms in normal form.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms().len()
    }

    /// Returns the `n`th term in normal form.
    ///
    /// Out-of-range positions yield the sentinel [`Term::zero`], which is
    /// never a stored term.
    #[must_use]
    pub fn get_term(&self, n: usize) -> Term {
        self.term(n).unwrap_or_else(Term::zero)
    }

    /// Returns the `n`th term in normal form, if any.
    #[must_use]
    pub fn term(&self, n: usize) -> Option<Term> {
        self.terms().get(n).copied()
    }

    /// Borrows the normalized terms, highest exponent first.
    #[must_use]
    pub fn terms(&self) -> Ref<'_, [Term]> {
        self.ensure_normalized();
        Ref::map(self.terms.borrow(), |terms| terms.as_slice())
    }

    /// Copies the normalized terms into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Term> {
        self.terms().to_vec()
    }

    /// Returns the leading term, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.term(0)
    }

    /// Returns the leading coefficient (0 for the zero polynomial).
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.leading_term().map_or(0.0, |t| t.coefficient())
    }

    /// Returns the degree: the leading exponent, or 0 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> i32 {
        self.leading_term().map_or(0, |t| t.exponent())
    }

    /// Names the degree of the polynomial.
    #[must_use]
    pub fn degree_name(&self) -> DegreeName {
        DegreeName::from_degree(self.degree())
    }

    /// Returns the coefficient of `x^exponent` (0 if absent).
    #[must_use]
    pub fn coefficient(&self, exponent: i32) -> f64 {
        self.terms()
            .iter()
            .find(|t| t.exponent() == exponent)
            .map_or(0.0, Term::coefficient)
    }

    /// Returns the coefficient of `x^0`.
    #[must_use]
    pub fn constant_term(&self) -> f64 {
        self.coefficient(0)
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms().is_empty()
    }

    /// Returns true if the polynomial has no term in `x`.
    ///
    /// The zero polynomial is constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match &*self.terms() {
            [] => true,
            [only] => only.exponent() == 0,
            _ => false,
        }
    }

    /// Brings the term list into normal form.
    fn ensure_normalized(&self) {
        if self.state.get() == Normalization::Combined {
            return;
        }

        let mut terms = self.terms.borrow_mut();
        if self.state.get() == Normalization::Unnormalized {
            sort_terms(&mut terms);
            self.state.set(Normalization::Sorted);
        }
        combine_like_terms(&mut terms);
        self.state.set(Normalization::Combined);
    }
}

/// Stable sort by descending exponent.
fn sort_terms(terms: &mut TermList) {
    terms.sort_by(|a, b| b.exponent().cmp(&a.exponent()));
}

/// Merges adjacent like terms of a sorted list, dropping runs that cancel.
fn combine_like_terms(terms: &mut TermList) {
    let mut combined = TermList::with_capacity(terms.len());

    for term in terms.drain(..) {
        match combined.last_mut() {
            Some(last) if last.exponent() == term.exponent() => {
                last.set_coefficient(last.coefficient() + term.coefficient());
            }
            _ => {
                drop_cancelled_run(&mut combined);
                combined.push(term);
            }
        }
    }
    drop_cancelled_run(&mut combined);

    *terms = combined;
}

fn drop_cancelled_run(terms: &mut TermList) {
    if terms.last().is_some_and(Term::is_zero) {
        terms.pop();
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({self})")
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms([term])
    }
}

impl From<f64> for Polynomial {
    fn from(c: f64) -> Self {
        Self::constant(c)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term);
        }
    }
}

/// The conventional name of a polynomial's degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DegreeName {
    /// Degree 0.
    Constant,
    /// Degree 1.
    Linear,
    /// Degree 2.
    Quadratic,
    /// Degree 3.
    Cubic,
    /// Degree 4.
    Quartic,
    /// Any other degree, including negative ones.
    Unknown,
}

impl DegreeName {
    /// Names a degree.
    #[must_use]
    pub const fn from_degree(degree: i32) -> Self {
        match degree {
            0 => DegreeName::Constant,
            1 => DegreeName::Linear,
            2 => DegreeName::Quadratic,
            3 => DegreeName::Cubic,
            4 => DegreeName::Quartic,
            _ => DegreeName::Unknown,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            DegreeName::Constant => "constant",
            DegreeName::Linear => "linear",
            DegreeName::Quadratic => "quadratic",
            DegreeName::Cubic => "cubic",
            DegreeName::Quartic => "quartic",
            DegreeName::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DegreeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
