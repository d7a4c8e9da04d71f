//! Literals, terms, implicants and normal-form formulas
//!
//! A [`Term`] is stored as two bitmasks over at most [`MAX_TERM_WIDTH`]
//! variables: which variables it constrains and which of those appear
//! positively. Variable `i` of an `n`-wide term lives at bit `n - 1 - i`, so
//! the first variable is the most significant bit, matching truth table row
//! numbering.
//!
//! # Polarity convention
//!
//! Terms are always written in output polarity:
//!
//! - in a [`FormKind::Disjunctive`] formula a term is a product, and a literal
//!   is positive when the variable is 1 on every row the term covers;
//! - in a [`FormKind::Conjunctive`] formula a term is a sum (clause), and a
//!   literal is positive when the variable is 0 on every row the term covers.
//!
//! "Covers" always refers to target rows: rows where the function is 1 for
//! the disjunctive form, 0 for the conjunctive form.

mod formula;
mod implicant;

pub use formula::{Formula, TermDisplay};
pub use implicant::Implicant;

use std::fmt;
use std::sync::Arc;

/// Widest term representable by the bitmask encoding
pub const MAX_TERM_WIDTH: usize = 32;

/// Which normal form a term or formula belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Sum of products; target rows are where the function is 1
    Disjunctive,
    /// Product of sums; target rows are where the function is 0
    Conjunctive,
}

impl FormKind {
    /// Both forms, disjunctive first
    pub const ALL: [FormKind; 2] = [FormKind::Disjunctive, FormKind::Conjunctive];

    /// Output value of the rows this form describes
    pub fn target(self) -> bool {
        matches!(self, FormKind::Disjunctive)
    }

    /// Short name, `DNF` or `CNF`
    pub fn abbreviation(self) -> &'static str {
        match self {
            FormKind::Disjunctive => "DNF",
            FormKind::Conjunctive => "CNF",
        }
    }

    /// Symbol joining literals inside a term
    pub(crate) fn literal_joiner(self) -> &'static str {
        match self {
            FormKind::Disjunctive => "*",
            FormKind::Conjunctive => "+",
        }
    }

    /// Symbol joining terms inside a formula
    pub(crate) fn term_joiner(self) -> &'static str {
        match self {
            FormKind::Disjunctive => "+",
            FormKind::Conjunctive => "*",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// State of one variable inside a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The variable appears uncomplemented
    Positive,
    /// The variable appears complemented
    Negative,
    /// The variable was merged away (don't care)
    Wildcard,
}

/// A variable index paired with its polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Index of the variable in the owning table's variable list
    pub var: usize,
    /// How the variable appears
    pub polarity: Polarity,
}

impl Literal {
    /// An uncomplemented literal
    pub fn positive(var: usize) -> Self {
        Literal {
            var,
            polarity: Polarity::Positive,
        }
    }

    /// A complemented literal
    pub fn negative(var: usize) -> Self {
        Literal {
            var,
            polarity: Polarity::Negative,
        }
    }

    /// Flip the polarity; wildcards stay wildcards
    pub fn negate(self) -> Self {
        let polarity = match self.polarity {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
            Polarity::Wildcard => Polarity::Wildcard,
        };
        Literal { polarity, ..self }
    }
}

/// A product or sum of literals over a fixed number of variables
///
/// Immutable; merging two terms yields a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    width: u8,
    /// Variables that carry a literal
    care: u32,
    /// Variables whose literal is positive (always a subset of `care`)
    positive: u32,
}

fn full_mask(width: usize) -> u32 {
    if width >= MAX_TERM_WIDTH {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

impl Term {
    /// A term over `width` variables with no literals at all
    ///
    /// As a product it is the constant 1, as a sum the constant 0.
    pub fn unconstrained(width: usize) -> Self {
        debug_assert!(width <= MAX_TERM_WIDTH);
        Term {
            width: width as u8,
            care: 0,
            positive: 0,
        }
    }

    /// The term describing exactly one target row
    ///
    /// For the disjunctive form this is the minterm of `index`; for the
    /// conjunctive form it is the maxterm, whose literals are positive where
    /// the row's input bit is 0.
    pub fn from_row(width: usize, index: usize, form: FormKind) -> Self {
        debug_assert!(width <= MAX_TERM_WIDTH);
        let care = full_mask(width);
        let bits = index as u32 & care;
        let positive = match form {
            FormKind::Disjunctive => bits,
            FormKind::Conjunctive => !bits & care,
        };
        Term {
            width: width as u8,
            care,
            positive,
        }
    }

    /// Build a term from explicit literals
    ///
    /// Repeating a literal is harmless; giving both polarities of a variable
    /// is a contradiction and yields `None`, as does a variable index outside
    /// `width`. Wildcard literals add nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::{Literal, Term};
    ///
    /// let term = Term::from_literals(3, [Literal::positive(0), Literal::negative(2)]).unwrap();
    /// assert_eq!(term.literal_count(), 2);
    /// assert!(Term::from_literals(3, [Literal::positive(1), Literal::negative(1)]).is_none());
    /// ```
    pub fn from_literals(width: usize, literals: impl IntoIterator<Item = Literal>) -> Option<Self> {
        if width > MAX_TERM_WIDTH {
            return None;
        }
        let mut term = Term::unconstrained(width);
        for literal in literals {
            if literal.var >= width {
                return None;
            }
            let bit = term.bit(literal.var);
            let positive = match literal.polarity {
                Polarity::Positive => bit,
                Polarity::Negative => 0,
                Polarity::Wildcard => continue,
            };
            if term.care & bit != 0 && term.positive & bit != positive {
                return None;
            }
            term.care |= bit;
            term.positive |= positive;
        }
        Some(term)
    }

    /// The smallest term covering every row in `indices`
    ///
    /// A variable keeps a literal only when it has the same value on all the
    /// rows; otherwise it is folded away. Returns `None` for an empty set.
    pub fn fold(
        width: usize,
        indices: impl IntoIterator<Item = usize>,
        form: FormKind,
    ) -> Option<Self> {
        let full = full_mask(width);
        let mut all_ones = full;
        let mut all_zeros = full;
        let mut any = false;
        for index in indices {
            let bits = index as u32 & full;
            all_ones &= bits;
            all_zeros &= !bits & full;
            any = true;
        }
        if !any {
            return None;
        }
        let positive = match form {
            FormKind::Disjunctive => all_ones,
            FormKind::Conjunctive => all_zeros,
        };
        Some(Term {
            width: width as u8,
            care: all_ones | all_zeros,
            positive,
        })
    }

    fn bit(&self, var: usize) -> u32 {
        1u32 << (self.width as usize - 1 - var)
    }

    /// Number of variables the term ranges over
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// The state of variable `var`
    ///
    /// Variables outside the term's width report [`Polarity::Wildcard`].
    pub fn polarity(&self, var: usize) -> Polarity {
        if var >= self.width() {
            return Polarity::Wildcard;
        }
        let bit = self.bit(var);
        if self.care & bit == 0 {
            Polarity::Wildcard
        } else if self.positive & bit != 0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Every variable with its state, wildcards included, in variable order
    pub fn slots(&self) -> impl Iterator<Item = Literal> + '_ {
        (0..self.width()).map(move |var| Literal {
            var,
            polarity: self.polarity(var),
        })
    }

    /// The non-wildcard literals in variable order
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.slots()
            .filter(|literal| literal.polarity != Polarity::Wildcard)
    }

    /// Number of non-wildcard literals
    pub fn literal_count(&self) -> usize {
        self.care.count_ones() as usize
    }

    /// Number of positive literals, the grouping key of Quine–McCluskey levels
    pub fn positive_count(&self) -> usize {
        self.positive.count_ones() as usize
    }

    /// Bitmask of the variables that carry a literal, variable 0 most significant
    pub fn care_mask(&self) -> u32 {
        self.care
    }

    /// Check if the term has no literals left
    pub fn is_unconstrained(&self) -> bool {
        self.care == 0
    }

    /// Merge two terms that differ in exactly one literal
    ///
    /// Both terms must constrain the same variables, and exactly one of those
    /// must appear with opposite polarities. The result turns that variable
    /// into a wildcard.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::{FormKind, Polarity, Term};
    ///
    /// let a = Term::from_row(2, 0b10, FormKind::Disjunctive); // A * !B
    /// let b = Term::from_row(2, 0b11, FormKind::Disjunctive); // A * B
    /// let merged = a.merge(&b).unwrap();
    /// assert_eq!(merged.polarity(0), Polarity::Positive);
    /// assert_eq!(merged.polarity(1), Polarity::Wildcard);
    /// ```
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.width != other.width || self.care != other.care {
            return None;
        }
        let diff = self.positive ^ other.positive;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Term {
            width: self.width,
            care: self.care & !diff,
            positive: self.positive & !diff,
        })
    }

    /// The input bits a covered row must have on the cared-for variables
    fn cube_bits(&self, form: FormKind) -> u32 {
        match form {
            FormKind::Disjunctive => self.positive,
            FormKind::Conjunctive => !self.positive & self.care,
        }
    }

    /// Check if the term covers target row `index`
    ///
    /// For a product that means the product is 1 on the row; for a clause
    /// that means the clause is 0 on the row.
    pub fn covers(&self, index: usize, form: FormKind) -> bool {
        index as u32 & self.care == self.cube_bits(form)
    }

    /// Number of rows the term covers
    pub fn cover_count(&self) -> usize {
        1usize << (self.width() - self.literal_count())
    }

    /// Row indices the term covers, ascending
    pub fn covered_indices(&self, form: FormKind) -> Vec<usize> {
        let free = full_mask(self.width()) & !self.care;
        let base = self.cube_bits(form);
        let mut indices = Vec::with_capacity(self.cover_count());
        let mut subset: u32 = 0;
        loop {
            indices.push((base | subset) as usize);
            if subset == free {
                break;
            }
            subset = subset.wrapping_sub(free) & free;
        }
        indices
    }

    /// Render the term against a variable list
    ///
    /// See [`TermDisplay`] for the format.
    pub fn display<'a>(&'a self, variables: &'a [Arc<str>], form: FormKind) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            variables,
            form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm_bit_order() {
        // row 0b100 of A,B,C is A=1, B=0, C=0
        let term = Term::from_row(3, 0b100, FormKind::Disjunctive);
        assert_eq!(term.polarity(0), Polarity::Positive);
        assert_eq!(term.polarity(1), Polarity::Negative);
        assert_eq!(term.polarity(2), Polarity::Negative);
        assert_eq!(term.positive_count(), 1);
    }

    #[test]
    fn test_maxterm_complements_bits() {
        let term = Term::from_row(3, 0b100, FormKind::Conjunctive);
        assert_eq!(term.polarity(0), Polarity::Negative);
        assert_eq!(term.polarity(1), Polarity::Positive);
        assert_eq!(term.polarity(2), Polarity::Positive);
        assert!(term.covers(0b100, FormKind::Conjunctive));
        assert!(!term.covers(0b101, FormKind::Conjunctive));
    }

    #[test]
    fn test_merge_requires_single_difference() {
        let a = Term::from_row(3, 0b000, FormKind::Disjunctive);
        let b = Term::from_row(3, 0b011, FormKind::Disjunctive);
        assert!(a.merge(&b).is_none());

        let c = Term::from_row(3, 0b001, FormKind::Disjunctive);
        let merged = a.merge(&c).unwrap();
        assert_eq!(merged.literal_count(), 2);
        assert_eq!(merged.polarity(2), Polarity::Wildcard);

        // different wildcard positions never merge
        let d = Term::from_row(3, 0b010, FormKind::Disjunctive)
            .merge(&Term::from_row(3, 0b110, FormKind::Disjunctive))
            .unwrap();
        assert!(merged.merge(&d).is_none());
    }

    #[test]
    fn test_fold_keeps_constant_literals() {
        let term = Term::fold(3, [0b101, 0b111], FormKind::Disjunctive).unwrap();
        assert_eq!(term.polarity(0), Polarity::Positive);
        assert_eq!(term.polarity(1), Polarity::Wildcard);
        assert_eq!(term.polarity(2), Polarity::Positive);

        let clause = Term::fold(3, [0b101, 0b111], FormKind::Conjunctive).unwrap();
        assert_eq!(clause.polarity(0), Polarity::Negative);
        assert_eq!(clause.polarity(2), Polarity::Negative);

        assert!(Term::fold(3, std::iter::empty(), FormKind::Disjunctive).is_none());
    }

    #[test]
    fn test_covered_indices_enumerates_free_bits() {
        let term = Term::from_literals(3, [Literal::positive(1)]).unwrap();
        assert_eq!(term.covered_indices(FormKind::Disjunctive), vec![2, 3, 6, 7]);
        assert_eq!(term.covered_indices(FormKind::Conjunctive), vec![0, 1, 4, 5]);
        assert_eq!(term.cover_count(), 4);

        let all = Term::unconstrained(2);
        assert_eq!(all.covered_indices(FormKind::Disjunctive), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_from_literals_rejects_out_of_range() {
        assert!(Term::from_literals(2, [Literal::positive(2)]).is_none());
        let with_wildcard = Term::from_literals(
            2,
            [Literal {
                var: 0,
                polarity: Polarity::Wildcard,
            }],
        )
        .unwrap();
        assert!(with_wildcard.is_unconstrained());
    }

    #[test]
    fn test_literal_negate() {
        assert_eq!(Literal::positive(3).negate(), Literal::negative(3));
        let wildcard = Literal {
            var: 0,
            polarity: Polarity::Wildcard,
        };
        assert_eq!(wildcard.negate(), wildcard);
    }
}
