//! Normal-form formulas and their textual rendering

use super::{FormKind, Polarity, Term};
use std::fmt;
use std::sync::Arc;

/// A term bound to variable names for display
///
/// Literals are joined with `*` in a product and `+` in a clause and wrapped
/// in parentheses: `(A*!B)`, `(A+!B)`. A term without literals renders as the
/// constant it stands for, `1` as a product and `0` as a clause.
pub struct TermDisplay<'a> {
    pub(super) term: &'a Term,
    pub(super) variables: &'a [Arc<str>],
    pub(super) form: FormKind,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_unconstrained() {
            return f.write_str(if self.form.target() { "1" } else { "0" });
        }
        f.write_str("(")?;
        for (i, literal) in self.term.literals().enumerate() {
            if i > 0 {
                f.write_str(self.form.literal_joiner())?;
            }
            if literal.polarity == Polarity::Negative {
                f.write_str("!")?;
            }
            match self.variables.get(literal.var) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "x{}", literal.var)?,
            }
        }
        f.write_str(")")
    }
}

/// A disjunctive or conjunctive formula over a table's variables
///
/// The rendering is valid input for [`PostfixExpr::parse`]. An empty
/// disjunctive formula is the constant `0`, an empty conjunctive one the
/// constant `1`.
///
/// [`PostfixExpr::parse`]: crate::PostfixExpr::parse
///
/// # Examples
///
/// ```
/// use logic_evaluator::{FormKind, TruthTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TruthTable::from_expression("A * B")?;
/// let pdnf = table.pdnf();
/// assert_eq!(pdnf.form(), FormKind::Disjunctive);
/// assert_eq!(pdnf.to_string(), "(A*B)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    form: FormKind,
    variables: Arc<[Arc<str>]>,
    terms: Arc<[Term]>,
}

impl Formula {
    /// Bundle terms with the variable names they index into
    pub fn new(form: FormKind, variables: Arc<[Arc<str>]>, terms: Vec<Term>) -> Self {
        Formula {
            form,
            variables,
            terms: terms.into(),
        }
    }

    /// Disjunctive or conjunctive
    pub fn form(&self) -> FormKind {
        self.form
    }

    /// The variable names terms refer to by index
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The terms, in the order they were produced
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the formula has no terms (constant `0` or `1`)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals across all terms
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::literal_count).sum()
    }

    /// Value of the formula on the row with the given index
    pub fn evaluate_index(&self, index: usize) -> bool {
        let hit = self.terms.iter().any(|term| term.covers(index, self.form));
        hit == self.form.target()
    }

    /// Value of the formula for one input vector, first variable first
    pub fn evaluate(&self, inputs: &[bool]) -> bool {
        let index = inputs
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
        self.evaluate_index(index)
    }

    /// The constant the formula reduces to, if it does so syntactically
    ///
    /// `Some(false)` for an empty disjunctive formula or a conjunctive formula
    /// holding an empty clause, and the dual for `Some(true)`.
    pub fn as_constant(&self) -> Option<bool> {
        if self.terms.is_empty() {
            return Some(!self.form.target());
        }
        if self.terms.iter().any(Term::is_unconstrained) {
            return Some(self.form.target());
        }
        None
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(constant) = self.as_constant() {
            return f.write_str(if constant { "1" } else { "0" });
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(self.form.term_joiner())?;
            }
            write!(f, "{}", term.display(&self.variables, self.form))?;
        }
        Ok(())
    }
}
