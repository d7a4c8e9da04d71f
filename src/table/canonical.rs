//! Canonical normal forms, numeric forms and the index form

use super::{slot, IncompleteTableError, TruthTable};
use crate::term::{FormKind, Formula, Term};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// The whole output column read as one binary number
///
/// Row 0 is the most significant bit, so `A * B` over two variables has the
/// output string `0001` and the value 1, and a tautology over `n` variables
/// has the value 2^(2^n) - 1. Displays as `f(n)value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexForm {
    arity: usize,
    value: BigUint,
}

impl IndexForm {
    /// Number of variables
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The output column as an integer
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Check if the function is constantly false
    pub fn is_contradiction(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for IndexForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}){}", self.arity, self.value)
    }
}

impl TruthTable {
    /// Principal disjunctive normal form: one minterm per true row
    pub fn pdnf(&self) -> Formula {
        self.canonical_formula(FormKind::Disjunctive)
    }

    /// Principal conjunctive normal form: one maxterm per false row
    pub fn pcnf(&self) -> Formula {
        self.canonical_formula(FormKind::Conjunctive)
    }

    /// PDNF or PCNF
    pub fn canonical_formula(&self, form: FormKind) -> Formula {
        self.derived.canonical[slot(form)]
            .get_or_init(|| {
                let n = self.variables.len();
                let terms: Vec<Term> = self
                    .target_indices(form)
                    .into_iter()
                    .map(|index| Term::from_row(n, index, form))
                    .collect();
                Formula::new(form, self.shared_variables(), terms)
            })
            .clone()
    }

    /// Indices of the true rows
    pub fn minterm_indices(&self) -> Vec<usize> {
        self.target_indices(FormKind::Disjunctive)
    }

    /// Indices of the false rows
    pub fn maxterm_indices(&self) -> Vec<usize> {
        self.target_indices(FormKind::Conjunctive)
    }

    /// Minterm indices written as `+(1,2,4,7)`
    pub fn numeric_pdnf(&self) -> String {
        self.numeric_form(FormKind::Disjunctive)
    }

    /// Maxterm indices written as `*(0,3,5,6)`
    pub fn numeric_pcnf(&self) -> String {
        self.numeric_form(FormKind::Conjunctive)
    }

    /// Numeric form of either kind; an empty list renders as `+()` or `*()`
    pub fn numeric_form(&self, form: FormKind) -> String {
        let indices: Vec<String> = self
            .target_indices(form)
            .iter()
            .map(usize::to_string)
            .collect();
        format!("{}({})", form.term_joiner(), indices.join(","))
    }

    /// The output column as a single number
    ///
    /// Needs every row, so a partial table is refused.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::TruthTable;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = TruthTable::from_expression("(A ^ B) ^ C")?;
    /// // 0 1 1 0 1 0 0 1
    /// assert_eq!(table.index_form()?.to_string(), "f(3)105");
    /// # Ok(())
    /// # }
    /// ```
    pub fn index_form(&self) -> Result<IndexForm, IncompleteTableError> {
        self.require_complete("index form")?;

        let len = self.rows.len();
        let mut bytes = vec![0u8; len.div_ceil(8)];
        let last = bytes.len() - 1;
        for row in self.rows.iter().filter(|row| row.output) {
            let position = len - 1 - row.index;
            bytes[last - position / 8] |= 1 << (position % 8);
        }

        Ok(IndexForm {
            arity: self.variables.len(),
            value: BigUint::from_bytes_be(&bytes),
        })
    }
}
