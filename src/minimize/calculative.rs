//! Redundancy removal checked by recomputing the function
//!
//! Each term of a minimized formula is tentatively removed; the remaining
//! formula is rendered, parsed back and evaluated over the table's variables.
//! When its index form matches the original the term was redundant and
//! stays removed.

use crate::expression::PostfixExpr;
use crate::table::{slot, BuildTableError, IncompleteTableError, IndexForm, TruthTable};
use crate::term::{FormKind, Formula, Term};
use crate::EngineConfig;

impl TruthTable {
    /// Quine–McCluskey result with every redundant term removed
    ///
    /// Needs a complete table, since equivalence is decided on index forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::{FormKind, TruthTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = TruthTable::from_expression("(A * B) + (!A * C)")?;
    /// let reduced = table.calculative_reduction(FormKind::Disjunctive)?;
    /// assert_eq!(reduced.to_string(), "(!A*C)+(A*B)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn calculative_reduction(&self, form: FormKind) -> Result<Formula, IncompleteTableError> {
        self.require_complete("calculative reduction")?;
        if let Some(cached) = self.derived.calculative[slot(form)].get() {
            return Ok(cached.clone());
        }

        let start = self.quine_mc_cluskey(form);
        let terms = self.drop_redundant(form, start.terms().to_vec())?;
        log::debug!(
            "Calculative {}: {} of {} terms kept",
            form.abbreviation(),
            terms.len(),
            start.len()
        );

        let formula = Formula::new(form, self.shared_variables(), terms);
        Ok(self.derived.calculative[slot(form)]
            .get_or_init(|| formula)
            .clone())
    }

    /// Remove, in order, every term whose removal keeps the index form
    pub(crate) fn drop_redundant(
        &self,
        form: FormKind,
        mut terms: Vec<Term>,
    ) -> Result<Vec<Term>, IncompleteTableError> {
        let reference = self.index_form()?;
        let mut i = 0;
        while i < terms.len() {
            let mut trial = terms.clone();
            let removed = trial.remove(i);
            let candidate = Formula::new(form, self.shared_variables(), trial);
            if self.same_function(&candidate, &reference) {
                log::debug!(
                    "Calculative {}: {} is redundant",
                    form.abbreviation(),
                    removed.display(self.variables(), form)
                );
                terms.remove(i);
            } else {
                i += 1;
            }
        }
        Ok(terms)
    }

    /// Rebuild `candidate` from its text and compare index forms
    fn same_function(&self, candidate: &Formula, reference: &IndexForm) -> bool {
        let text = candidate.to_string();
        let config = EngineConfig::new().with_max_variables(self.variables().len());
        let rebuilt = PostfixExpr::parse(&text)
            .map_err(BuildTableError::from)
            .and_then(|expr| TruthTable::over_variables(&expr, self.shared_variables(), &config));
        match rebuilt {
            Ok(table) => table.index_form().is_ok_and(|index| &index == reference),
            Err(err) => {
                log::warn!("Could not rebuild {:?}: {}", text, err);
                false
            }
        }
    }
}
