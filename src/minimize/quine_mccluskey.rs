//! Quine–McCluskey prime implicant generation
//!
//! Terms start as the minterms (or maxterms) of the table and are grouped
//! into levels by their number of positive literals. Each round merges every
//! term of one level with every term of the next level when the two differ
//! in a single literal. Terms that take part in no merge are prime. Rounds
//! repeat on the merged terms until a round produces nothing new.

use super::coverage::unique_coverage;
use crate::table::{slot, TruthTable};
use crate::term::{FormKind, Formula, Implicant, Term};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Compute the prime implicants of the given target rows
///
/// Primes are returned in discovery order: the unmerged terms of the first
/// round first, those of the last round last. Each distinct implicant
/// appears once.
pub(crate) fn prime_implicants(
    width: usize,
    targets: &[usize],
    form: FormKind,
) -> Vec<(Term, Implicant)> {
    let mut working: Vec<(Term, Implicant)> = targets
        .iter()
        .map(|&index| (Term::from_row(width, index, form), Implicant::single(index)))
        .collect();
    let mut primes: Vec<(Term, Implicant)> = Vec::new();
    let mut seen_primes: HashSet<Implicant> = HashSet::new();
    let mut round = 0usize;

    while !working.is_empty() {
        round += 1;

        let mut levels: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, (term, _)) in working.iter().enumerate() {
            levels.entry(term.positive_count()).or_default().push(i);
        }

        let mut merged = vec![false; working.len()];
        let mut next: Vec<(Term, Implicant)> = Vec::new();
        let mut seen_next: HashSet<Implicant> = HashSet::new();

        for (&level, lower) in &levels {
            let Some(upper) = levels.get(&(level + 1)) else {
                continue;
            };
            for &a in lower {
                for &b in upper {
                    let Some(term) = working[a].0.merge(&working[b].0) else {
                        continue;
                    };
                    merged[a] = true;
                    merged[b] = true;
                    let implicant = working[a].1.union(&working[b].1);
                    if seen_next.insert(implicant.clone()) {
                        next.push((term, implicant));
                    }
                }
            }
        }

        let before = primes.len();
        for ((term, implicant), was_merged) in working.into_iter().zip(merged) {
            if !was_merged && seen_primes.insert(implicant.clone()) {
                primes.push((term, implicant));
            }
        }

        log::trace!(
            "Quine-McCluskey {} round {}: {} levels, {} merged terms, {} new primes",
            form.abbreviation(),
            round,
            levels.len(),
            next.len(),
            primes.len() - before
        );

        working = next;
    }

    primes
}

impl TruthTable {
    /// All prime implicants of the table, with the rows each covers
    ///
    /// Missing rows of a partial table count as non-target rows.
    pub fn prime_implicants(&self, form: FormKind) -> Arc<[(Term, Implicant)]> {
        let primes = self.derived.primes[slot(form)].get_or_init(|| {
            prime_implicants(self.variables().len(), &self.target_indices(form), form).into()
        });
        Arc::clone(primes)
    }

    /// The disjunction (or conjunction) of every prime implicant
    ///
    /// This is the shortened normal form: no literal can be removed from any
    /// of its terms, but some terms may be redundant.
    pub fn shortened_form(&self, form: FormKind) -> Formula {
        let terms = self.prime_implicants(form).iter().map(|(t, _)| *t).collect();
        Formula::new(form, self.shared_variables(), terms)
    }

    /// Minimize with Quine–McCluskey and unique-coverage selection
    ///
    /// The result covers exactly the target rows of the table. Selection keeps
    /// every prime that alone covers some row, which is not always a minimum
    /// cover.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::{FormKind, TruthTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = TruthTable::from_expression("(A * B) + (A * !B) + (!A * B)")?;
    /// let minimized = table.quine_mc_cluskey(FormKind::Disjunctive);
    /// assert_eq!(minimized.to_string(), "(B)+(A)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn quine_mc_cluskey(&self, form: FormKind) -> Formula {
        self.derived.quine_mc_cluskey[slot(form)]
            .get_or_init(|| {
                let primes = self.prime_implicants(form);
                let selected = unique_coverage(primes.to_vec());
                log::debug!(
                    "Quine-McCluskey {}: {} primes, {} selected",
                    form.abbreviation(),
                    primes.len(),
                    selected.len()
                );
                let terms = selected.into_iter().map(|(t, _)| t).collect();
                Formula::new(form, self.shared_variables(), terms)
            })
            .clone()
    }
}
