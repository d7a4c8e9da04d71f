//! Sets of row indices covered by a term

use super::{FormKind, Term};
use std::collections::BTreeSet;

/// The set of target row indices a term covers
///
/// Two implicants are equal when their index sets are equal, however they
/// were derived. Both minimizers deduplicate on this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Implicant(BTreeSet<usize>);

impl Implicant {
    /// An implicant covering nothing
    pub fn new() -> Self {
        Implicant(BTreeSet::new())
    }

    /// An implicant covering one row
    pub fn single(index: usize) -> Self {
        Implicant(BTreeSet::from([index]))
    }

    /// Number of covered rows
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no row is covered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if row `index` is covered
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Covered rows in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Rows covered by either implicant
    pub fn union(&self, other: &Implicant) -> Implicant {
        Implicant(self.0.union(&other.0).copied().collect())
    }

    /// Check if every row of `self` is also in `other`
    pub fn is_subset(&self, other: &Implicant) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Fold the covered rows into a single term
    ///
    /// Variables that are constant across all rows keep a literal, the rest
    /// are dropped. `None` for an empty implicant.
    pub fn reduced_term(&self, width: usize, form: FormKind) -> Option<Term> {
        Term::fold(width, self.iter(), form)
    }
}

impl FromIterator<usize> for Implicant {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Implicant(iter.into_iter().collect())
    }
}

impl Extend<usize> for Implicant {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
