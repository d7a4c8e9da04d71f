//! Unique-coverage selection of implicants
//!
//! Both minimizers end with the same step: from a list of candidate terms,
//! drop every term whose rows are all still covered by the other retained
//! terms. The result always covers every row the input covered, but it is
//! not guaranteed to be a minimum cover.

use crate::term::Implicant;
use std::collections::HashMap;

/// Keep the candidates that cover some row no other kept candidate covers
///
/// Candidates are examined from the smallest implicant to the largest, ties
/// in input order, and removed one at a time so that two terms covering the
/// same rows never both disappear. The survivors keep their input order.
pub(crate) fn unique_coverage<T>(candidates: Vec<(T, Implicant)>) -> Vec<(T, Implicant)> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for (_, implicant) in &candidates {
        for index in implicant.iter() {
            *counts.entry(index).or_default() += 1;
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| candidates[i].1.len());

    let mut keep = vec![true; candidates.len()];
    for i in order {
        let implicant = &candidates[i].1;
        let redundant = implicant
            .iter()
            .all(|index| counts.get(&index).copied().unwrap_or(0) >= 2);
        if redundant {
            keep[i] = false;
            for index in implicant.iter() {
                if let Some(count) = counts.get_mut(&index) {
                    *count -= 1;
                }
            }
        }
    }

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect()
}
