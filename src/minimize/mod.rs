//! Two-level minimization of truth tables
//!
//! Three minimizers are provided as methods on [`TruthTable`]:
//!
//! - [`TruthTable::quine_mc_cluskey`] merges minterms (or maxterms) into
//!   prime implicants and keeps the uniquely covering ones.
//! - [`TruthTable::calculative_reduction`] additionally drops every term whose
//!   removal leaves the function unchanged, checked by re-evaluation.
//! - [`TruthTable::karnaugh_groups`] covers the target cells of the
//!   [`KarnaughMap`] with toroidal power-of-two rectangles.
//!
//! All of them accept a [`FormKind`] selecting a sum of products or a
//! product of sums, and return a [`Formula`] that is equivalent to the table
//! on every row. Results are cached inside the table.
//!
//! [`TruthTable`]: crate::TruthTable
//! [`TruthTable::quine_mc_cluskey`]: crate::TruthTable::quine_mc_cluskey
//! [`TruthTable::calculative_reduction`]: crate::TruthTable::calculative_reduction
//! [`TruthTable::karnaugh_groups`]: crate::TruthTable::karnaugh_groups
//! [`FormKind`]: crate::FormKind
//! [`Formula`]: crate::Formula

mod calculative;
mod coverage;
mod karnaugh;
mod quine_mccluskey;

pub use karnaugh::{gray_code, inverse_gray_code, KarnaughMap};
