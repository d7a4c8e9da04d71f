//! # Logic Evaluator
//!
//! Truth tables, canonical normal forms and two-level minimization of boolean
//! expressions.
//!
//! ## Overview
//!
//! An expression such as `(A ^ B) ^ C` is parsed into postfix form, evaluated
//! on every assignment of its variables, and the resulting [`TruthTable`]
//! answers every question about the function:
//!
//! - **Canonical forms**: PDNF / PCNF, their numeric forms `+(1,2,4,7)` /
//!   `*(0,3,5,6)`, and the index form `f(3)105`
//! - **Quine–McCluskey**: prime implicants, the shortened form, and a
//!   unique-coverage selection of primes
//! - **Calculative reduction**: Quine–McCluskey with every term removed whose
//!   removal leaves the function unchanged
//! - **Karnaugh maps**: Gray-coded grid layout and toroidal rectangle grouping
//!
//! Every minimizer produces either a sum of products or a product of sums,
//! selected with [`FormKind`].
//!
//! ## Quick start
//!
//! ```
//! use logic_evaluator::{FormKind, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = TruthTable::from_expression("(A * B) + (A * !B) + (!A * B)")?;
//!
//! assert_eq!(table.numeric_pdnf(), "+(1,2,3)");
//! assert_eq!(table.pcnf().to_string(), "(A+B)");
//!
//! let qmc = table.quine_mc_cluskey(FormKind::Disjunctive);
//! let kmap = table.karnaugh_groups(FormKind::Disjunctive)?;
//! for row in table.rows() {
//!     assert_eq!(qmc.evaluate_index(row.index()), kmap.evaluate_index(row.index()));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Explicit and partial tables
//!
//! Tables can also be supplied row by row. A partial table (fewer than 2ⁿ
//! rows) still has canonical forms and prime implicants; operations that need
//! every row return an [`IncompleteTableError`].
//!
//! ```
//! use logic_evaluator::TruthTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = TruthTable::from_rows(["X", "Y"], [[false, true, true], [true, true, false]])?;
//! assert_eq!(table.numeric_pdnf(), "+(1)");
//! assert!(table.karnaugh_map().is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Size limits
//!
//! Table size is 2ⁿ, so construction refuses more variables than the
//! [`EngineConfig`] limit allows (16 by default, at most
//! [`MAX_SUPPORTED_VARIABLES`]).
//!
//! ## Thread Safety
//!
//! Tables are immutable once built. Derived forms are memoized in
//! [`std::sync::OnceLock`] cells, so a table can be shared between threads and
//! each form is computed at most once.

// Public modules
pub mod error;
pub mod expression;
pub mod minimize;
pub mod report;
pub mod table;
pub mod term;

// Re-export high-level public API
pub use error::Error;
pub use expression::{EvaluationError, Operator, ParseError, PostfixExpr, PostfixToken};
pub use minimize::KarnaughMap;
pub use report::Report;
pub use table::{BuildTableError, IncompleteTableError, IndexForm, Row, TableError, TruthTable};
pub use term::{FormKind, Formula, Implicant, Literal, Polarity, Term};

pub use logic_evaluator_macros::truth_table;

/// Hard ceiling on the number of variables of a table
///
/// [`Term`] stores literals in 32-bit masks, and a 24-variable table already
/// holds sixteen million rows.
pub const MAX_SUPPORTED_VARIABLES: usize = 24;

/// Default variable limit of [`EngineConfig`]
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Configuration for table construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest number of variables a table may have
    ///
    /// Values above [`MAX_SUPPORTED_VARIABLES`] are treated as that value.
    pub max_variables: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable limit
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    /// The variable limit
    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}
