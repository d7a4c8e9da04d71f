//! Truth tables and their lazily derived forms
//!
//! A [`TruthTable`] is built once, either by evaluating an expression over
//! every assignment of its variables or from an explicit (possibly partial)
//! list of rows, and never changes afterwards. Canonical forms, prime
//! implicants and Karnaugh groupings are computed on first use and cached
//! for the lifetime of the table.

mod canonical;
pub mod error;

pub use canonical::IndexForm;
pub use error::{BuildTableError, IncompleteTableError, TableError};

use crate::expression::PostfixExpr;
use crate::minimize::KarnaughMap;
use crate::term::{FormKind, Formula, Implicant, Term};
use crate::{EngineConfig, MAX_SUPPORTED_VARIABLES};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// One assignment of the input variables and the function value on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    inputs: Box<[bool]>,
    output: bool,
    index: usize,
}

impl Row {
    fn new(inputs: Box<[bool]>, output: bool) -> Self {
        let index = inputs
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
        Row {
            inputs,
            output,
            index,
        }
    }

    /// Input bits, first variable first
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// The function value
    pub fn output(&self) -> bool {
        self.output
    }

    /// The inputs read as a binary number, first variable most significant
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Per-form cache slots
pub(crate) type PerForm<T> = [OnceLock<T>; 2];

pub(crate) fn slot(form: FormKind) -> usize {
    match form {
        FormKind::Disjunctive => 0,
        FormKind::Conjunctive => 1,
    }
}

/// Memoized derived forms; filled on first request, never invalidated
#[derive(Debug, Clone, Default)]
pub(crate) struct Derived {
    pub(crate) canonical: PerForm<Formula>,
    pub(crate) primes: PerForm<Arc<[(Term, Implicant)]>>,
    pub(crate) quine_mc_cluskey: PerForm<Formula>,
    pub(crate) calculative: PerForm<Formula>,
    pub(crate) karnaugh_map: OnceLock<Arc<KarnaughMap>>,
    pub(crate) karnaugh_groups: PerForm<Formula>,
}

/// A boolean function given as its table of values
///
/// # Examples
///
/// ```
/// use logic_evaluator::TruthTable;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TruthTable::from_expression("(A ^ B) ^ C")?;
/// assert_eq!(table.rows().len(), 8);
/// assert_eq!(table.numeric_pdnf(), "+(1,2,4,7)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Arc<[Arc<str>]>,
    /// Sorted by index; for a complete table `rows[i].index() == i`
    rows: Vec<Row>,
    source: Option<Arc<str>>,
    pub(crate) derived: Derived,
}

impl TruthTable {
    /// Parse an expression and evaluate it on every assignment
    ///
    /// Variables are the expression's distinct names in sorted order.
    pub fn from_expression(expression: &str) -> Result<Self, BuildTableError> {
        Self::from_expression_with_config(expression, &EngineConfig::default())
    }

    /// As [`from_expression`](Self::from_expression), with an explicit configuration
    pub fn from_expression_with_config(
        expression: &str,
        config: &EngineConfig,
    ) -> Result<Self, BuildTableError> {
        let expr = PostfixExpr::parse(expression)?;
        let mut table = Self::over_variables(&expr, expr.shared_variables(), config)?;
        table.source = Some(Arc::from(expression.trim()));
        Ok(table)
    }

    /// Evaluate an already parsed expression on every assignment
    pub fn from_postfix(expr: &PostfixExpr) -> Result<Self, BuildTableError> {
        Self::over_variables(expr, expr.shared_variables(), &EngineConfig::default())
    }

    /// Evaluate `expr` over a given variable list
    ///
    /// `variables` may hold names the expression never mentions; every name
    /// the expression does mention must be in it.
    pub(crate) fn over_variables(
        expr: &PostfixExpr,
        variables: Arc<[Arc<str>]>,
        config: &EngineConfig,
    ) -> Result<Self, BuildTableError> {
        let n = variables.len();
        check_variable_count(n, config)?;

        // position of each expression variable in the table's variable list
        let positions: Vec<Option<usize>> = expr
            .variables()
            .iter()
            .map(|name| variables.iter().position(|v| v == name))
            .collect();

        let mut rows = Vec::with_capacity(1usize << n);
        for index in 0..(1usize << n) {
            let bit = |pos: usize| (index >> (n - 1 - pos)) & 1 == 1;
            let output = expr.evaluate_by(|i| positions.get(i).copied().flatten().map(bit))?;
            let inputs: Box<[bool]> = (0..n).map(bit).collect();
            rows.push(Row::new(inputs, output));
        }

        log::debug!(
            "Built truth table over {} variables ({} rows, {} true)",
            n,
            rows.len(),
            rows.iter().filter(|r| r.output).count()
        );

        Ok(TruthTable {
            variables,
            rows,
            source: None,
            derived: Derived::default(),
        })
    }

    /// Build a table from explicit rows
    ///
    /// Each row holds one bit per variable followed by the output bit. The
    /// row set may be partial; missing assignments are treated as neither
    /// minterms nor maxterms by the canonical forms, and operations that need
    /// every row refuse to run. Rows are stored ordered by their index.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::TruthTable;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = TruthTable::from_rows(
    ///     ["A", "B"],
    ///     [[true, true, true], [false, true, false]],
    /// )?;
    /// assert!(!table.is_complete());
    /// assert_eq!(table.pdnf().to_string(), "(A*B)");
    /// assert!(table.index_form().is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_rows<V, R>(
        variables: impl IntoIterator<Item = V>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, TableError>
    where
        V: AsRef<str>,
        R: AsRef<[bool]>,
    {
        Self::from_rows_with_config(variables, rows, &EngineConfig::default())
    }

    /// As [`from_rows`](Self::from_rows), with an explicit configuration
    pub fn from_rows_with_config<V, R>(
        variables: impl IntoIterator<Item = V>,
        rows: impl IntoIterator<Item = R>,
        config: &EngineConfig,
    ) -> Result<Self, TableError>
    where
        V: AsRef<str>,
        R: AsRef<[bool]>,
    {
        let variables: Arc<[Arc<str>]> = variables
            .into_iter()
            .map(|v| Arc::from(v.as_ref()))
            .collect();
        check_variable_count(variables.len(), config)?;

        let mut seen = HashSet::new();
        for name in variables.iter() {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(TableError::InvalidVariableName {
                    name: Arc::clone(name),
                });
            }
            if !seen.insert(name) {
                return Err(TableError::DuplicateVariable {
                    name: Arc::clone(name),
                });
            }
        }

        let n = variables.len();
        let mut by_index = BTreeMap::new();
        for (position, bits) in rows.into_iter().enumerate() {
            let bits = bits.as_ref();
            if bits.len() != n + 1 {
                return Err(TableError::RowWidthMismatch {
                    row: position,
                    expected: n + 1,
                    found: bits.len(),
                });
            }
            let row = Row::new(bits[..n].into(), bits[n]);
            if by_index.insert(row.index, row.clone()).is_some() {
                return Err(TableError::DuplicateRow { index: row.index });
            }
        }

        let rows: Vec<Row> = by_index.into_values().collect();
        log::debug!(
            "Built truth table over {} variables from {} explicit rows",
            n,
            rows.len()
        );

        Ok(TruthTable {
            variables,
            rows,
            source: None,
            derived: Derived::default(),
        })
    }

    /// Variable names, first variable most significant
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    pub(crate) fn shared_variables(&self) -> Arc<[Arc<str>]> {
        Arc::clone(&self.variables)
    }

    /// Rows ordered by index
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The expression text the table was built from, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Number of rows a complete table over these variables has
    pub fn expected_rows(&self) -> usize {
        1usize << self.variables.len()
    }

    /// Check if every assignment has a row
    pub fn is_complete(&self) -> bool {
        self.rows.len() == self.expected_rows()
    }

    /// The output on assignment `index`, if the table has that row
    pub fn output(&self, index: usize) -> Option<bool> {
        self.rows
            .binary_search_by_key(&index, Row::index)
            .ok()
            .map(|pos| self.rows[pos].output)
    }

    /// Indices of the rows whose output is the target of `form`, ascending
    pub fn target_indices(&self, form: FormKind) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.output == form.target())
            .map(Row::index)
            .collect()
    }

    pub(crate) fn require_complete(
        &self,
        operation: &'static str,
    ) -> Result<(), IncompleteTableError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(IncompleteTableError {
                operation,
                rows: self.rows.len(),
                expected: self.expected_rows(),
            })
        }
    }
}

fn check_variable_count(found: usize, config: &EngineConfig) -> Result<(), TableError> {
    let limit = config.max_variables().min(MAX_SUPPORTED_VARIABLES);
    if found > limit {
        return Err(TableError::TooManyVariables { found, limit });
    }
    Ok(())
}

/// Plain-text grid: a header of variable names and `F`, then one line per row
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|v| v.len().max(1)).collect();
        for (name, width) in self.variables.iter().zip(&widths) {
            write!(f, "{:>width$} ", name, width = width)?;
        }
        writeln!(f, "| F")?;
        for row in &self.rows {
            for (&bit, width) in row.inputs.iter().zip(&widths) {
                write!(f, "{:>width$} ", u8::from(bit), width = width)?;
            }
            writeln!(f, "| {}", u8::from(row.output))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
