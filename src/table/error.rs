//! Error types for truth table construction and coverage checks

use crate::expression::{EvaluationError, ParseError};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to the shape of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// More variables than the configured ceiling
    TooManyVariables {
        /// Number of variables requested
        found: usize,
        /// The configured ceiling
        limit: usize,
    },
    /// A variable name that is empty or contains something other than letters
    InvalidVariableName {
        /// The rejected name
        name: Arc<str>,
    },
    /// The same variable name was given twice
    DuplicateVariable {
        /// The repeated name
        name: Arc<str>,
    },
    /// A row whose length is not the variable count plus one output bit
    RowWidthMismatch {
        /// Position of the row in the supplied list
        row: usize,
        /// Expected number of bits (variables + 1)
        expected: usize,
        /// Number of bits the row had
        found: usize,
    },
    /// Two rows with the same input bits
    DuplicateRow {
        /// Index of the repeated assignment
        index: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyVariables { found, limit } => write!(
                f,
                "Truth table over {} variables exceeds the limit of {}",
                found, limit
            ),
            TableError::InvalidVariableName { name } => {
                write!(f, "Invalid variable name {:?}: expected letters only", name)
            }
            TableError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' appears more than once", name)
            }
            TableError::RowWidthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} bits, expected {} (inputs plus output)",
                row, found, expected
            ),
            TableError::DuplicateRow { index } => {
                write!(f, "Assignment {} is listed more than once", index)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// An operation that needs all 2ⁿ rows was called on a partial table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteTableError {
    /// Name of the operation that was refused
    pub operation: &'static str,
    /// Rows present in the table
    pub rows: usize,
    /// Rows a complete table would have
    pub expected: usize,
}

impl fmt::Display for IncompleteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot compute {} on a partial truth table ({} of {} rows)",
            self.operation, self.rows, self.expected
        )
    }
}

impl std::error::Error for IncompleteTableError {}

impl From<IncompleteTableError> for io::Error {
    fn from(err: IncompleteTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors that can occur when building a table from an expression
///
/// Returned by `TruthTable::from_expression()`. No table is produced when
/// any of these occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildTableError {
    /// The expression did not parse
    Parse(ParseError),
    /// The postfix sequence could not be evaluated
    Evaluation(EvaluationError),
    /// The table would be invalid
    Table(TableError),
}

impl fmt::Display for BuildTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTableError::Parse(e) => write!(f, "{}", e),
            BuildTableError::Evaluation(e) => write!(f, "{}", e),
            BuildTableError::Table(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BuildTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildTableError::Parse(e) => Some(e),
            BuildTableError::Evaluation(e) => Some(e),
            BuildTableError::Table(e) => Some(e),
        }
    }
}

impl From<ParseError> for BuildTableError {
    fn from(err: ParseError) -> Self {
        BuildTableError::Parse(err)
    }
}

impl From<EvaluationError> for BuildTableError {
    fn from(err: EvaluationError) -> Self {
        BuildTableError::Evaluation(err)
    }
}

impl From<TableError> for BuildTableError {
    fn from(err: TableError) -> Self {
        BuildTableError::Table(err)
    }
}

impl From<BuildTableError> for io::Error {
    fn from(err: BuildTableError) -> Self {
        match err {
            BuildTableError::Parse(e) => e.into(),
            BuildTableError::Evaluation(e) => e.into(),
            BuildTableError::Table(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_table_error_display() {
        let err = TableError::TooManyVariables {
            found: 20,
            limit: 16,
        };
        assert_eq!(
            err.to_string(),
            "Truth table over 20 variables exceeds the limit of 16"
        );

        let err = TableError::DuplicateVariable { name: "A".into() };
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn test_incomplete_table_display() {
        let err = IncompleteTableError {
            operation: "index form",
            rows: 3,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "Cannot compute index form on a partial truth table (3 of 4 rows)"
        );
    }

    #[test]
    fn test_build_error_source_and_io_kind() {
        let err = BuildTableError::from(ParseError::Empty);
        assert!(err.source().is_some());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let io_err: io::Error = BuildTableError::from(TableError::DuplicateRow { index: 2 }).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
