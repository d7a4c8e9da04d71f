//! Crate-level error type
//!
//! Each area has its own error type ([`ParseError`], [`EvaluationError`],
//! [`TableError`], [`IncompleteTableError`]). [`Error`] wraps all of them so
//! that code mixing several operations, like the batch reader in
//! [`report`](crate::report), can use `?` throughout.

use crate::expression::{EvaluationError, ParseError};
use crate::table::{BuildTableError, IncompleteTableError, TableError};
use std::fmt;
use std::io;

/// Any error produced by this crate
#[derive(Debug)]
pub enum Error {
    /// An expression did not parse
    Parse(ParseError),
    /// A postfix sequence could not be evaluated
    Evaluation(EvaluationError),
    /// A truth table could not be built
    Table(TableError),
    /// An operation needing every row was called on a partial table
    IncompleteTable(IncompleteTableError),
    /// Reading input failed
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Evaluation(e) => write!(f, "{}", e),
            Error::Table(e) => write!(f, "{}", e),
            Error::IncompleteTable(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Evaluation(e) => Some(e),
            Error::Table(e) => Some(e),
            Error::IncompleteTable(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvaluationError> for Error {
    fn from(err: EvaluationError) -> Self {
        Error::Evaluation(err)
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Error::Table(err)
    }
}

impl From<IncompleteTableError> for Error {
    fn from(err: IncompleteTableError) -> Self {
        Error::IncompleteTable(err)
    }
}

impl From<BuildTableError> for Error {
    fn from(err: BuildTableError) -> Self {
        match err {
            BuildTableError::Parse(e) => Error::Parse(e),
            BuildTableError::Evaluation(e) => Error::Evaluation(e),
            BuildTableError::Table(e) => Error::Table(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::Parse(e) => e.into(),
            Error::Evaluation(e) => e.into(),
            Error::Table(e) => e.into(),
            Error::IncompleteTable(e) => e.into(),
        }
    }
}
