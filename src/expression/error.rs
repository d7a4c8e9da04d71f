//! Error types for expression parsing and postfix evaluation

use super::Operator;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to boolean expression parsing
///
/// Every variant except [`ParseError::Empty`] carries the original input and
/// the byte offset at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no tokens at all
    Empty,
    /// Text that is neither an identifier, a constant, an operator nor a parenthesis
    UnexpectedCharacter {
        /// The original input string
        input: Arc<str>,
        /// Byte offset of the unrecognized text
        position: usize,
        /// The unrecognized text itself
        fragment: Arc<str>,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed
    UnbalancedParentheses {
        /// The original input string
        input: Arc<str>,
        /// Byte offset of the offending parenthesis
        position: usize,
    },
    /// An operator (or the end of input) was found where an operand was required
    MissingOperand {
        /// The original input string
        input: Arc<str>,
        /// Byte offset where the operand was expected
        position: usize,
    },
    /// An operand followed another operand without an operator in between
    UnexpectedOperand {
        /// The original input string
        input: Arc<str>,
        /// Byte offset of the second operand
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the error, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnbalancedParentheses { position, .. }
            | ParseError::MissingOperand { position, .. }
            | ParseError::UnexpectedOperand { position, .. } => Some(*position),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Failed to parse boolean expression: input is empty"),
            ParseError::UnexpectedCharacter {
                input,
                position,
                fragment,
            } => write!(
                f,
                "Failed to parse boolean expression at position {}: unrecognized text {:?}. Input: {:?}",
                position, fragment, input
            ),
            ParseError::UnbalancedParentheses { input, position } => write!(
                f,
                "Failed to parse boolean expression at position {}: unbalanced parentheses. Input: {:?}",
                position, input
            ),
            ParseError::MissingOperand { input, position } => write!(
                f,
                "Failed to parse boolean expression at position {}: missing operand. Input: {:?}",
                position, input
            ),
            ParseError::UnexpectedOperand { input, position } => write!(
                f,
                "Failed to parse boolean expression at position {}: operand without operator. Input: {:?}",
                position, input
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while evaluating a postfix sequence
///
/// A sequence produced by the parser never triggers these; they guard
/// sequences assembled by hand through [`PostfixExpr::from_tokens`].
///
/// [`PostfixExpr::from_tokens`]: super::PostfixExpr::from_tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// An operator found fewer operands on the stack than it needs
    StackUnderflow {
        /// Index of the operator token in the postfix sequence
        token_index: usize,
        /// The operator that underflowed
        operator: Operator,
    },
    /// More than one value was left on the stack after the last token
    ExcessOperands {
        /// Number of values left on the stack
        remaining: usize,
    },
    /// The sequence produced no value at all
    EmptyStack,
    /// A variable index or name has no value in the supplied assignment
    UnboundVariable {
        /// Name of the unbound variable
        name: Arc<str>,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::StackUnderflow {
                token_index,
                operator,
            } => write!(
                f,
                "Operator '{}' at postfix position {} is missing operands",
                operator, token_index
            ),
            EvaluationError::ExcessOperands { remaining } => write!(
                f,
                "Postfix sequence left {} values on the stack instead of 1",
                remaining
            ),
            EvaluationError::EmptyStack => write!(f, "Postfix sequence produced no value"),
            EvaluationError::UnboundVariable { name } => {
                write!(f, "Variable '{}' has no value in the assignment", name)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for io::Error {
    fn from(err: EvaluationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
