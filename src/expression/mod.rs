//! Boolean expressions: tokenizing, infix to postfix conversion, evaluation
//!
//! An expression string is turned into a [`PostfixExpr`] once; the truth table
//! generator then evaluates that sequence once per assignment row.
//!
//! # Syntax
//!
//! | Construct | Written as | Precedence |
//! |---|---|---|
//! | variable | `A`, `carry`, `!B` | operand |
//! | constant | `0`, `1`, `!1` | operand |
//! | NOT | `!` | 4 |
//! | AND | `*` | 3 |
//! | OR / XOR | `+` / `^` | 2 |
//! | IMPLIES | `->` | 1 |
//! | grouping | `(` `)` | |
//!
//! # Examples
//!
//! ```
//! use logic_evaluator::PostfixExpr;
//!
//! # fn main() -> Result<(), logic_evaluator::ParseError> {
//! let expr: PostfixExpr = "(A * B) + (C * (A ^ B))".parse()?;
//! assert_eq!(expr.variables().len(), 3);
//!
//! // A=1, B=0, C=1 -> carry out of a full adder
//! assert_eq!(expr.evaluate(&[true, false, true]), Ok(true));
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod lexer;
mod operators;
mod parser;

pub use error::{EvaluationError, ParseError};
pub use operators::Operator;

use std::str::FromStr;
use std::sync::Arc;

/// One element of a postfix sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    /// A variable, by index into [`PostfixExpr::variables`]
    Variable {
        /// Index into the variable list
        index: usize,
        /// Push the complement of the variable's value
        negated: bool,
    },
    /// A literal `0` or `1`
    Constant(bool),
    /// An operator applied to the top of the stack
    Operator(Operator),
}

/// An expression in evaluable postfix form
///
/// Immutable after construction; cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixExpr {
    tokens: Arc<[PostfixToken]>,
    /// Sorted, deduplicated variable names
    variables: Arc<[Arc<str>]>,
}

impl PostfixExpr {
    /// Assemble a postfix sequence directly
    ///
    /// No validation happens here: a malformed sequence surfaces as an
    /// [`EvaluationError`] on the first [`evaluate`](Self::evaluate) call.
    pub fn from_tokens(tokens: Vec<PostfixToken>, variables: Vec<Arc<str>>) -> Self {
        PostfixExpr {
            tokens: tokens.into(),
            variables: variables.into(),
        }
    }

    /// The postfix tokens in evaluation order
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    /// The variable names referenced by the expression
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    pub(crate) fn shared_variables(&self) -> Arc<[Arc<str>]> {
        Arc::clone(&self.variables)
    }
}

impl FromStr for PostfixExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostfixExpr::parse(s)
    }
}
