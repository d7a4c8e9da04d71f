//! Operators of the expression language
//!
//! Each operator knows its symbol, its arity and its binding strength. The
//! parser only ever compares precedences; the evaluator only ever calls
//! [`Operator::apply`].

use std::fmt;

/// A boolean operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unary negation, written `!`
    Not,
    /// Conjunction, written `*`
    And,
    /// Disjunction, written `+`
    Or,
    /// Exclusive or, written `^`
    Xor,
    /// Material implication, written `->`
    Implies,
}

impl Operator {
    /// Every operator, tightest binding first
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Implies,
    ];

    /// Binding strength used by the shunting-yard conversion
    ///
    /// `Or` and `Xor` share a level; `Implies` binds loosest.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Or | Operator::Xor => 2,
            Operator::Implies => 1,
        }
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }

    /// Number of operands consumed from the evaluation stack
    pub fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    /// The textual form accepted by the tokenizer
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "*",
            Operator::Or => "+",
            Operator::Xor => "^",
            Operator::Implies => "->",
        }
    }

    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator
    ///
    /// `rhs` is ignored for [`Operator::Not`].
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Operator::Not => !lhs,
            Operator::And => lhs && rhs,
            Operator::Or => lhs || rhs,
            Operator::Xor => lhs ^ rhs,
            Operator::Implies => !lhs || rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
