//! Display formatting for postfix sequences

use super::{PostfixExpr, PostfixToken};
use std::fmt;

/// Formats the sequence as space-separated postfix tokens
///
/// Negated operands keep their `!` prefix, so `!A * B` prints as `!A B *`.
impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *token {
                PostfixToken::Variable { index, negated } => {
                    if negated {
                        f.write_str("!")?;
                    }
                    match self.variables().get(index) {
                        Some(name) => f.write_str(name)?,
                        None => write!(f, "#{}", index)?,
                    }
                }
                PostfixToken::Constant(value) => f.write_str(if value { "1" } else { "0" })?,
                PostfixToken::Operator(op) => write!(f, "{}", op)?,
            }
        }
        Ok(())
    }
}
