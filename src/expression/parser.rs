//! Infix to postfix conversion (shunting-yard)

use super::error::ParseError;
use super::lexer::{tokenize, TokenKind};
use super::{Operator, PostfixExpr, PostfixToken};
use std::sync::Arc;

/// Entries of the operator stack
enum Pending {
    Operator(Operator),
    /// Byte offset of the `(`, kept for error reporting
    OpenParen(usize),
}

impl PostfixExpr {
    /// Parse an infix expression into its postfix form
    ///
    /// Supported syntax:
    /// - variables: letter sequences (`A`, `carry`, `Q`)
    /// - constants: `0`, `1`
    /// - `!` for NOT (binds tightest; `!A` is read as one negated operand)
    /// - `*` for AND
    /// - `+` for OR and `^` for XOR (same level)
    /// - `->` for implication (loosest)
    /// - parentheses for grouping
    ///
    /// Operators of equal precedence group to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::PostfixExpr;
    ///
    /// let expr = PostfixExpr::parse("A * (B + !C)").unwrap();
    /// assert_eq!(expr.to_string(), "A B !C + *");
    /// assert_eq!(expr.variables().len(), 3);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut variables: Vec<Arc<str>> = tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Identifier { name, .. } => Some(Arc::clone(name)),
                _ => None,
            })
            .collect();
        variables.sort();
        variables.dedup();

        let source: Arc<str> = Arc::from(input);
        let mut output = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Pending> = Vec::new();
        // Operands and operators must alternate; this tracks which one comes next
        let mut expect_operand = true;

        for token in &tokens {
            let position = token.position;
            if token.kind.is_operand() || token.kind == TokenKind::OpenParen {
                if !expect_operand {
                    return Err(ParseError::UnexpectedOperand {
                        input: source,
                        position,
                    });
                }
            }

            match &token.kind {
                TokenKind::Identifier { name, negated } => {
                    let index = variables
                        .binary_search(name)
                        .map_err(|_| ParseError::UnexpectedOperand {
                            input: Arc::clone(&source),
                            position,
                        })?;
                    output.push(PostfixToken::Variable {
                        index,
                        negated: *negated,
                    });
                    expect_operand = false;
                }
                TokenKind::Constant(value) => {
                    output.push(PostfixToken::Constant(*value));
                    expect_operand = false;
                }
                TokenKind::Operator(op) if op.is_unary() => {
                    if !expect_operand {
                        return Err(ParseError::UnexpectedOperand {
                            input: source,
                            position,
                        });
                    }
                    stack.push(Pending::Operator(*op));
                }
                TokenKind::Operator(op) => {
                    if expect_operand {
                        return Err(ParseError::MissingOperand {
                            input: source,
                            position,
                        });
                    }
                    while let Some(Pending::Operator(top)) = stack.last() {
                        if top.precedence() <= op.precedence() {
                            break;
                        }
                        output.push(PostfixToken::Operator(*top));
                        stack.pop();
                    }
                    stack.push(Pending::Operator(*op));
                    expect_operand = true;
                }
                TokenKind::OpenParen => {
                    stack.push(Pending::OpenParen(position));
                }
                TokenKind::CloseParen => {
                    if expect_operand {
                        return Err(ParseError::MissingOperand {
                            input: source,
                            position,
                        });
                    }
                    loop {
                        match stack.pop() {
                            Some(Pending::Operator(op)) => output.push(PostfixToken::Operator(op)),
                            Some(Pending::OpenParen(_)) => break,
                            None => {
                                return Err(ParseError::UnbalancedParentheses {
                                    input: source,
                                    position,
                                })
                            }
                        }
                    }
                }
            }
        }

        let unclosed = stack.iter().find_map(|entry| match entry {
            Pending::OpenParen(position) => Some(*position),
            Pending::Operator(_) => None,
        });
        if let Some(position) = unclosed {
            return Err(ParseError::UnbalancedParentheses {
                input: source,
                position,
            });
        }
        if expect_operand {
            return Err(ParseError::MissingOperand {
                input: source,
                position: input.len(),
            });
        }

        while let Some(Pending::Operator(op)) = stack.pop() {
            output.push(PostfixToken::Operator(op));
        }

        log::trace!("parsed {:?} into {} postfix tokens", input, output.len());
        Ok(PostfixExpr::from_tokens(output, variables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(input: &str) -> String {
        PostfixExpr::parse(input).unwrap().to_string()
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(postfix("A + B * C"), "A B C * +");
        assert_eq!(postfix("A * B + C"), "A B * C +");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(A + B) * C"), "A B + C *");
    }

    #[test]
    fn test_equal_precedence_groups_right() {
        assert_eq!(postfix("A + B ^ C"), "A B C ^ +");
        assert_eq!(postfix("A * B * C"), "A B C * *");
    }

    #[test]
    fn test_not_of_group() {
        assert_eq!(postfix("!(A * B) + C"), "A B * ! C +");
        assert_eq!(postfix("!!A"), "!A !");
    }

    #[test]
    fn test_implication_is_loosest() {
        assert_eq!(postfix("A * B -> C + D"), "A B * C D + ->");
    }

    #[test]
    fn test_variables_sorted_and_deduplicated() {
        let expr = PostfixExpr::parse("c * !a + b * a").unwrap();
        let names: Vec<&str> = expr.variables().iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(PostfixExpr::parse(""), Err(ParseError::Empty));
        assert_eq!(PostfixExpr::parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(matches!(
            PostfixExpr::parse("(A * B"),
            Err(ParseError::UnbalancedParentheses { position: 0, .. })
        ));
        assert!(matches!(
            PostfixExpr::parse("A * B)"),
            Err(ParseError::UnbalancedParentheses { position: 5, .. })
        ));
    }

    #[test]
    fn test_missing_operands() {
        assert!(matches!(
            PostfixExpr::parse("A *"),
            Err(ParseError::MissingOperand { position: 3, .. })
        ));
        assert!(matches!(
            PostfixExpr::parse("* A"),
            Err(ParseError::MissingOperand { position: 0, .. })
        ));
        assert!(matches!(
            PostfixExpr::parse("()"),
            Err(ParseError::MissingOperand { position: 1, .. })
        ));
    }

    #[test]
    fn test_adjacent_operands() {
        assert!(matches!(
            PostfixExpr::parse("A B"),
            Err(ParseError::UnexpectedOperand { position: 2, .. })
        ));
        assert!(matches!(
            PostfixExpr::parse("A (B)"),
            Err(ParseError::UnexpectedOperand { position: 2, .. })
        ));
        assert!(matches!(
            PostfixExpr::parse("A !(B)"),
            Err(ParseError::UnexpectedOperand { position: 2, .. })
        ));
    }

    #[test]
    fn test_unrecognized_text_fails_instead_of_truncating() {
        assert!(matches!(
            PostfixExpr::parse("A * B # C"),
            Err(ParseError::UnexpectedCharacter { position: 6, .. })
        ));
    }
}
