//! Stack evaluation of postfix sequences

use super::error::EvaluationError;
use super::{PostfixExpr, PostfixToken};
use std::collections::HashMap;
use std::sync::Arc;

impl PostfixExpr {
    /// Evaluate with one value per variable, in [`variables`](Self::variables) order
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::PostfixExpr;
    ///
    /// let expr = PostfixExpr::parse("A ^ B").unwrap();
    /// assert_eq!(expr.evaluate(&[true, false]), Ok(true));
    /// assert_eq!(expr.evaluate(&[true, true]), Ok(false));
    /// ```
    pub fn evaluate(&self, values: &[bool]) -> Result<bool, EvaluationError> {
        self.evaluate_by(|index| values.get(index).copied())
    }

    /// Evaluate with values looked up by variable name
    ///
    /// A name missing from `assignment` is an error, not an implicit `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::PostfixExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = PostfixExpr::parse("a -> b").unwrap();
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), false);
    /// assert_eq!(expr.evaluate_with(&assignment), Ok(false));
    /// ```
    pub fn evaluate_with(
        &self,
        assignment: &HashMap<Arc<str>, bool>,
    ) -> Result<bool, EvaluationError> {
        self.evaluate_by(|index| {
            self.variables()
                .get(index)
                .and_then(|name| assignment.get(name))
                .copied()
        })
    }

    /// Single left-to-right stack walk
    ///
    /// `value_of` maps a variable index to its value; negated operands are
    /// resolved to the complement as they are pushed.
    pub(crate) fn evaluate_by(
        &self,
        value_of: impl Fn(usize) -> Option<bool>,
    ) -> Result<bool, EvaluationError> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.tokens().len());

        for (token_index, token) in self.tokens().iter().enumerate() {
            match *token {
                PostfixToken::Variable { index, negated } => {
                    let value = value_of(index).ok_or_else(|| EvaluationError::UnboundVariable {
                        name: self.variable_name(index),
                    })?;
                    stack.push(value != negated);
                }
                PostfixToken::Constant(value) => stack.push(value),
                PostfixToken::Operator(operator) => {
                    let underflow = EvaluationError::StackUnderflow {
                        token_index,
                        operator,
                    };
                    if stack.len() < operator.arity() {
                        return Err(underflow);
                    }
                    let rhs = if operator.is_unary() {
                        false
                    } else {
                        stack.pop().ok_or_else(|| underflow.clone())?
                    };
                    let lhs = stack.pop().ok_or(underflow)?;
                    stack.push(operator.apply(lhs, rhs));
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvaluationError::EmptyStack),
            rest => Err(EvaluationError::ExcessOperands {
                remaining: rest.len(),
            }),
        }
    }

    fn variable_name(&self, index: usize) -> Arc<str> {
        match self.variables().get(index) {
            Some(name) => Arc::clone(name),
            None => Arc::from(format!("#{}", index).as_str()),
        }
    }
}
