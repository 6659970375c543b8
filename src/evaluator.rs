use crate::ast::{BinaryOp, Expr};
use crate::error::{ErrorKind, MiniError, Span};
use std::collections::HashMap;

/// The mutable name-to-integer binding store. Bindings are created on
/// first assignment; looking up an absent name is a checked failure, never
/// an implicit zero.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }
}

/// Tree-walking evaluator. Borrows the caller's environment for the
/// duration of one evaluation and may mutate it through `Assign`.
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<i64, MiniError> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, span } => self.environment.get(name).ok_or_else(|| {
                MiniError::with_help(
                    ErrorKind::UndefinedVariable(name.clone()),
                    *span,
                    format!("Assign it first, e.g. '{} = 0'.", name),
                )
            }),
            Expr::Binary {
                left,
                operator,
                right,
                span,
            } => {
                // Left fully before right; no short-circuiting.
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.binary_op(*operator, left_val, right_val, *span)
            }
            Expr::Assign { name, value, .. } => {
                let val = self.evaluate(value)?;
                self.environment.set(name, val);
                Ok(val)
            }
        }
    }

    fn binary_op(
        &self,
        operator: BinaryOp,
        left: i64,
        right: i64,
        span: Span,
    ) -> Result<i64, MiniError> {
        match operator {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Subtract => Ok(left - right),
            BinaryOp::Multiply => Ok(left * right),
            BinaryOp::Divide => {
                if right == 0 {
                    Err(MiniError::with_help(
                        ErrorKind::DivisionByZero,
                        span,
                        "The right operand of '/' evaluated to 0.".to_string(),
                    ))
                } else {
                    // Truncating integer division.
                    Ok(left / right)
                }
            }
        }
    }
}
