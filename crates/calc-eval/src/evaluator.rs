//! Core expression evaluator.

use crate::arith::{self, ArithFault};
use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use calc_types::ast::*;
use calc_types::{Number, Span};
use tracing::{debug, trace};

/// The core evaluator — walks AST nodes and produces numbers.
///
/// Borrows the environment mutably for the duration of one evaluation;
/// only assignment nodes write to it.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Evaluate an expression to a number.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Number> {
        match &expr.kind {
            ExprKind::NumberLit(n) => Ok(*n),
            ExprKind::VariableRef(name) => self.eval_variable(name, expr.span),
            ExprKind::Assignment { name, value } => self.eval_assignment(name, value),
            ExprKind::Binary { left, op, right } => {
                self.eval_binary(left, *op, right, expr.span)
            }
        }
    }

    fn eval_variable(&self, name: &str, span: Span) -> EvalResult<Number> {
        self.env
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
                span,
            })
    }

    /// The right side is fully evaluated before the name is bound, so a
    /// failing right side leaves the environment untouched.
    fn eval_assignment(&mut self, name: &Ident, value: &Expr) -> EvalResult<Number> {
        let result = self.eval(value)?;
        let previous = self.env.set(name.name.as_str(), result);
        trace!(name = %name.name, value = %result, ?previous, "bound variable");
        Ok(result)
    }

    /// Left operand first, then right, then the operator.
    fn eval_binary(
        &mut self,
        left: &Expr,
        op: BinOp,
        right: &Expr,
        span: Span,
    ) -> EvalResult<Number> {
        let lv = self.eval(left)?;
        let rv = self.eval(right)?;
        arith::apply(op, lv, rv).map_err(|fault| match fault {
            ArithFault::DivisionByZero => EvalError::DivisionByZero { span },
            ArithFault::Overflow => EvalError::Overflow { op, span },
        })
    }
}

/// Evaluate `expr` against `env`.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<Number> {
    let result = Evaluator::new(env).eval(expr);
    if let Err(err) = &result {
        debug!(error = %err, "evaluation failed");
    }
    result
}
