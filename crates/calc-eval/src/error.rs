//! Runtime error types for the calc evaluator.

use calc_types::ast::BinOp;
use calc_types::{CalcError, ErrorCode, Span};
use thiserror::Error;

/// Evaluation error: unknown names and arithmetic faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A variable was read before any assignment bound it.
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String, span: Span },
    /// The right operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero { span: Span },
    /// Integer overflow, or a float result that is not finite.
    #[error("numeric overflow in '{op}'")]
    Overflow { op: BinOp, span: Span },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::UNDEFINED_VARIABLE,
            Self::DivisionByZero { .. } => ErrorCode::DIVISION_BY_ZERO,
            Self::Overflow { .. } => ErrorCode::NUMERIC_OVERFLOW,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UndefinedVariable { span, .. }
            | Self::DivisionByZero { span }
            | Self::Overflow { span, .. } => *span,
        }
    }
}

impl From<EvalError> for CalcError {
    fn from(err: EvalError) -> Self {
        CalcError::new(err.code(), err.to_string(), err.span())
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
