use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind, determined by error code range.
///
/// Each kind belongs to exactly one pipeline stage: the lexer raises
/// `Lexical`, the parser `Syntax`, the evaluator `Name` and `Arithmetic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Name,
    Arithmetic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntax => write!(f, "syntax"),
            Self::Name => write!(f, "name"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// Numeric error code (E100–E499).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Lexical errors (E100–E199) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(100);
    pub const NUMBER_OUT_OF_RANGE: Self = Self(101);

    // ── Syntax errors (E200–E299) ──
    pub const UNEXPECTED_TOKEN: Self = Self(200);
    pub const UNEXPECTED_END: Self = Self(201);
    pub const TRAILING_TOKEN: Self = Self(202);
    pub const NESTING_LIMIT_EXCEEDED: Self = Self(203);

    // ── Name errors (E300–E399) ──
    pub const UNDEFINED_VARIABLE: Self = Self(300);

    // ── Arithmetic errors (E400–E499) ──
    pub const DIVISION_BY_ZERO: Self = Self(400);
    pub const NUMERIC_OVERFLOW: Self = Self(401);

    /// Get the kind for this error code.
    pub fn kind(self) -> ErrorKind {
        match self.0 {
            100..=199 => ErrorKind::Lexical,
            200..=299 => ErrorKind::Syntax,
            300..=399 => ErrorKind::Name,
            _ => ErrorKind::Arithmetic,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured calc error.
///
/// Every failure that crosses the pipeline boundary is one of these. The
/// message names the offending character, token, or variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcError {
    /// Error code (e.g., E201).
    pub code: ErrorCode,
    /// Error kind (derived from code).
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Source location.
    pub span: Span,
}

impl CalcError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            kind: code.kind(),
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error at {}: {}", self.kind, self.span, self.message)
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_kind() {
        assert_eq!(ErrorCode::UNEXPECTED_CHARACTER.kind(), ErrorKind::Lexical);
        assert_eq!(ErrorCode::NUMBER_OUT_OF_RANGE.kind(), ErrorKind::Lexical);
        assert_eq!(ErrorCode::UNEXPECTED_TOKEN.kind(), ErrorKind::Syntax);
        assert_eq!(ErrorCode::TRAILING_TOKEN.kind(), ErrorKind::Syntax);
        assert_eq!(ErrorCode::UNDEFINED_VARIABLE.kind(), ErrorKind::Name);
        assert_eq!(ErrorCode::DIVISION_BY_ZERO.kind(), ErrorKind::Arithmetic);
        assert_eq!(ErrorCode::NUMERIC_OVERFLOW.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::UNEXPECTED_END), "E201");
        assert_eq!(format!("{}", ErrorCode::DIVISION_BY_ZERO), "E400");
    }

    #[test]
    fn test_calc_error_creation() {
        let err = CalcError::new(
            ErrorCode::UNDEFINED_VARIABLE,
            "undefined variable 'x'",
            Span::new(0, 1),
        );
        assert_eq!(err.kind, ErrorKind::Name);
        assert_eq!(err.code, ErrorCode::UNDEFINED_VARIABLE);
    }

    #[test]
    fn test_calc_error_display() {
        let err = CalcError::new(
            ErrorCode::UNEXPECTED_CHARACTER,
            "unexpected character '$'",
            Span::new(2, 3),
        );
        assert_eq!(
            err.to_string(),
            "lexical error at col 3: unexpected character '$'"
        );
    }

    #[test]
    fn test_calc_error_json_serialization() {
        let err = CalcError::new(
            ErrorCode::DIVISION_BY_ZERO,
            "division by zero",
            Span::new(0, 3),
        );
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"kind\":\"arithmetic\""));
        assert!(json.contains("\"code\":400"));
        assert!(json.contains("\"message\":\"division by zero\""));

        let back: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
