//! AST node types for calc expressions.
//!
//! Every node carries a [`Span`] for error reporting. Children are boxed
//! and exclusively owned by their parent, so a parsed expression is always
//! a strict tree with exactly one root.

use crate::{Number, Span};
use std::fmt;

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// An expression node. Uses `Box` for recursive variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if evaluating this tree may bind a variable.
    ///
    /// Only the root can be an assignment, but the check walks the whole tree.
    pub fn has_assignment(&self) -> bool {
        match &self.kind {
            ExprKind::NumberLit(_) | ExprKind::VariableRef(_) => false,
            ExprKind::Assignment { .. } => true,
            ExprKind::Binary { left, right, .. } => {
                left.has_assignment() || right.has_assignment()
            }
        }
    }
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `42`, `3.14`
    NumberLit(Number),
    /// `x`
    VariableRef(String),
    /// `name = value`
    Assignment { name: Ident, value: Box<Expr> },
    /// `a + b`, `a * b`, ...
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
}

/// Binary operators (in precedence order, lowest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prints the tree in prefix form: `3+4*2` becomes `(+ 3 (* 4 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::NumberLit(n) => write!(f, "{n}"),
            ExprKind::VariableRef(name) => f.write_str(name),
            ExprKind::Assignment { name, value } => write!(f, "(= {} {value})", name.name),
            ExprKind::Binary { left, op, right } => write!(f, "({op} {left} {right})"),
        }
    }
}
