//! Expression parsing with operator precedence.
//!
//! Grammar (lowest → highest precedence):
//! ```text
//! statement := Identifier "=" expr
//!            | Identifier            (alone: a variable reference)
//!            | expr
//! expr      := term { ("+" | "-") term }
//! term      := factor { ("*" | "/") factor }
//! factor    := Number | Identifier | "(" expr ")"
//! ```
//! Binary operators are left-associative. One token of lookahead past an
//! identifier decides between assignment and expression, so no backtracking
//! is needed.

use calc_lexer::token::TokenKind;
use calc_types::ast::*;
use calc_types::{CalcError, ErrorCode, Result};

use crate::parser::Parser;

impl Parser {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse the top-level rule: an assignment or an expression.
    pub(crate) fn parse_statement(&mut self) -> Result<Expr> {
        if let Some(TokenKind::Identifier(name)) = self.peek_kind() {
            match self.look_ahead(1) {
                Some(TokenKind::Assign) => return self.parse_assignment(),
                None => {
                    let name = name.clone();
                    let span = self.advance().map(|t| t.span).unwrap_or_default();
                    return Ok(Expr::new(ExprKind::VariableRef(name), span));
                }
                // `x + 1`, `x * y`, ...: an ordinary expression
                Some(_) => {}
            }
        }
        self.parse_expression()
    }

    /// `Identifier "=" expr`
    fn parse_assignment(&mut self) -> Result<Expr> {
        let name = match self.advance() {
            Some(token) => match token.kind {
                TokenKind::Identifier(name) => Ident::new(name, token.span),
                other => {
                    return Err(CalcError::new(
                        ErrorCode::UNEXPECTED_TOKEN,
                        format!("expected identifier, got '{other}'"),
                        token.span,
                    ))
                }
            },
            None => return Err(self.error_expected("identifier")),
        };
        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expression()?;
        let span = name.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assignment {
                name,
                value: Box::new(value),
            },
            span,
        ))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `expr := term { ("+" | "-") term }`
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `term := factor { ("*" | "/") factor }`
    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary Expressions
    // ══════════════════════════════════════════════════════════════════════════

    /// `factor := Number | Identifier | "(" expr ")"`
    fn parse_factor(&mut self) -> Result<Expr> {
        let (kind, span) = match self.peek() {
            Some(token) => (token.kind.clone(), token.span),
            None => return Err(self.error_expected("expression")),
        };
        match kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::NumberLit(n), span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::VariableRef(name), span))
            }
            TokenKind::LParen => self.parse_group(),
            _ => Err(self.error_expected("expression")),
        }
    }

    /// `"(" expr ")"` — grouping adds no node of its own.
    fn parse_group(&mut self) -> Result<Expr> {
        let open = self.expect(&TokenKind::LParen)?;
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(CalcError::new(
                ErrorCode::NESTING_LIMIT_EXCEEDED,
                format!("maximum nesting depth is {}", self.max_depth),
                open.span,
            ));
        }
        let mut inner = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        self.depth -= 1;
        inner.span = open.span.merge(self.previous_span());
        Ok(inner)
    }
}

fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}
