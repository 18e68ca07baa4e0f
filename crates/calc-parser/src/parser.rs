//! Core parser infrastructure: token cursor, error reporting, helpers.

use calc_lexer::token::{Token, TokenKind};
use calc_types::ast::Expr;
use calc_types::{CalcError, ErrorCode, Result, Span};

/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The calc parser.
///
/// Consumes the token stream produced by the lexer and builds a single
/// expression tree. Parsing stops at the first error.
pub struct Parser {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Current parenthesis nesting depth.
    pub(crate) depth: usize,
    /// Maximum parenthesis nesting depth.
    pub(crate) max_depth: usize,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with a custom parenthesis nesting limit.
    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Look ahead by `n` tokens from current position.
    pub(crate) fn look_ahead(&self, n: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + n).map(|t| &t.kind)
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_default()
    }

    /// Zero-width span just past the last token.
    pub(crate) fn end_span(&self) -> Span {
        Span::point(self.tokens.last().map(|t| t.span.end).unwrap_or(0))
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a specific token kind. Returns the token if matched.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<Token> {
        match self.peek() {
            Some(token) if token.kind == *expected => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error_expected(&format!("'{expected}'"))),
        }
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Build an "expected X, got Y" error at the current position.
    ///
    /// At end of input this is `UNEXPECTED_END`, otherwise `UNEXPECTED_TOKEN`.
    pub(crate) fn error_expected(&self, what: &str) -> CalcError {
        match self.peek() {
            Some(token) => CalcError::new(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected {what}, got '{}'", token.kind),
                token.span,
            ),
            None => CalcError::new(
                ErrorCode::UNEXPECTED_END,
                format!("expected {what}, got end of input"),
                self.end_span(),
            ),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole token stream into one expression tree.
    ///
    /// Any token left over after the expression is an error.
    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.parse_statement()?;
        if let Some(token) = self.peek() {
            return Err(CalcError::new(
                ErrorCode::TRAILING_TOKEN,
                format!("unexpected token '{}' after expression", token.kind),
                token.span,
            ));
        }
        Ok(expr)
    }
}

/// Parse a token stream with the default nesting limit.
pub fn parse(tokens: Vec<Token>) -> Result<Expr> {
    Parser::new(tokens).parse()
}
