//! Core calc lexer — converts expression text to a token stream.
//!
//! Features:
//! - Integer and decimal number literals (`42`, `3.14`)
//! - ASCII identifiers (`x`, `_tmp`, `rate2`)
//! - `=` and the operators `+ - * / ( )`
//! - Spaces and tabs skipped; every other character is a lexical error
//! - Fail-fast: scanning stops at the first error

use calc_types::{CalcError, ErrorCode, Number, Result, Span};

use crate::token::{Token, TokenKind};

/// The calc lexer.
///
/// A single forward pass over the source. As an [`Iterator`] it yields
/// tokens lazily; after the first error it yields nothing more.
pub struct Lexer<'src> {
    /// The full source text.
    text: &'src str,
    /// The source text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    /// Set once an error has been yielded.
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over the given expression text.
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            source: text.as_bytes(),
            pos: 0,
            failed: false,
        }
    }

    /// Lex the entire expression into a token vector.
    pub fn lex(self) -> Result<Vec<Token>> {
        self.collect()
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Skip spaces and tabs. Newlines are not whitespace here.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek() {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token. Returns `None` at end of input.
    fn scan(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();

        let start = self.pos;
        let ch = self.advance()?;

        let token = match ch {
            b'0'..=b'9' => return Some(self.scan_number(start)),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_identifier(start),
            b'=' => Token::new(TokenKind::Assign, self.span_from(start)),
            _ => match TokenKind::from_operator(ch) {
                Some(kind) => Token::new(kind, self.span_from(start)),
                None => return Some(Err(self.unexpected_character(start))),
            },
        };
        Some(Ok(token))
    }

    fn scan_number(&mut self, start: usize) -> Result<Token> {
        // We already consumed the first digit
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        // A `.` only belongs to the literal when a digit follows it
        let mut is_float = false;
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            is_float = true;
            self.advance(); // consume '.'
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        let span = self.span_from(start);
        let text = &self.text[start..self.pos];
        let value = if is_float {
            text.parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(Number::Float)
        } else {
            text.parse::<i64>().ok().map(Number::Int)
        };

        match value {
            Some(n) => Ok(Token::new(TokenKind::Number(n), span)),
            None => Err(CalcError::new(
                ErrorCode::NUMBER_OUT_OF_RANGE,
                format!("number literal '{text}' is out of range"),
                span,
            )),
        }
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        // First character was already consumed (letter or `_`)
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.text[start..self.pos];
        Token::new(TokenKind::Identifier(text.to_string()), self.span_from(start))
    }

    /// Build the error for the character starting at `start`, covering all
    /// of its UTF-8 bytes.
    fn unexpected_character(&mut self, start: usize) -> CalcError {
        let ch = self.text[start..].chars().next().unwrap_or('\u{fffd}');
        self.pos = start + ch.len_utf8();
        CalcError::new(
            ErrorCode::UNEXPECTED_CHARACTER,
            format!("unexpected character {ch:?}"),
            self.span_from(start),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.scan();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize `text`, failing at the first lexical error.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Lexer::new(text).lex()
}
