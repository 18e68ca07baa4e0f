//! calc lexer: converts expression text into a token stream.

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenCategory, TokenKind};
