//! minic-lex - Lexical Analyzer for the Mini Language
//!
//! This crate turns Mini source text into a sequence of classified tokens.
//! The scanner is a hand-written finite-state machine with one character of
//! lookahead and a one-character back-off.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::{tokenize, TokenKind};
//!
//! let tokens: Vec<_> = tokenize("if(x)").collect::<Result<_, _>>().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Keyword, TokenKind::LParen, TokenKind::Identifier, TokenKind::RParen]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword set
//! - [`lexer`] - The state machine and the tokenize entry points
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes of the Mini alphabet
//! - [`stream`] - Buffered token stream for parsers
//! - [`error`] - Lexer and stream errors
//!
//! # Token Categories
//!
//! - **Numbers**: maximal runs of ASCII digits, kept verbatim (`007`)
//! - **Identifiers**: a letter followed by letters or digits (`b3`)
//! - **Keywords**: `function`, `return`, `if`, `var`
//! - **Punctuation**: `=`, `+`, `;`, `(`, `)`
//!
//! Whitespace separates tokens and produces none. A digit never starts an
//! identifier, so `123abc` is a number followed by an identifier.
//!
//! # Errors
//!
//! Any other character is reported as [`LexError::UnrecognizedCharacter`].
//! The character is consumed and scanning continues after it. Callers pick
//! a policy: [`tokenize_all`] stops at the first error,
//! [`tokenize_with_handler`] reports them all as diagnostics.

#![warn(missing_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use error::{LexError, StreamError};
pub use lexer::{tokenize, tokenize_all, tokenize_with_handler, Lexer, ScanState, Step};
pub use stream::TokenStream;
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};
