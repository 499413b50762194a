//! Error types for lexing and token-stream matching.

use minic_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

use crate::token::TokenKind;

/// An error produced while scanning source text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not part of the Mini alphabet.
    ///
    /// The character is consumed; scanning resumes right after it.
    #[error("unrecognized character {ch:?} at offset {offset} (line {line}, column {column})")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
    },
}

impl LexError {
    /// Returns the source span covered by the error.
    pub fn span(&self) -> Span {
        match *self {
            LexError::UnrecognizedCharacter {
                ch,
                offset,
                line,
                column,
            } => Span::new(offset, offset + ch.len_utf8(), line, column),
        }
    }

    /// Converts the error into a user-facing diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::tokenize;
    /// use minic_util::DiagnosticCode;
    ///
    /// let err = tokenize("a # b").find_map(Result::err).unwrap();
    /// let diag = err.to_diagnostic();
    /// assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
    /// assert_eq!(diag.message, "unrecognized character '#'");
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        match *self {
            LexError::UnrecognizedCharacter { ch, .. } => {
                let mut builder =
                    DiagnosticBuilder::error(format!("unrecognized character {ch:?}"))
                        .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                        .span(self.span());
                if !ch.is_ascii() {
                    builder = builder.note(format!(
                        "{ch:?} is U+{:04X}; only ASCII letters, digits and whitespace are accepted",
                        u32::from(ch)
                    ));
                }
                builder
                    .help("Mini accepts digits, letters, whitespace and `= + ; ( )`")
                    .build()
            },
        }
    }
}

/// An error produced when a [`TokenStream`](crate::TokenStream) does not
/// hold the expected token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The next token has a different kind.
    #[error("expected {expected}, found {found} at offset {offset}")]
    UnexpectedToken {
        /// The kind that was asked for.
        expected: TokenKind,
        /// The kind that was found.
        found: TokenKind,
        /// Byte offset of the token that was found.
        offset: usize,
    },

    /// The stream ran out of tokens.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// The kind that was asked for.
        expected: TokenKind,
    },
}
