//! Token definitions for the Mini language.
//!
//! A [`Token`] borrows its text straight from the source, so a token stream
//! never allocates per token. Whitespace never produces a token.

use std::fmt;

use minic_util::Span;
use serde::Serialize;

/// The reserved words of Mini.
///
/// Keyword matching is exact and case-sensitive: `Var` is an identifier.
pub const KEYWORDS: [&str; 4] = ["function", "return", "if", "var"];

/// Returns true if `text` is one of the [`KEYWORDS`].
///
/// # Example
///
/// ```
/// use minic_lex::is_keyword;
///
/// assert!(is_keyword("return"));
/// assert!(!is_keyword("returns"));
/// assert!(!is_keyword("If"));
/// ```
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// The classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A maximal run of ASCII digits, e.g. `042`.
    Number,
    /// A letter followed by letters or digits that is not a keyword.
    Identifier,
    /// One of `function`, `return`, `if`, `var`.
    Keyword,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `+`
    Plus,
    /// `=`
    Assign,
}

impl TokenKind {
    /// Classifies a complete identifier-shaped run.
    #[inline]
    pub fn for_word(text: &str) -> Self {
        if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    /// Returns the name of this kind as printed in token listings.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Plus => "Plus",
            TokenKind::Assign => "Assign",
        }
    }

    /// Returns true for single-character punctuation kinds.
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Semicolon
                | TokenKind::Plus
                | TokenKind::Assign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the source text.
///
/// # Example
///
/// ```
/// use minic_lex::{tokenize_all, TokenKind};
///
/// let tokens = tokenize_all("var b3").unwrap();
/// assert_eq!(tokens[1].kind, TokenKind::Identifier);
/// assert_eq!(tokens[1].text, "b3");
/// assert_eq!(tokens[1].to_string(), "Identifier(\"b3\")");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// The exact source text, never normalized.
    pub text: &'a str,
    /// Where the token sits in the source.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if this token is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
