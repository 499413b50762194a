//! Lexer module.
//!
//! This module contains the state machine and the tokenize entry points.
//!
//! - `core` - Lexer struct, machine states and the driver loop
//! - `number` - the `InNumber` state
//! - `identifier` - the `InIdentifier` state and keyword reclassification

mod core;
mod identifier;
mod number;

pub use self::core::{Lexer, ScanState, Step};

use minic_util::Handler;
use tracing::debug;

use crate::error::LexError;
use crate::token::Token;

/// Returns a lazy iterator over the tokens of `source`.
///
/// Every unrecognized character yields one `Err` item and scanning resumes
/// right after it, so the iterator always terminates.
///
/// # Example
///
/// ```
/// use minic_lex::tokenize;
///
/// let texts: Vec<_> = tokenize("return a ;")
///     .map(|t| t.unwrap().text)
///     .collect();
/// assert_eq!(texts, ["return", "a", ";"]);
/// ```
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenizes all of `source`, stopping at the first error.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
///
/// # Example
///
/// ```
/// use minic_lex::{tokenize_all, LexError};
///
/// assert_eq!(tokenize_all("a = 1 ;").unwrap().len(), 4);
/// assert!(matches!(
///     tokenize_all("a $ b"),
///     Err(LexError::UnrecognizedCharacter { ch: '$', offset: 2, .. })
/// ));
/// ```
pub fn tokenize_all(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize(source).collect()
}

/// Tokenizes all of `source`, reporting every error to `handler`.
///
/// Each unrecognized character becomes one `E1001` diagnostic. The tokens
/// that were recognized are returned in source order.
///
/// # Example
///
/// ```
/// use minic_lex::tokenize_with_handler;
/// use minic_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = tokenize_with_handler("a @ b # ;", &handler);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(handler.error_count(), 2);
/// ```
pub fn tokenize_with_handler<'a>(source: &'a str, handler: &Handler) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut errors = 0usize;

    for item in tokenize(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => {
                errors += 1;
                handler.emit_diagnostic(err.to_diagnostic());
            },
        }
    }

    debug!(tokens = tokens.len(), errors, "tokenized source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_util::DiagnosticCode;

    #[test]
    fn test_tokenize_all_stops_at_first_error() {
        let err = tokenize_all("a # b @").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '#',
                offset: 2,
                line: 1,
                column: 3,
            }
        );
    }

    #[test]
    fn test_tokenize_continues_after_error() {
        let items: Vec<_> = tokenize("a#b").collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
        assert_eq!(items[2].as_ref().map(|t| t.text), Ok("b"));
    }

    #[test]
    fn test_tokenize_with_handler_reports_each_error() {
        let handler = Handler::new();
        let tokens = tokenize_with_handler("x = 1 ## 2 ;", &handler);
        assert_eq!(tokens.len(), 5);

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)));
        assert_eq!(diagnostics[0].span.start, 6);
        assert_eq!(diagnostics[1].span.start, 7);
    }

    #[test]
    fn test_tokenize_with_handler_clean_input() {
        let handler = Handler::new();
        let tokens = tokenize_with_handler("var b3 = 2 ;", &handler);
        assert_eq!(tokens.len(), 5);
        assert!(!handler.has_errors());
    }
}
