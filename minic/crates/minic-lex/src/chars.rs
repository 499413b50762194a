//! Character classification for the Mini alphabet.
//!
//! Every predicate here is ASCII-only. A character outside ASCII never
//! starts or continues a token and is reported as unrecognized.

use crate::token::TokenKind;

/// Returns true for `0`-`9`.
#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for characters that may continue an identifier.
///
/// The class is `[A-Za-z0-9]`. Digits are included so that `b3` is a
/// single identifier, but the lexer checks [`is_digit`] first, which means
/// a digit never starts one.
#[inline]
pub const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns true for whitespace that separates tokens.
///
/// Space, tab, line feed, vertical tab, form feed and carriage return.
// ASCII only: U+00A0 and other Unicode spaces are unrecognized characters.
#[inline]
pub const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Maps a single-character punctuation to its token kind.
///
/// # Example
///
/// ```
/// use minic_lex::chars::punctuation_kind;
/// use minic_lex::TokenKind;
///
/// assert_eq!(punctuation_kind('('), Some(TokenKind::LParen));
/// assert_eq!(punctuation_kind('-'), None);
/// ```
#[inline]
pub const fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        ';' => Some(TokenKind::Semicolon),
        '+' => Some(TokenKind::Plus),
        '=' => Some(TokenKind::Assign),
        _ => None,
    }
}
