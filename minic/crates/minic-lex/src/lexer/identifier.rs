//! Identifier and keyword lexing.

use super::core::{ScanState, Step, Transition};
use crate::chars::is_ident_char;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles one character while in [`ScanState::InIdentifier`].
    ///
    /// The keyword check runs only once the whole run is known, so `iff`
    /// and `var1` stay identifiers.
    pub(super) fn scan_identifier(&mut self, c: Option<char>) -> Transition<'a> {
        match c {
            Some(c) if is_ident_char(c) => Transition::Goto(ScanState::InIdentifier),
            _ => {
                self.unread();
                let kind = TokenKind::for_word(self.current_text());
                Transition::Finish(Step::Token(self.make_token(kind)))
            },
        }
    }
}
