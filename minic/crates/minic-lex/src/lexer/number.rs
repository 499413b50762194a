//! Number literal lexing.
//!
//! Mini numbers are plain runs of ASCII digits. The text is kept verbatim,
//! so `007` stays `007`; no value is computed here.

use super::core::{ScanState, Step, Transition};
use crate::chars::is_digit;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles one character while in [`ScanState::InNumber`].
    ///
    /// The first non-digit (or end of input) ends the run. It is given back
    /// to the cursor so the next attempt starts on it.
    pub(super) fn scan_number(&mut self, c: Option<char>) -> Transition<'a> {
        match c {
            Some(c) if is_digit(c) => Transition::Goto(ScanState::InNumber),
            _ => {
                self.unread();
                Transition::Finish(Step::Token(self.make_token(TokenKind::Number)))
            },
        }
    }
}
