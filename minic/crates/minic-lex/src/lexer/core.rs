//! Core lexer implementation.
//!
//! The lexer is an explicit finite-state machine. Each call to
//! [`Lexer::next_step`] resets the machine to [`ScanState::Start`], feeds it
//! one character at a time until it reaches [`ScanState::Done`], and returns
//! the outcome of that pass as a [`Step`].

use minic_util::Span;
use tracing::{debug, trace};

use crate::chars::{is_blank, is_digit, is_ident_char, punctuation_kind};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// The states of the scanning machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Nothing read yet for the current attempt.
    Start,
    /// Inside a run of digits.
    InNumber,
    /// Inside a run of identifier characters.
    InIdentifier,
    /// The current attempt is finished.
    Done,
}

/// The outcome of one pass of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// A token was recognized.
    Token(Token<'a>),
    /// Whitespace was consumed; nothing to report.
    Skip,
    /// A character outside the alphabet was consumed.
    Error(LexError),
    /// The source is exhausted.
    EndOfInput,
}

/// What a state handler asks the driver loop to do next.
#[derive(Debug)]
pub(super) enum Transition<'a> {
    /// Keep scanning in the given state.
    Goto(ScanState),
    /// Finish the attempt with this outcome.
    Finish(Step<'a>),
}

/// Lexer for the Mini language.
///
/// The lexer borrows the source immutably and hands out tokens lazily, in
/// source order. It holds no other resources, so dropping it at any point
/// is the way to stop scanning.
///
/// # Example
///
/// ```
/// use minic_lex::{Lexer, ScanState, Step, TokenKind};
///
/// let mut lexer = Lexer::new("x ;");
/// match lexer.next_step() {
///     Step::Token(token) => assert_eq!(token.kind, TokenKind::Identifier),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(lexer.state(), ScanState::Done);
/// assert_eq!(lexer.next_step(), Step::Skip);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor; its position is the scan position.
    cursor: Cursor<'a>,

    /// Current machine state.
    state: ScanState,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: ScanState::Start,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Runs the machine for one token attempt.
    ///
    /// Returns [`Step::EndOfInput`] once the source is exhausted; calling it
    /// again after that keeps returning `EndOfInput`.
    pub fn next_step(&mut self) -> Step<'a> {
        if self.cursor.is_at_end() {
            return Step::EndOfInput;
        }

        self.state = ScanState::Start;
        let mut outcome = Step::EndOfInput;

        while self.state != ScanState::Done {
            let c = self.cursor.bump();
            let transition = match self.state {
                ScanState::Start => self.scan_start(c),
                ScanState::InNumber => self.scan_number(c),
                ScanState::InIdentifier => self.scan_identifier(c),
                ScanState::Done => break,
            };

            match transition {
                Transition::Goto(next) => self.state = next,
                Transition::Finish(step) => {
                    outcome = step;
                    self.state = ScanState::Done;
                },
            }
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
        outcome
    }

    /// Returns the current machine state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns the byte offset where the next token attempt starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the current scan position (byte offset).
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Handles the first character of an attempt.
    fn scan_start(&mut self, c: Option<char>) -> Transition<'a> {
        let Some(c) = c else {
            return Transition::Finish(Step::EndOfInput);
        };

        if is_digit(c) {
            Transition::Goto(ScanState::InNumber)
        } else if is_ident_char(c) {
            Transition::Goto(ScanState::InIdentifier)
        } else if is_blank(c) {
            Transition::Finish(Step::Skip)
        } else if let Some(kind) = punctuation_kind(c) {
            Transition::Finish(Step::Token(self.make_token(kind)))
        } else {
            Transition::Finish(Step::Error(self.unrecognized(c)))
        }
    }

    /// Builds a token over `[token_start, scan_pos)`.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        let text = self.cursor.slice_from(self.token_start);
        let span = Span::new(
            self.token_start,
            self.token_start + text.len(),
            self.token_start_line,
            self.token_start_column,
        );
        trace!(kind = %kind, text, offset = span.start, "token");
        Token::new(kind, text, span)
    }

    /// Returns the text of the run scanned so far.
    pub(super) fn current_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Gives the lookahead character back to the cursor.
    pub(super) fn unread(&mut self) {
        self.cursor.unread();
    }

    fn unrecognized(&self, ch: char) -> LexError {
        debug!(
            ch = %ch.escape_debug(),
            offset = self.token_start,
            line = self.token_start_line,
            column = self.token_start_column,
            "unrecognized character"
        );
        LexError::UnrecognizedCharacter {
            ch,
            offset: self.token_start,
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_step() {
                Step::Token(token) => return Some(Ok(token)),
                Step::Error(err) => return Some(Err(err)),
                Step::Skip => continue,
                Step::EndOfInput => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
