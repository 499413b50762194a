//! A buffered, rewindable view over a token sequence.
//!
//! Parsers that need more than one token of lookahead, or that try one
//! alternative and fall back to another, work on a [`TokenStream`] instead
//! of the lazy [`Lexer`](crate::Lexer).

use crate::error::{LexError, StreamError};
use crate::lexer::tokenize_all;
use crate::token::{Token, TokenKind};

/// Buffered tokens with a read position and a stack of saved positions.
///
/// # Example
///
/// ```
/// use minic_lex::{TokenKind, TokenStream};
///
/// let mut stream = TokenStream::from_source("var a = 1 ;").unwrap();
/// stream.mark();
/// assert!(stream.try_match(TokenKind::Keyword).is_ok());
/// assert!(stream.try_match(TokenKind::Number).is_err());
/// stream.back_track();
/// assert_eq!(stream.position(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    marks: Vec<usize>,
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over already scanned tokens.
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            marks: Vec::new(),
            cursor: 0,
        }
    }

    /// Scans `source` and buffers the result.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] in the source.
    pub fn from_source(source: &'a str) -> Result<Self, LexError> {
        tokenize_all(source).map(Self::new)
    }

    /// Returns the kind of the token `dist` positions ahead without
    /// consuming anything. `look_ahead(0)` is the next token.
    pub fn look_ahead(&self, dist: usize) -> Option<TokenKind> {
        self.cursor
            .checked_add(dist)
            .and_then(|index| self.tokens.get(index))
            .map(|t| t.kind)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.cursor)
    }

    /// Saves the current position.
    pub fn mark(&mut self) {
        self.marks.push(self.cursor);
    }

    /// Returns to the most recently saved position.
    ///
    /// With no saved position the stream rewinds to its first token.
    pub fn back_track(&mut self) {
        self.cursor = self.marks.pop().unwrap_or(0);
    }

    /// Consumes the next token if it has the `expected` kind.
    ///
    /// # Errors
    ///
    /// On a mismatch nothing is consumed and the error names what was
    /// found instead.
    pub fn try_match(&mut self, expected: TokenKind) -> Result<Token<'a>, StreamError> {
        match self.peek() {
            Some(token) if token.kind == expected => {
                let token = *token;
                self.cursor += 1;
                Ok(token)
            },
            Some(token) => Err(StreamError::UnexpectedToken {
                expected,
                found: token.kind,
                offset: token.span.start,
            }),
            None => Err(StreamError::UnexpectedEnd { expected }),
        }
    }

    /// Consumes a sequence of tokens with the given kinds, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first mismatch. Tokens matched before it stay
    /// consumed; the failing token does not. Use [`mark`](Self::mark) and
    /// [`back_track`](Self::back_track) to undo the whole sequence.
    pub fn try_match_many(
        &mut self,
        expected: &[TokenKind],
    ) -> Result<Vec<Token<'a>>, StreamError> {
        expected.iter().map(|&kind| self.try_match(kind)).collect()
    }

    /// Returns true once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns the index of the next token.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the tokens not yet consumed.
    pub fn remaining(&self) -> &[Token<'a>] {
        &self.tokens[self.cursor.min(self.tokens.len())..]
    }

    /// Returns the total number of buffered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }
}
