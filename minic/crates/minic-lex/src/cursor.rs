//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the scan
//! position while the lexer reads characters one at a time. It handles
//! UTF-8 encoding correctly and tracks line/column information for error
//! reporting.
//!
//! The cursor never mutates the source. Reading past the last character
//! yields the end-of-input sentinel (`None`) and moves the position one
//! past the end, so that the lexer can treat end of input like any other
//! non-matching lookahead character and [`Cursor::unread`] it.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use minic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.bump(), Some('a'));
/// assert_eq!(cursor.bump(), Some('b'));
/// assert_eq!(cursor.bump(), None);
/// assert_eq!(cursor.position(), 3);
///
/// cursor.unread();
/// assert_eq!(cursor.position(), 2);
/// assert!(cursor.is_at_end());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source. May be `source.len() + 1`
    /// right after the end-of-input sentinel was read.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// State before the most recent [`Cursor::bump`].
    previous: CursorSnapshot,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        let start = CursorSnapshot {
            position: 0,
            line: 1,
            column: 1,
        };
        Self {
            source,
            position: start.position,
            line: start.line,
            column: start.column,
            previous: start,
        }
    }

    /// Returns the character at the cursor position without consuming it.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek(), Some('x'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Reads the character at the cursor position and advances past it.
    ///
    /// At end of input this returns `None` and moves the position to one
    /// past the end of the source. Line and column tracking follow the
    /// characters read; a `'\n'` starts a new line.
    pub fn bump(&mut self) -> Option<char> {
        self.previous = self.snapshot();

        let Some(c) = self.peek() else {
            self.position = self.source.len() + 1;
            return None;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Returns the most recently read character to the unconsumed input.
    ///
    /// Only one character of backoff is kept: calling `unread` twice in a
    /// row leaves the cursor where the first call put it.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("12+");
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!(cursor.bump(), Some('+'));
    /// cursor.unread();
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(cursor.peek(), Some('+'));
    /// ```
    #[inline]
    pub fn unread(&mut self) {
        self.restore(self.previous);
    }

    /// Returns true if the cursor is at (or past) the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// for _ in 0..3 {
    ///     cursor.bump();
    /// }
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        let end = self.position.min(self.source.len());
        &self.source[start.min(end)..end]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
