//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets for slicing and line/column information for humans.
//!
//! # Examples
//!
//! ```
//! use minic_util::span::Span;
//!
//! // Bytes 4..6 of the input, starting at line 1, column 5
//! let span = Span::new(4, 6, 1, 5);
//! assert_eq!(span.len(), 2);
//! ```

mod source_map;

pub use source_map::SourceFile;

use serde::Serialize;

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in the source
/// together with the 1-based line and column of its first character.
///
/// # Examples
///
/// ```
/// use minic_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// let lhs = Span::new(0, 1, 1, 1);
    /// let rhs = Span::new(4, 6, 1, 5);
    /// let merged = lhs.merge(rhs);
    /// assert_eq!((merged.start, merged.end), (0, 6));
    /// assert_eq!((merged.line, merged.column), (1, 1));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}
