//! Source files and line lookup.
//!
//! This module provides the [`SourceFile`] type, which owns a source text
//! and precomputes its line starts so that byte offsets can be turned into
//! line/column pairs and source lines for diagnostics.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use minic_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mini", "var a = 1 ;");
/// assert_eq!(file.name(), "main.mini");
/// assert_eq!(file.content(), "var a = 1 ;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path, used when rendering locations
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mini", "a ;\nb ;\nc ;");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. The column counts characters, not
    /// bytes, from the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mini", "var b3 = 2 ;\nreturn b3 ;");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// assert_eq!(file.offset_to_line_col(20), (2, 8));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mini", "a ;\r\nb ;\n");
    /// assert_eq!(file.line_at(1), Some("a ;"));
    /// assert_eq!(file.line_at(2), Some("b ;"));
    /// assert_eq!(file.line_at(9), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Errors
    ///
    /// Returns [`SourceMapError`] if the range is inverted, runs past the
    /// end of the content, or splits a UTF-8 character.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mini", "var b3 = 2 ;");
    /// assert_eq!(file.extract_range(4, 6).unwrap(), "b3");
    /// assert!(file.extract_range(6, 4).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}
