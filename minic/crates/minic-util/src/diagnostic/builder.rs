//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and the [`SourceSnippet`] shown under a
//! rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// highlighted column range and an optional label.
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("a = 1 # 2 ;", 1, 7, 8, Some("here"));
/// assert_eq!(snippet.format(), "  1 | a = 1 # 2 ;\n    |       ^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based, exclusive)
    /// * `label` - Optional label to display under the highlighted range
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for `span` by looking its line up in `file`
    ///
    /// Returns `None` when the span's line does not exist in the file.
    /// The highlight is clipped to the end of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::SourceSnippet;
    /// use minic_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.mini", "var b3 = 2 ;");
    /// let snippet = SourceSnippet::from_span(&file, Span::new(4, 6, 1, 5)).unwrap();
    /// assert_eq!(snippet.line, "var b3 = 2 ;");
    /// assert_eq!((snippet.start_column, snippet.end_column), (5, 7));
    /// ```
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let (line_number, start_column) = file.offset_to_line_col(span.start);
        let line = file.line_at(line_number)?;
        let (end_line, end_column) = file.offset_to_line_col(span.end);
        let end_column = if end_line == line_number {
            end_column
        } else {
            line.chars().count() + 1
        };
        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: end_column.max(start_column + 1),
            label: None,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number and a second line
    /// with carets (`^`) under the highlighted range.
    pub fn format(&self) -> String {
        let width = self.gutter_width();
        let mut result = format!(
            "{:>width$} | {}\n{:>width$} | ",
            self.line_number,
            self.line,
            "",
            width = width
        );

        // Tabs in the source line are kept so the carets stay aligned.
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.extend(
            self.line
                .chars()
                .chain(std::iter::repeat(' '))
                .take(underline_start)
                .map(|c| if c == '\t' { '\t' } else { ' ' }),
        );
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }

    /// Width of the line-number gutter
    pub(crate) fn gutter_width(&self) -> usize {
        self.line_number.to_string().len().max(3)
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use minic_util::span::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unrecognized character '#'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(6, 7, 1, 7))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.helps, vec!["remove the character"]);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: Vec::new(),
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong").emit(&handler);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
