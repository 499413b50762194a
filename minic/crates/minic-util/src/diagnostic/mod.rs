//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics (errors, warnings, notes and help messages).
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::{ColorConfig, DiagnosticBuilder, DiagnosticCode};
//! use minic_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new("input.mini", "a = 1 # 2 ;");
//! let diag = DiagnosticBuilder::error("unrecognized character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(6, 7, 1, 7))
//!     .build();
//!
//! let text = diag.render(&file, ColorConfig::Never);
//! assert!(text.starts_with("error[E1001]: unrecognized character '#'"));
//! assert!(text.contains(" --> input.mini:1:7"));
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::{ColorConfig, Level};

use std::cell::RefCell;
use std::fmt::Write as _;

use crate::span::{SourceFile, Span};

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{Diagnostic, Level};
/// use minic_util::span::Span;
///
/// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Render the diagnostic against its source file
    ///
    /// The output has a header line (`error[E1001]: message`), a location
    /// line (`--> name:line:col`), the source snippets and any notes and
    /// help messages. When the diagnostic carries no snippet of its own, one
    /// is derived from its span. ANSI colors are only used when `color` is
    /// [`ColorConfig::Always`].
    pub fn render(&self, file: &SourceFile, color: ColorConfig) -> String {
        let use_color = color.use_color(false);
        let mut out = String::new();

        let header = match self.code {
            Some(code) => format!("{}[{}]", self.level, code),
            None => self.level.to_string(),
        };
        if use_color {
            let _ = write!(out, "\x1b[1;{}m{}\x1b[0m", self.level.color_code(), header);
        } else {
            out.push_str(&header);
        }
        let _ = writeln!(out, ": {}", self.message);

        let (line, column) = file.offset_to_line_col(self.span.start);
        let derived;
        let snippets: &[SourceSnippet] = if self.snippets.is_empty() {
            derived = SourceSnippet::from_span(file, self.span);
            derived.as_slice()
        } else {
            &self.snippets
        };
        let width = snippets
            .iter()
            .map(SourceSnippet::gutter_width)
            .max()
            .unwrap_or(3);

        let _ = writeln!(
            out,
            "{:>width$}--> {}:{}:{}",
            "",
            file.name(),
            line,
            column,
            width = width.saturating_sub(2)
        );
        for snippet in snippets {
            let _ = writeln!(out, "{:>width$} |", "", width = width);
            let _ = writeln!(out, "{}", snippet.format());
        }
        for note in &self.notes {
            let _ = writeln!(out, "{:>width$} = note: {}", "", note, width = width);
        }
        for help in &self.helps {
            let _ = writeln!(out, "{:>width$} = help: {}", "", help, width = width);
        }

        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a shared reference so that
/// several producers can report into the same sink.
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{Diagnostic, Handler};
/// use minic_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
