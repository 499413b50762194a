//! minic-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Mini toolchain: source locations and
//! the diagnostics used to report problems against them.
//!
//! # Module Structure
//!
//! - [`span`] - Byte/line/column spans and the [`SourceFile`] line index
//! - [`diagnostic`] - Severity levels, diagnostics, builders and the [`Handler`]
//! - [`error`] - Error types for the utilities in this crate
//!
//! # Example
//!
//! ```
//! use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(6, 7, 1, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
