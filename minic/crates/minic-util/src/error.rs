//! Core error types for minic-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset of the range
        start: usize,
        /// End offset of the range
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Start offset of the span
        span_start: usize,
        /// End offset of the span
        span_end: usize,
    },

    /// Range does not fall on character boundaries
    #[error("Span {start}..{end} does not fall on UTF-8 character boundaries")]
    NotCharBoundary {
        /// Start offset of the range
        start: usize,
        /// End offset of the range
        end: usize,
    },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
