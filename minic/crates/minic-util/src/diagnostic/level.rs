//! Diagnostic severity levels and color selection.
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::{ColorConfig, Level};
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

use std::fmt;

use serde::Deserialize;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the input is not valid Mini
    Error,
    /// Suspicious input that is still accepted
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// Returns the ANSI color code for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.color_code(), "31");
    /// ```
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color output configuration
///
/// Deserializes from the lowercase names `"auto"`, `"always"` and
/// `"never"`, so it can be used directly in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorConfig {
    /// Use colors when writing to a terminal
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    ///
    /// # Arguments
    ///
    /// * `is_tty` - Whether the output is a terminal
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::ColorConfig;
    ///
    /// assert!(ColorConfig::Always.use_color(false));
    /// assert!(ColorConfig::Auto.use_color(true));
    /// assert!(!ColorConfig::Auto.use_color(false));
    /// ```
    pub const fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
