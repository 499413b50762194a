//! Common types and utilities for minit commands.

use std::io::{IsTerminal, Read};
use std::path::Path;

use minic_util::{ColorConfig, Diagnostic, SourceFile};

use crate::error::{MinitError, Result};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Read a Mini source file, or standard input when `path` is `-`.
///
/// # Errors
/// Returns [`MinitError::FileOperation`] naming the path when it cannot be
/// read.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| MinitError::FileOperation(format!("{}: {}", STDIN_NAME, e)))?;
        return Ok(SourceFile::new(STDIN_NAME, content));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| MinitError::FileOperation(format!("{}: {}", path.display(), e)))?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Decide whether diagnostics are colored.
///
/// `--no-color` always wins. Otherwise `auto` is resolved against whether
/// standard error is a terminal, so the result is never `Auto`.
pub fn resolve_color(configured: ColorConfig, no_color: bool) -> ColorConfig {
    if no_color {
        return ColorConfig::Never;
    }
    match configured {
        ColorConfig::Auto if std::io::stderr().is_terminal() => ColorConfig::Always,
        ColorConfig::Auto => ColorConfig::Never,
        other => other,
    }
}

/// Render diagnostics for `file` to standard error.
pub fn report(diagnostics: &[Diagnostic], file: &SourceFile, color: ColorConfig) {
    for diagnostic in diagnostics {
        eprint!("{}", diagnostic.render(file, color));
    }
}
