//! Check command implementation.
//!
//! Lexes every given file, reports all diagnostics and prints one summary
//! line per file.

use std::path::PathBuf;

use minic_lex::tokenize_with_handler;
use minic_util::{ColorConfig, Handler};
use tracing::debug;

use crate::commands::common::{read_source, report};
use crate::error::{MinitError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check.
    pub inputs: Vec<PathBuf>,
    /// Diagnostic coloring, already resolved.
    pub color: ColorConfig,
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Display name of the file.
    pub name: String,
    /// Number of tokens recognized.
    pub tokens: usize,
    /// Number of lexical errors.
    pub errors: usize,
}

impl FileReport {
    /// One-line summary for standard output.
    pub fn summary(&self) -> String {
        if self.errors == 0 {
            format!("{}: ok ({} tokens)", self.name, self.tokens)
        } else {
            format!("{}: {} error(s)", self.name, self.errors)
        }
    }
}

/// Run the check command.
///
/// # Errors
/// Unreadable files abort the run. Otherwise returns [`MinitError::Lex`]
/// with the total error count if any file had errors.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut total_errors = 0;

    for input in &args.inputs {
        let file_report = check_file(input, args.color)?;
        println!("{}", file_report.summary());
        total_errors += file_report.errors;
    }

    debug!(files = args.inputs.len(), errors = total_errors, "check finished");
    if total_errors == 0 {
        Ok(())
    } else {
        Err(MinitError::Lex(total_errors))
    }
}

fn check_file(input: &std::path::Path, color: ColorConfig) -> Result<FileReport> {
    let file = read_source(input)?;
    let handler = Handler::new();
    let tokens = tokenize_with_handler(file.content(), &handler);

    let diagnostics = handler.take_diagnostics();
    report(&diagnostics, &file, color);
    debug!(
        file = file.name(),
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "checked file"
    );

    Ok(FileReport {
        name: file.name().to_string(),
        tokens: tokens.len(),
        errors: diagnostics.len(),
    })
}
