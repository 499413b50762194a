//! Tokens command implementation.
//!
//! Lexes one source and prints its token listing to standard output.
//! Diagnostics go to standard error.

use std::io::Write;
use std::path::PathBuf;

use minic_lex::{tokenize_all, tokenize_with_handler, Token};
use minic_util::{ColorConfig, Handler};
use tracing::debug;

use crate::commands::common::{read_source, report};
use crate::config::OutputFormat;
use crate::error::{MinitError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Append positions to text listings.
    pub spans: bool,
    /// Stop at the first lexical error.
    pub fail_fast: bool,
    /// Diagnostic coloring, already resolved.
    pub color: ColorConfig,
}

/// Run the tokens command.
///
/// # Errors
/// Returns [`MinitError::Lex`] with the error count when the source has
/// unrecognized characters, after printing the listing and diagnostics.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let file = read_source(&args.input)?;
    debug!(file = file.name(), bytes = file.content().len(), "lexing");

    let handler = Handler::new();
    let tokens = lex(file.content(), args.fail_fast, &handler);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, args.format, args.spans)?;
    out.flush()?;

    let diagnostics = handler.take_diagnostics();
    report(&diagnostics, &file, args.color);

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(MinitError::Lex(diagnostics.len()))
    }
}

/// Lex `source` with the selected error policy.
///
/// In fail-fast mode nothing is listed once an error is found.
fn lex<'a>(source: &'a str, fail_fast: bool, handler: &Handler) -> Vec<Token<'a>> {
    if !fail_fast {
        return tokenize_with_handler(source, handler);
    }

    match tokenize_all(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            debug!(%err, "stopping at first error");
            handler.emit_diagnostic(err.to_diagnostic());
            Vec::new()
        },
    }
}

/// Write a token listing.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token<'_>],
    format: OutputFormat,
    spans: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                if spans {
                    writeln!(out, "{} @ {}:{}", token, token.span.line, token.span.column)?;
                } else {
                    writeln!(out, "{}", token)?;
                }
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(source: &str, format: OutputFormat, spans: bool) -> String {
        let tokens = tokenize_all(source).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, format, spans).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_listing() {
        assert_eq!(
            listing("return a ;", OutputFormat::Text, false),
            "Keyword(\"return\")\nIdentifier(\"a\")\nSemicolon(\";\")\n"
        );
    }

    #[test]
    fn test_text_listing_with_spans() {
        assert_eq!(
            listing("a\n b", OutputFormat::Text, true),
            "Identifier(\"a\") @ 1:1\nIdentifier(\"b\") @ 2:2\n"
        );
    }

    #[test]
    fn test_json_listing() {
        let text = listing("x ;", OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["kind"], "identifier");
        assert_eq!(value[0]["text"], "x");
        assert_eq!(value[1]["kind"], "semicolon");
        assert_eq!(value[1]["span"]["start"], 2);
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(listing("   ", OutputFormat::Text, false), "");
        assert_eq!(listing("", OutputFormat::Json, false), "[]\n");
    }

    #[test]
    fn test_lex_report_all() {
        let handler = Handler::new();
        let tokens = lex("a # b", false, &handler);
        assert_eq!(tokens.len(), 2);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_lex_fail_fast() {
        let handler = Handler::new();
        let tokens = lex("a # b @", true, &handler);
        assert!(tokens.is_empty());
        assert_eq!(handler.error_count(), 1);
    }
}
