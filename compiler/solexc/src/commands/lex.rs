use std::fmt::Write as _;

use rayon::prelude::*;
use solex_lexer::{lex, line_col, Tokenizer};
use tracing::debug;

/// Rendered output of `solex lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    pub output: String,
    /// A file was unreadable or contained an unrecognized token.
    pub failed: bool,
}

/// Lex every file in parallel, keeping the output in argument order.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn lex_files(tokenizer: &Tokenizer, paths: &[String]) -> LexReport {
    let rendered: Vec<(String, bool)> = paths
        .par_iter()
        .map(|path| match std::fs::read(path) {
            Ok(source) => render_source(tokenizer, path, &source),
            Err(err) => (format!("{path}: error: cannot read file: {err}\n"), true),
        })
        .collect();

    let multiple = paths.len() > 1;
    let mut report = LexReport::default();
    for (path, (text, failed)) in paths.iter().zip(rendered) {
        if multiple {
            let _ = writeln!(report.output, "==> {path} <==");
        }
        report.output.push_str(&text);
        report.failed |= failed;
    }
    report
}

/// Render one source: a line per token, then a line per error.
///
/// Returns the text and whether any error was reported.
pub fn render_source(tokenizer: &Tokenizer, path: &str, source: &[u8]) -> (String, bool) {
    let output = match lex(tokenizer, source) {
        Ok(output) => output,
        Err(err) => return (format!("{path}: error: {err}\n"), true),
    };
    debug!(path, tokens = output.tokens.len(), errors = output.errors.len(), "lexed");

    let mut out = String::new();
    for lexeme in &output.tokens {
        let _ = writeln!(out, "{} @ {}", lexeme.token, lexeme.span);
    }
    for error in &output.errors {
        let (line, col) = line_col(source, error.error.offset);
        let skipped = String::from_utf8_lossy(source.get(error.span.to_range()).unwrap_or_default());
        let _ = writeln!(out, "{path}:{line}:{col}: unrecognized token `{skipped}`");
    }
    (out, output.has_errors())
}
