//! Pseudopy - Pseudopseudocode to Python translator
//!
//! # Overview
//! Line-oriented source-to-source translator: each input line is classified
//! by its leading keyword and mapped to at most one line of Python, with a
//! nesting-depth counter driving the emitted indentation.

pub mod diagnostics;
pub mod error;
pub mod translator;

use error::TranslateError;
use std::path::Path;

/// Translate an ordered sequence of source lines.
///
/// The single return channel carries either the translated program text or
/// one of the fixed error-marker strings.
pub fn translate_lines<S: AsRef<str>>(lines: &[S]) -> String {
    translator::translate_lines(lines)
}

/// Translate a whole source document, splitting it on newline boundaries.
pub fn translate_source(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    translator::translate_lines(&lines)
}

/// Translate a whole source document, reporting errors via `Result`.
pub fn try_translate_source(source: &str) -> Result<String, TranslateError> {
    let lines: Vec<&str> = source.lines().collect();
    translator::try_translate_lines(&lines)
}

/// Translate a source document and return Python code or diagnostics.
pub fn translate_with_diagnostics(
    source: &str,
    file: Option<&Path>,
) -> Result<String, diagnostics::Diagnostics> {
    try_translate_source(source).map_err(|err| diagnostics::from_error(&err, file))
}

/// Translate a Pseudopseudocode file to a Python file.
///
/// Error markers count as output and are written to `output` verbatim; only
/// I/O failures propagate.
pub fn translate_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(input)?;
    let python_code = translate_source(&source);
    std::fs::write(output, python_code)?;
    Ok(())
}
