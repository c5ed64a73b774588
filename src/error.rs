//! Error types for the Pseudopseudocode translator

use thiserror::Error;

/// Errors detected by the translation core.
///
/// The `Display` form of each variant is the exact single-line marker string
/// the translator returns in place of its output; downstream code writes it
/// to the destination file verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    #[error("ERROR: FAILED TO PROCESS LINE {line}")]
    UnrecognizedLine { line: usize },

    #[error("ERROR: INDENTATION MISMATCH")]
    IndentationMismatch,
}

pub type Result<T> = std::result::Result<T, TranslateError>;
