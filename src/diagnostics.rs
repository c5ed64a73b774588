//! Diagnostics collection and output
//!
//! Structured counterpart of the translator's marker strings, for CLI
//! consumers that want machine-readable failure reports.

use crate::error::TranslateError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticSpan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub span: DiagnosticSpan,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for diag in &self.diagnostics {
            let file = diag.span.file.as_deref().unwrap_or("<input>");
            out.push_str(&format!(
                "[{}] {}:{} {}\n",
                diag.code, file, diag.span.line, diag.message
            ));
        }
        out
    }
}

/// Build a diagnostics collection from a core translation error.
pub fn from_error(err: &TranslateError, file: Option<&Path>) -> Diagnostics {
    let (code, line) = match err {
        TranslateError::UnrecognizedLine { line } => ("PPY-UNRECOGNIZED-LINE", *line),
        TranslateError::IndentationMismatch => ("PPY-INDENTATION-MISMATCH", 1),
    };
    let mut diags = Diagnostics::new();
    diags.add(Diagnostic {
        code: code.to_string(),
        message: err.to_string(),
        severity: DiagnosticSeverity::Error,
        span: DiagnosticSpan {
            file: file.map(|p| p.display().to_string()),
            line,
        },
    });
    diags
}
