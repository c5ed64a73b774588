//! Translator module - line-by-line Pseudopseudocode to Python translation
//!
//! Each source line is classified by its leading keyword and translated by
//! direct textual substitution. The only state carried across lines is the
//! nesting depth and the accumulated output buffer; there is no lexer, no
//! AST and no lookahead.

#[cfg(test)]
mod tests;

use crate::error::TranslateError;

/// Indentation unit for emitted Python code.
pub const INDENT_UNIT: &str = "    ";

/// Classified form of a single trimmed source line.
///
/// Variants that translate a remainder carry it verbatim, byte-for-byte as it
/// appeared after the keyword (trailing whitespace included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `FUNC <signature>` - function header, opens a block
    Func(&'a str),
    /// `ENDFUNC` - closes the innermost block
    EndFunc,
    /// `RETURN<rest>` - return statement, remainder appended as-is
    Return(&'a str),
    /// `IF <condition>` - conditional header, opens a block
    If(&'a str),
    /// `ENDIF` - closes the innermost block
    EndIf,
    /// `WHILE <condition>` - loop header, opens a block
    While(&'a str),
    /// `ENDWHILE` - closes the innermost block
    EndWhile,
    /// `SET <assignment>` - assignment passed through unchanged
    Set(&'a str),
    /// `PRINT <value>` - unterminated output statement
    Print(&'a str),
    /// `GETSTRING <name>` - blocking line-read into the named variable
    GetString(&'a str),
    /// `CASTASNUM <name>` - in-place float conversion of the named variable
    CastAsNum(&'a str),
    /// `#...` - comment, whole trimmed line passed through
    Comment(&'a str),
    /// Empty after trimming
    Blank,
    /// No keyword matched
    Unrecognized,
}

/// Classify a trimmed line by ordered, case-sensitive literal prefix match.
///
/// The block-closing keywords require an exact match; everything after a
/// prefix keyword is captured verbatim. `RETURN` is the one keyword matched
/// without a trailing space, so a bare `RETURN` is valid.
pub fn classify(trimmed: &str) -> LineKind<'_> {
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("FUNC ") {
        return LineKind::Func(rest);
    }
    if trimmed == "ENDFUNC" {
        return LineKind::EndFunc;
    }
    if let Some(rest) = trimmed.strip_prefix("RETURN") {
        return LineKind::Return(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("IF ") {
        return LineKind::If(rest);
    }
    if trimmed == "ENDIF" {
        return LineKind::EndIf;
    }
    if let Some(rest) = trimmed.strip_prefix("WHILE ") {
        return LineKind::While(rest);
    }
    if trimmed == "ENDWHILE" {
        return LineKind::EndWhile;
    }
    if let Some(rest) = trimmed.strip_prefix("SET ") {
        return LineKind::Set(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("PRINT ") {
        return LineKind::Print(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("GETSTRING ") {
        return LineKind::GetString(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("CASTASNUM ") {
        return LineKind::CastAsNum(rest);
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment(trimmed);
    }
    LineKind::Unrecognized
}

/// Translate a sequence of source lines, reporting errors via `Result`.
pub fn try_translate_lines<S: AsRef<str>>(lines: &[S]) -> Result<String, TranslateError> {
    Translator::new().translate(lines)
}

/// Translate a sequence of source lines.
///
/// On error the returned string is the single-line error marker instead of
/// translated code; this is the error-as-data channel the surrounding driver
/// writes to the output file verbatim.
pub fn translate_lines<S: AsRef<str>>(lines: &[S]) -> String {
    match try_translate_lines(lines) {
        Ok(code) => code,
        Err(err) => err.to_string(),
    }
}

/// Line translator, scoped to a single translation call.
pub struct Translator {
    depth: usize,
    out: String,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            depth: 0,
            out: String::new(),
        }
    }

    /// Translate `lines` front to back.
    ///
    /// An unrecognized line does not stop the pass; later lines keep flowing
    /// through the loop so depth bookkeeping stays consistent, and the first
    /// marker wins over everything accumulated. A close keyword at depth 0
    /// stops processing immediately and yields the partial output as-is (a
    /// quirk kept from the reference behavior). A non-zero final depth
    /// overwrites the whole result with the mismatch marker.
    pub fn translate<S: AsRef<str>>(
        &mut self,
        lines: &[S],
    ) -> Result<String, TranslateError> {
        let mut failed_line: Option<usize> = None;

        for (idx, raw) in lines.iter().enumerate() {
            let trimmed = raw.as_ref().trim_start();
            match classify(trimmed) {
                LineKind::Func(sig) => self.open(&format!("def {sig}:")),
                LineKind::If(cond) => self.open(&format!("if ({cond}):")),
                LineKind::While(cond) => self.open(&format!("while ({cond}):")),
                LineKind::EndFunc | LineKind::EndIf | LineKind::EndWhile => {
                    if self.depth == 0 {
                        if let Some(line) = failed_line {
                            return Err(TranslateError::UnrecognizedLine { line });
                        }
                        return Ok(std::mem::take(&mut self.out));
                    }
                    self.depth -= 1;
                }
                LineKind::Return(rest) => self.emit(&format!("return{rest}")),
                LineKind::Set(assignment) => self.emit(assignment),
                LineKind::Print(value) => self.emit(&format!("print({value}, end=\"\")")),
                LineKind::GetString(name) => self.emit(&format!("{name} = input()")),
                LineKind::CastAsNum(name) => self.emit(&format!("{name} = float({name})")),
                LineKind::Comment(text) => self.emit(text),
                LineKind::Blank => self.emit(""),
                LineKind::Unrecognized => {
                    if failed_line.is_none() {
                        failed_line = Some(idx + 1);
                    }
                }
            }
        }

        if self.depth != 0 {
            return Err(TranslateError::IndentationMismatch);
        }
        if let Some(line) = failed_line {
            return Err(TranslateError::UnrecognizedLine { line });
        }
        Ok(std::mem::take(&mut self.out))
    }

    /// Append one output line at the current depth.
    fn emit(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT_UNIT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emit a block header, then enter the block.
    fn open(&mut self, header: &str) {
        self.emit(header);
        self.depth += 1;
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
