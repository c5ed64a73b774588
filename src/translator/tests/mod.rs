//! translator module tests

use super::*;
use crate::error::TranslateError;
use pretty_assertions::assert_eq;

// --- classification ---

#[test]
fn test_classify_keywords() {
    assert_eq!(classify("FUNC greet(name)"), LineKind::Func("greet(name)"));
    assert_eq!(classify("ENDFUNC"), LineKind::EndFunc);
    assert_eq!(classify("IF x > 0"), LineKind::If("x > 0"));
    assert_eq!(classify("ENDIF"), LineKind::EndIf);
    assert_eq!(classify("WHILE i < 10"), LineKind::While("i < 10"));
    assert_eq!(classify("ENDWHILE"), LineKind::EndWhile);
    assert_eq!(classify("SET x = 1"), LineKind::Set("x = 1"));
    assert_eq!(classify("PRINT \"hi\""), LineKind::Print("\"hi\""));
    assert_eq!(classify("GETSTRING name"), LineKind::GetString("name"));
    assert_eq!(classify("CASTASNUM name"), LineKind::CastAsNum("name"));
}

#[test]
fn test_classify_return_needs_no_trailing_space() {
    assert_eq!(classify("RETURN"), LineKind::Return(""));
    assert_eq!(classify("RETURN value"), LineKind::Return(" value"));
}

#[test]
fn test_classify_comment_and_blank() {
    assert_eq!(classify("# a note"), LineKind::Comment("# a note"));
    assert_eq!(classify("#"), LineKind::Comment("#"));
    assert_eq!(classify(""), LineKind::Blank);
}

#[test]
fn test_classify_close_keywords_are_exact() {
    assert_eq!(classify("ENDIF x"), LineKind::Unrecognized);
    assert_eq!(classify("ENDFUNC()"), LineKind::Unrecognized);
    assert_eq!(classify("ENDWHILE "), LineKind::Unrecognized);
}

#[test]
fn test_classify_open_keywords_need_trailing_space() {
    assert_eq!(classify("FUNC"), LineKind::Unrecognized);
    assert_eq!(classify("PRINT"), LineKind::Unrecognized);
    assert_eq!(classify("IFx"), LineKind::Unrecognized);
}

#[test]
fn test_classify_is_case_sensitive() {
    assert_eq!(classify("set x = 1"), LineKind::Unrecognized);
    assert_eq!(classify("Print x"), LineKind::Unrecognized);
}

// --- translation ---

#[test]
fn test_statements_pass_through() {
    assert_eq!(translate_lines(&["SET x = 1"]), "x = 1\n");
    assert_eq!(translate_lines(&["PRINT x"]), "print(x, end=\"\")\n");
    assert_eq!(translate_lines(&["GETSTRING s"]), "s = input()\n");
    assert_eq!(translate_lines(&["CASTASNUM s"]), "s = float(s)\n");
}

#[test]
fn test_return_with_and_without_value() {
    assert_eq!(translate_lines(&["RETURN"]), "return\n");
    assert_eq!(translate_lines(&["RETURN x + 1"]), "return x + 1\n");
    // inner whitespace after the keyword is kept as-is
    assert_eq!(translate_lines(&["RETURN  x"]), "return  x\n");
}

#[test]
fn test_leading_whitespace_is_replaced_by_computed_indent() {
    assert_eq!(translate_lines(&["        SET x = 1"]), "x = 1\n");
    assert_eq!(translate_lines(&["\tSET x = 1"]), "x = 1\n");
}

#[test]
fn test_trailing_content_preserved_verbatim() {
    assert_eq!(translate_lines(&["SET x = 1   "]), "x = 1   \n");
    assert_eq!(translate_lines(&["SET x =  'a  b'"]), "x =  'a  b'\n");
}

#[test]
fn test_block_body_indented_one_unit() {
    let lines = ["FUNC f()", "SET x = 1", "ENDFUNC"];
    assert_eq!(translate_lines(&lines), "def f():\n    x = 1\n");
}

#[test]
fn test_nested_blocks_accumulate_indent() {
    let lines = [
        "FUNC f()",
        "WHILE i < 3",
        "IF x > 0",
        "PRINT x",
        "ENDIF",
        "SET i = i + 1",
        "ENDWHILE",
        "ENDFUNC",
    ];
    let expected = "\
def f():
    while (i < 3):
        if (x > 0):
            print(x, end=\"\")
        i = i + 1
";
    assert_eq!(translate_lines(&lines), expected);
}

#[test]
fn test_close_keyword_kind_is_not_checked() {
    // the dialect tracks only a depth counter, so ENDIF closes a WHILE
    let lines = ["WHILE x < 3", "SET x = x + 1", "ENDIF"];
    assert_eq!(translate_lines(&lines), "while (x < 3):\n    x = x + 1\n");
}

#[test]
fn test_blank_and_comment_lines_carry_positional_indent() {
    let lines = ["FUNC f()", "", "# body", "ENDFUNC"];
    assert_eq!(translate_lines(&lines), "def f():\n    \n    # body\n");
}

#[test]
fn test_empty_input_yields_empty_output() {
    let lines: [&str; 0] = [];
    assert_eq!(translate_lines(&lines), "");
}

// --- error conditions ---

#[test]
fn test_unrecognized_line_reports_1_based_number() {
    let result = try_translate_lines(&["SET x = 1", "DO SOMETHING WEIRD"]);
    assert_eq!(result, Err(TranslateError::UnrecognizedLine { line: 2 }));
}

#[test]
fn test_first_unrecognized_line_wins() {
    let result = try_translate_lines(&["what", "also bad", "SET x = 1"]);
    assert_eq!(result, Err(TranslateError::UnrecognizedLine { line: 1 }));
}

#[test]
fn test_unbalanced_open_block_reports_mismatch() {
    let result = try_translate_lines(&["IF x > 0"]);
    assert_eq!(result, Err(TranslateError::IndentationMismatch));
}

#[test]
fn test_mismatch_overwrites_earlier_unrecognized_marker() {
    // the final depth check runs last, so its marker wins
    let result = try_translate_lines(&["FUNC f()", "bogus"]);
    assert_eq!(result, Err(TranslateError::IndentationMismatch));
}

#[test]
fn test_close_at_depth_zero_returns_partial_output() {
    // quirk kept from the reference: no marker, processing just stops
    assert_eq!(try_translate_lines(&["ENDIF"]), Ok(String::new()));
    assert_eq!(
        try_translate_lines(&["SET x = 1", "ENDIF", "SET y = 2"]),
        Ok("x = 1\n".to_string())
    );
}

#[test]
fn test_close_at_depth_zero_still_surfaces_earlier_marker() {
    let result = try_translate_lines(&["bogus", "ENDIF"]);
    assert_eq!(result, Err(TranslateError::UnrecognizedLine { line: 1 }));
}

#[test]
fn test_marker_string_is_the_error_display() {
    assert_eq!(
        translate_lines(&["DO SOMETHING WEIRD"]),
        "ERROR: FAILED TO PROCESS LINE 1"
    );
    assert_eq!(
        translate_lines(&["WHILE x"]),
        "ERROR: INDENTATION MISMATCH"
    );
}
