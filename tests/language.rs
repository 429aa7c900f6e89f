use std::fs::{self};

use leftcalc::{
    error::{EvalResult, EvaluationError},
    evaluate,
    interpreter::value::number::Number,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, expression, expected) in extract_cases(&content) {
            count += 1;
            let got = describe(evaluate(expression));
            assert_eq!(got, expected, "{path:?} line {line_no}: `{expression}`");
        }
    }

    assert!(count > 0, "No examples found in tests/scripts");
}

/// Splits a script into `(line number, expression, expected)` cases, skipping
/// comments and blank lines.
fn extract_cases(content: &str) -> Vec<(usize, &str, &str)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once(" => ")
                       .unwrap_or_else(|| panic!("line {} has no ` => `: {line:?}", i + 1));
               (i + 1, expression, expected.trim())
           })
           .collect()
}

fn describe(result: EvalResult<Number>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(EvaluationError::Lexical { .. }) => "lexical error".to_owned(),
        Err(EvaluationError::Syntax { .. }) => "syntax error".to_owned(),
        Err(EvaluationError::Overflow { .. }) => "overflow".to_owned(),
    }
}

fn assert_value(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "for `{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("`{src}` evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", "3");
    assert_value("7 * 9", "63");
    assert_value("8 - 5", "3");
    assert_value("10 / 2", "5.0");
}

#[test]
fn no_operator_precedence() {
    assert_value("3 + 5 * 2", "16");
    assert_value("7 - 2 * 3", "15");
    assert_value("2 + 6 / 4", "2.0");
}

#[test]
fn division_turns_the_result_real() {
    assert_value("1 / 2", "0.5");
    assert_value("1 / 2 + 1", "1.5");
    assert_value("9 / 3 * 2", "6.0");
}

#[test]
fn subtraction_may_go_negative() {
    assert_value("2 - 7", "-5");
    assert_value("2 - 7 - 1", "-6");
}

#[test]
fn integers_have_no_fixed_width() {
    assert_value("9223372036854775808", "9223372036854775808");
    assert_value("9999999999 * 9999999999", "99999999980000000001");
    assert_value("1 - 9223372036854775807 - 9223372036854775807", "-18446744073709551613");
}

#[test]
fn whitespace_is_ignored_between_tokens() {
    assert_value("\t1\t+  2 ", "3");
    assert_value("1+2", "3");
}

#[test]
fn empty_and_blank_lines_are_errors() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("\t");
}

#[test]
fn trailing_operator_is_error() {
    assert_failure("9 *");
    assert_failure("1 + 2 -");
}

#[test]
fn unknown_characters_are_errors() {
    assert_failure("9 @ 1");
    assert_failure("2 % 3");
    assert_failure("٣ + 1");
}

#[test]
fn error_messages_point_at_the_column() {
    let message = evaluate("3 & 4").unwrap_err().to_string();
    assert_eq!(message, "Error at column 3: Unrecognized character '&'.");

    let message = evaluate("3 + + 4").unwrap_err().to_string();
    assert_eq!(message, "Error at column 5: Expected integer, found '+'.");

    let message = evaluate("").unwrap_err().to_string();
    assert_eq!(message, "Error at column 1: Expected integer, found end of input.");

    let message = evaluate("3 4").unwrap_err().to_string();
    assert_eq!(message, "Error at column 3: Expected end of input, found integer.");

    let message = evaluate(&format!("1{} / 3", "0".repeat(310))).unwrap_err().to_string();
    assert_eq!(message,
               "Error at column 313: Integer too large to convert to a real number.");
}
