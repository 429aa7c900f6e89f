//! # leftcalc
//!
//! leftcalc is a small calculator for arithmetic over non-negative integers.
//! Expressions use `+`, `-`, `*` and `/` and are evaluated strictly left to
//! right with no operator precedence, so `3 + 5 * 2` is `16`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]

use tracing::debug;

use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Token, Tokenizer},
        value::number::Number,
    },
};

/// Provides the error type shared by the tokenizer and the evaluator.
///
/// This module defines every failure that can be raised while evaluating a
/// line: unrecognized characters, misplaced tokens and integers too large to
/// become reals. Each
/// error carries the character position at which it was detected.
///
/// # Responsibilities
/// - Defines the closed `EvaluationError` enum.
/// - Formats errors with one-based columns for user feedback.
pub mod error;
/// Orchestrates tokenizing and evaluation of a single line.
///
/// This module ties together the lexer, the evaluator and the numeric value
/// types.
///
/// # Responsibilities
/// - Coordinates the lexer and the evaluator.
/// - Manages the flow of tokens and errors between them.
pub mod interpreter;
/// Line-oriented read-evaluate-print loop.
///
/// Reads lines from any buffered reader, evaluates each one independently and
/// writes results and errors to separate writers.
pub mod repl;

/// Evaluates one line and returns its value.
///
/// A fresh tokenizer and evaluator are built for every call; nothing is shared
/// between calls.
///
/// # Errors
/// Returns an error if the line contains a character that starts no token, if
/// operands and operators do not alternate (including an empty line), or if
/// an integer beyond the range of `f64` takes part in a real operation.
///
/// # Examples
/// ```
/// use leftcalc::{evaluate, interpreter::value::number::Number};
/// use num_bigint::BigInt;
///
/// // Operators apply left to right with no precedence.
/// assert_eq!(evaluate("3 + 5 * 2").unwrap(), Number::Integer(BigInt::from(16)));
///
/// // Division is never truncated.
/// assert_eq!(evaluate("10 / 4").unwrap(), Number::Real(2.5));
///
/// // Integers have no fixed width.
/// assert_eq!(evaluate("9999999999 * 9999999999").unwrap().to_string(),
///            "99999999980000000001");
///
/// // A trailing operator is a syntax error.
/// assert!(evaluate("9 *").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<Number> {
    let result = Evaluator::new(source).and_then(Evaluator::evaluate);

    if let Err(error) = &result {
        debug!(%error, source, "evaluation failed");
    }
    result
}

/// Splits one line into its tokens, ending with `EndOfInput`.
///
/// # Errors
/// Returns the first lexical error in the line.
///
/// # Examples
/// ```
/// use leftcalc::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("3+5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(3u32.into()), 0),
///                 (Token::Plus, 1),
///                 (Token::Integer(5u32.into()), 2),
///                 (Token::EndOfInput, 3)]);
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<(Token, usize)>> {
    Tokenizer::new(source).collect()
}
