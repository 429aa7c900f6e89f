/// Tokenizing and evaluation errors.
///
/// Defines the closed set of failures the calculator core can report:
/// unrecognized characters, tokens of the wrong kind, and integers too large
/// to become reals.
/// None of them are recoverable; each aborts the evaluation of its line.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;

/// Result type used by the tokenizer and the evaluator.
pub type EvalResult<T> = Result<T, EvaluationError>;
