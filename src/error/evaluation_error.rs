use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur while tokenizing or evaluating a line.
///
/// Every variant carries the zero-based character position at which the
/// problem was detected. The `Display` output reports it as a one-based
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Found a character that starts no token.
    #[error("Error at column {}: Unrecognized character '{character}'.", .position + 1)]
    Lexical {
        /// The character encountered.
        character: char,
        /// Character position in the input line.
        position:  usize,
    },
    /// Found a token of the wrong kind where another was required.
    #[error("Error at column {}: Expected {expected}, found {found}.", .position + 1)]
    Syntax {
        /// The kind the evaluator required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Character position of the offending token.
        position: usize,
    },
    /// An integer operand of a real operation is too large to be
    /// represented as a finite real.
    #[error("Error at column {}: Integer too large to convert to a real number.", .position + 1)]
    Overflow {
        /// Position of the operator that needed the conversion.
        position: usize,
    },
}
