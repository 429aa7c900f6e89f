/// The evaluator module reduces a token stream to a number.
///
/// The evaluator pulls tokens from the lexer one at a time and applies each
/// operator to a running result as soon as its right operand is known. There
/// is no syntax tree and no operator precedence.
///
/// # Responsibilities
/// - Validates that operands and operators alternate, starting and ending with
///   an operand.
/// - Applies `+ - * /` strictly left to right.
/// - Reports syntax errors and real-conversion overflow with positions.
pub mod evaluator;
/// The lexer module tokenizes an input line for the evaluator.
///
/// The lexer (tokenizer) reads the raw text one character at a time and
/// produces tokens on demand: non-negative integer literals, the four
/// operators, and an end-of-input marker.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Converts digit runs into integer literals.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Number` result type with its integer and real cases.
/// - Defines the `BinaryOperator` enum applied by the evaluator.
pub mod value;
