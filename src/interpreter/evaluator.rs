/// Core evaluation logic.
///
/// Contains the `Evaluator`, which owns the tokenizer and the current token,
/// and drives the left-to-right reduction of a line to a single number.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one arithmetic operator to the running result and the next
/// operand, with checked integer arithmetic and true division.
pub mod binary;
