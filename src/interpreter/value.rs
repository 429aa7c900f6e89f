/// Numeric result type.
///
/// Defines `Number`, the value every evaluation produces: an integer while
/// only `+ - *` have been applied to integer literals, a real once division
/// has been involved.
pub mod number;
/// Arithmetic operators.
///
/// Defines `BinaryOperator`, the four operators the evaluator applies, and
/// their mapping back to token kinds.
pub mod operator;

pub use number::Number;
pub use operator::BinaryOperator;
