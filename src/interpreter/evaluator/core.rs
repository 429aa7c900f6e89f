use std::mem;

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        value::number::Number,
    },
};

/// Reduces one line of tokens to a [`Number`].
///
/// The evaluator pulls tokens from its [`Tokenizer`] on demand and keeps only
/// the current one. Operators are applied as soon as their right operand is
/// read, strictly left to right, so `3 + 5 * 2` is `(3 + 5) * 2`.
///
/// ## Usage
///
/// An evaluator is built for a single line and consumed by
/// [`Evaluator::evaluate`]; build a new one for the next line.
#[derive(Debug)]
pub struct Evaluator<'a> {
    tokenizer: Tokenizer<'a>,
    /// The token most recently produced and not yet consumed, with its
    /// position.
    current:   (Token, usize),
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `source` and reads its first token.
    ///
    /// # Errors
    /// Propagates any error raised while reading the first token.
    pub fn new(source: &'a str) -> EvalResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;

        Ok(Self { tokenizer, current })
    }

    /// Returns the current token and its position.
    #[must_use]
    pub const fn current(&self) -> &(Token, usize) {
        &self.current
    }

    /// Replaces the current token with the next one, provided it has the
    /// expected kind.
    ///
    /// This is the only way the evaluator moves forward through the line.
    ///
    /// # Returns
    /// The token that was consumed.
    ///
    /// # Errors
    /// - [`EvaluationError::Syntax`] if the current token is of another kind.
    /// - Any error raised while reading the following token.
    ///
    /// # Example
    /// ```
    /// use leftcalc::{
    ///     error::EvaluationError,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         lexer::{Token, TokenKind},
    ///     },
    /// };
    ///
    /// let mut evaluator = Evaluator::new("4 +").unwrap();
    /// assert_eq!(evaluator.consume(TokenKind::Integer).unwrap(), Token::Integer(4u32.into()));
    /// assert_eq!(evaluator.current(), &(Token::Plus, 2));
    ///
    /// let err = evaluator.consume(TokenKind::Integer).unwrap_err();
    /// assert_eq!(err,
    ///            EvaluationError::Syntax { expected: TokenKind::Integer,
    ///                                      found:    TokenKind::Plus,
    ///                                      position: 2, });
    /// ```
    pub fn consume(&mut self, expected: TokenKind) -> EvalResult<Token> {
        let (token, position) = &self.current;

        if token.kind() != expected {
            return Err(EvaluationError::Syntax { expected,
                                                 found: token.kind(),
                                                 position: *position });
        }

        let next = self.tokenizer.next_token()?;
        Ok(mem::replace(&mut self.current, next).0)
    }

    /// Consumes an integer token and returns its value.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Syntax`] if the current token is not an
    /// integer, or any error raised while reading the following token.
    pub fn operand(&mut self) -> EvalResult<Number> {
        match self.consume(TokenKind::Integer)? {
            Token::Integer(value) => Ok(Number::Integer(BigInt::from(value))),
            _ => unreachable!(),
        }
    }

    /// Evaluates the whole line.
    ///
    /// Reads a leading operand, then applies each `operator operand` pair to
    /// the running result as it is read. The line must end right after an
    /// operand.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or overflow error encountered; the
    /// evaluation stops there.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::{evaluator::core::Evaluator, value::number::Number};
    /// use num_bigint::BigInt;
    ///
    /// let result = Evaluator::new("7 - 2 * 3").unwrap().evaluate().unwrap();
    /// assert_eq!(result, Number::Integer(BigInt::from(15)));
    /// ```
    pub fn evaluate(mut self) -> EvalResult<Number> {
        let mut result = self.operand()?;

        while let Some(op) = self.current.0.operator() {
            let position = self.current.1;
            self.consume(op.token_kind())?;
            let rhs = self.operand()?;

            trace!(%result, %op, %rhs, "applying operator");
            result = Self::eval_binary(op, result, rhs, position)?;
        }

        self.consume(TokenKind::EndOfInput)?;
        debug!(%result, "evaluation finished");
        Ok(result)
    }
}
