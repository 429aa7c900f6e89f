use std::{fmt, iter::FusedIterator};

use num_bigint::BigUint;
use tracing::trace;

use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::value::operator::BinaryOperator,
};

/// Character-level scan position used by the [`Tokenizer`].
///
/// Tracks the index of the current character and caches the character itself,
/// switching to an exhausted state once the end of the line is passed.
pub mod cursor;

use cursor::Cursor;

/// Represents a lexical token in the input line.
///
/// A token is a minimal but meaningful unit of text produced by the
/// tokenizer. Only `Integer` carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Non-negative integer literal tokens, such as `42`. Literals of any
    /// length are accepted.
    Integer(BigUint),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// Produced once the line is exhausted, and on every request after that.
    EndOfInput,
}

/// The kind of a [`Token`], without its value.
///
/// Used wherever the evaluator states which token it requires next, and in
/// syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// The end of the line.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(3u32.into()).kind(), TokenKind::Integer);
    /// assert_eq!(Token::Divide.kind(), TokenKind::Divide);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the binary operator this token stands for, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Multiply => Some(BinaryOperator::Mul),
            Self::Divide => Some(BinaryOperator::Div),
            Self::Integer(_) | Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for Token {
    /// Writes the kind name, with the value of integer literals, as in
    /// `Integer(42)` or `Plus`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "Integer({value})"),
            other => write!(f, "{:?}", other.kind()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Turns one line of text into [`Token`]s, one request at a time.
///
/// The tokenizer never looks more than one character ahead. Each call to
/// [`Tokenizer::next_token`] consumes characters, so the sequence cannot be
/// restarted; build a new tokenizer for a new line.
///
/// The tokenizer is also an [`Iterator`] that yields every token up to and
/// including the first `EndOfInput`, or stops after the first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    cursor:   Cursor<'a>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { cursor:   Cursor::new(source),
               finished: false, }
    }

    /// Moves the scan position one character forward.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Advances past any run of whitespace under the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.cursor.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Reads the run of ASCII digits under the cursor as an integer.
    ///
    /// The cursor must be on a digit when this is called; [`Self::next_token`]
    /// is the only caller. On return the cursor rests on the first character
    /// after the digits. The literal may be arbitrarily long.
    pub(crate) fn scan_integer(&mut self) -> BigUint {
        debug_assert!(self.cursor.current().is_some_and(|c| c.is_ascii_digit()),
                      "scan_integer called off a digit");
        let mut value = BigUint::default();

        // `to_digit` only accepts ASCII digits.
        while let Some(digit) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            value = value * 10u32 + digit;
            self.advance();
        }
        value
    }

    /// Produces the next token together with the position of its first
    /// character.
    ///
    /// Whitespace is skipped. Once the line is exhausted every call returns
    /// `EndOfInput`, positioned at the end of the line.
    ///
    /// Only the ASCII digits `0`-`9` start an integer literal; other Unicode
    /// digits such as `٣` are rejected like any unknown character.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Lexical`] for a character that starts no
    /// token.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::lexer::{Token, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new(" 12*3");
    /// assert_eq!(tokenizer.next_token().unwrap(), (Token::Integer(12u32.into()), 1));
    /// assert_eq!(tokenizer.next_token().unwrap(), (Token::Multiply, 3));
    /// assert_eq!(tokenizer.next_token().unwrap(), (Token::Integer(3u32.into()), 4));
    /// assert_eq!(tokenizer.next_token().unwrap(), (Token::EndOfInput, 5));
    /// assert_eq!(tokenizer.next_token().unwrap(), (Token::EndOfInput, 5));
    /// ```
    pub fn next_token(&mut self) -> EvalResult<(Token, usize)> {
        while let Some(c) = self.cursor.current() {
            let position = self.cursor.position();

            if c.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            let token = if c.is_ascii_digit() {
                Token::Integer(self.scan_integer())
            } else {
                let token = match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Multiply,
                    '/' => Token::Divide,
                    _ => {
                        return Err(EvaluationError::Lexical { character: c,
                                                              position });
                    },
                };
                self.advance();
                token
            };

            trace!(%token, position, "scanned token");
            return Ok((token, position));
        }

        Ok((Token::EndOfInput, self.cursor.position()))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = EvalResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_token();
        if matches!(item, Ok((Token::EndOfInput, _)) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for Tokenizer<'_> {}
