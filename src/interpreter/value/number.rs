use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Represents the result of an evaluation.
///
/// Expressions without division stay integral. Division, and any operation
/// involving a real operand, produces a real.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An integer value of unbounded size.
    Integer(BigInt),
    /// A real value (double precision floating-point).
    Real(f64),
}

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision in the conversion, the same way
    /// any integer-to-float promotion does. Returns `None` for an integer too
    /// large to be represented as a finite `f64`.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::value::number::Number;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Number::Integer(BigInt::from(10)).as_real(), Some(10.0));
    /// assert_eq!(Number::Real(2.5).as_real(), Some(2.5));
    ///
    /// let huge = BigInt::from(10).pow(400);
    /// assert_eq!(Number::Integer(huge).as_real(), None);
    /// ```
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => n.to_f64().filter(|r| r.is_finite()),
            Self::Real(r) => Some(*r),
        }
    }
}

impl fmt::Display for Number {
    /// Integers print plainly. Finite reals always show a fractional part, so
    /// `8 / 2` prints as `4.0` and stays distinguishable from `4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
