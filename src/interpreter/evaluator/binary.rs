use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        evaluator::core::Evaluator,
        value::{number::Number, operator::BinaryOperator},
    },
};

impl Evaluator<'_> {
    /// Applies `op` to the running result and the next operand.
    ///
    /// Two integers stay integral under `+`, `-` and `*`; integers are
    /// unbounded, so these never overflow. Division always promotes both sides
    /// to reals, as does any real operand. Real division by zero is not
    /// trapped: it yields an infinity, or NaN for `0 / 0`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: The running result.
    /// - `right`: The operand just read.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Overflow`] if an integer that must be
    /// promoted to a real is beyond the range of `f64`.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     value::{number::Number, operator::BinaryOperator},
    /// };
    /// use num_bigint::BigInt;
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                   Number::Integer(BigInt::from(3)),
    ///                                   Number::Integer(BigInt::from(4)),
    ///                                   1).unwrap();
    /// assert_eq!(sum, Number::Integer(BigInt::from(7)));
    ///
    /// let half = Evaluator::eval_binary(BinaryOperator::Div,
    ///                                    Number::Integer(BigInt::from(1)),
    ///                                    Number::Integer(BigInt::from(2)),
    ///                                    1).unwrap();
    /// assert_eq!(half, Number::Real(0.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       position: usize)
                       -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Number::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) if op != Div => {
                let value = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => unreachable!(),
                };
                Ok(Integer(value))
            },
            (left, right) => {
                let overflow = EvaluationError::Overflow { position };
                let left = left.as_real().ok_or(overflow)?;
                let right = right.as_real().ok_or(overflow)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                        }))
            },
        }
    }
}
