use crate::{
    ast::BinaryOperator,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, utils::invalid_operands},
        value::core::Value,
    },
    util::num::repeat_count,
};

/// Longest string, in bytes, that repetition may produce.
pub const MAX_REPEATED_LEN: usize = 1 << 28;

impl Environment {
    /// Evaluates an operator with a string operand.
    ///
    /// - `+` concatenates two strings, or a string and a number in either
    ///   order, using the number's rendered form.
    /// - `string * number` repeats the string `floor(number)` times; a
    ///   negative count gives the empty string.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidOperands` for every other combination,
    /// including `number * string`, and for a repetition longer than
    /// [`MAX_REPEATED_LEN`] bytes.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let s = Environment::eval_string_op(BinaryOperator::Add,
    ///                                     &Value::from("n = "),
    ///                                     &Value::Natural(1000)).unwrap();
    /// assert_eq!(s, Value::from("n = 1,000"));
    ///
    /// let s = Environment::eval_string_op(BinaryOperator::Mul,
    ///                                     &Value::from("ab"),
    ///                                     &Value::Real(2.7)).unwrap();
    /// assert_eq!(s, Value::from("abab"));
    /// ```
    pub fn eval_string_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Natural, Real, StringValue, WithUnit};

        match (op, left, right) {
            (BinaryOperator::Add, StringValue(a), StringValue(b)) => Ok(StringValue(format!("{a}{b}"))),
            (BinaryOperator::Add, StringValue(a), Natural(_) | Real(_) | WithUnit(..)) => {
                Ok(StringValue(format!("{a}{right}")))
            },
            (BinaryOperator::Add, Natural(_) | Real(_) | WithUnit(..), StringValue(b)) => {
                Ok(StringValue(format!("{left}{b}")))
            },
            (BinaryOperator::Mul, StringValue(s), Natural(_) | Real(_)) => {
                let count = right.as_plain_number().map_or(0, repeat_count);
                s.len()
                 .checked_mul(count)
                 .filter(|&len| len <= MAX_REPEATED_LEN)
                 .map(|_| StringValue(s.repeat(count)))
                 .ok_or_else(|| invalid_operands(op, left, right))
            },
            _ => Err(invalid_operands(op, left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn eval(op: BinaryOperator, a: Value, b: Value) -> EvalResult<Value> {
        Environment::eval_string_op(op, &a, &b)
    }

    #[test]
    fn concatenation_preserves_order() {
        assert_eq!(eval(BinaryOperator::Add, Value::from("a"), Value::from("b")),
                   Ok(Value::from("ab")));
        assert_eq!(eval(BinaryOperator::Add, Value::Real(1.5), Value::from("x")),
                   Ok(Value::from("1.5x")));
        assert_eq!(eval(BinaryOperator::Add,
                        Value::from("d = "),
                        Value::WithUnit(5.0, "km".to_string())),
                   Ok(Value::from("d = 5km")));
    }

    #[test]
    fn repetition() {
        assert_eq!(eval(BinaryOperator::Mul, Value::from("ab"), Value::Natural(3)),
                   Ok(Value::from("ababab")));
        assert_eq!(eval(BinaryOperator::Mul, Value::from("ab"), Value::Natural(-2)),
                   Ok(Value::from("")));
        assert_eq!(eval(BinaryOperator::Mul, Value::from("ab"), Value::Real(0.9)),
                   Ok(Value::from("")));
        assert_eq!(eval(BinaryOperator::Mul, Value::from(""), Value::Natural(9_007_199_254_740_991)),
                   Ok(Value::from("")));
    }

    #[test]
    fn oversized_repetition_is_rejected() {
        assert_eq!(eval(BinaryOperator::Mul, Value::from("ab"), Value::Natural(9_007_199_254_740_991)),
                   Err(RuntimeError::InvalidOperands { op:    "*".to_string(),
                                                       left:  "ab".to_string(),
                                                       right: "9,007,199,254,740,991".to_string(), }));
        let half = i64::try_from(MAX_REPEATED_LEN / 2).unwrap();
        assert!(eval(BinaryOperator::Mul, Value::from("ab"), Value::Natural(half + 1)).is_err());
    }

    #[test]
    fn unsupported_combinations() {
        assert_eq!(eval(BinaryOperator::Sub, Value::from("Hello"), Value::from("World")),
                   Err(RuntimeError::InvalidOperands { op:    "-".to_string(),
                                                       left:  "Hello".to_string(),
                                                       right: "World".to_string(), }));
        assert!(eval(BinaryOperator::Mul, Value::Natural(42), Value::from("Hello")).is_err());
        assert!(eval(BinaryOperator::Add, Value::from("a"), Value::LogicalValue(true)).is_err());
        assert!(eval(BinaryOperator::Mul, Value::from("a"), Value::WithUnit(2.0, "m".into())).is_err());
    }
}
