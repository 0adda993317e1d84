use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, utils::invalid_operands},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates arithmetic between two plain numbers.
    ///
    /// The computation is done in `f64` and the result is reclassified by its
    /// own value: integral results become `Natural`, others `Real`, whatever
    /// the operand kinds were. Division always yields `Real`.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let r = Environment::eval_scalar_op(BinaryOperator::Mul,
    ///                                     &Value::Real(2.5),
    ///                                     &Value::Natural(2)).unwrap();
    /// assert_eq!(r, Value::Natural(5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Some(a), Some(b)) = (left.as_plain_number(), right.as_plain_number()) else {
            return Err(invalid_operands(op, left, right));
        };

        match op {
            BinaryOperator::Add => Ok(Value::from_number(a + b)),
            BinaryOperator::Sub => Ok(Value::from_number(a - b)),
            BinaryOperator::Mul => Ok(Value::from_number(a * b)),
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Real(a / b))
            },
            _ => Err(invalid_operands(op, left, right)),
        }
    }
}
