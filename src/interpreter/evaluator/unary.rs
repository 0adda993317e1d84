use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation of `Natural`, `Real` and `WithUnit`; the
    ///   kind and the unit are preserved.
    /// - `Not`: boolean negation of a `LogicalValue`.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidUnaryOperand` for any other operand.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::UnaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Natural(5)).unwrap();
    /// assert_eq!(v, Value::Natural(-5));
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Not, &Value::LogicalValue(false)).unwrap();
    /// assert_eq!(v, Value::LogicalValue(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Natural(n)) => Ok(match n.checked_neg() {
                Some(negated) => Value::Natural(negated),
                None => Value::Real(-value.as_number().unwrap_or_default()),
            }),
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            (UnaryOperator::Negate, Value::WithUnit(r, unit)) => Ok(Value::WithUnit(-r, unit.clone())),
            (UnaryOperator::Not, Value::LogicalValue(b)) => Ok(Value::LogicalValue(!b)),
            _ => Err(RuntimeError::InvalidUnaryOperand { op:      op.to_string(),
                                                         operand: value.type_name().to_string(), }),
        }
    }
}
