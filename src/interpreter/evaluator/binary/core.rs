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
    /// Evaluates a binary operation between two values.
    ///
    /// Comparisons go to `eval_comparison`. Arithmetic is routed by operand
    /// kind: two plain numbers use `eval_scalar_op`, a unit on either side of
    /// a numeric pair uses `eval_unit_op`, and a string on either side uses
    /// `eval_string_op`.
    ///
    /// Division by a plain zero is rejected before any of these paths.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Add,
    ///                                       &Value::Natural(3),
    ///                                       &Value::Natural(4));
    /// assert_eq!(result.unwrap(), Value::Natural(7));
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Div,
    ///                                       &Value::Natural(10),
    ///                                       &Value::Natural(2));
    /// assert_eq!(result.unwrap(), Value::Real(5.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Natural, Real, StringValue, WithUnit};

        if op.is_comparison() {
            return Self::eval_comparison(op, left, right);
        }

        if op == BinaryOperator::Div && right.as_plain_number() == Some(0.0) {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Natural(_) | Real(_), Natural(_) | Real(_)) => Self::eval_scalar_op(op, left, right),
            (WithUnit(..), Natural(_) | Real(_) | WithUnit(..))
            | (Natural(_) | Real(_), WithUnit(..)) => Self::eval_unit_op(op, left, right),
            (StringValue(_), _) | (_, StringValue(_)) => Self::eval_string_op(op, left, right),
            _ => Err(invalid_operands(op, left, right)),
        }
    }
}
