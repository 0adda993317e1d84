use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            utils::{amount_in, invalid_operands},
        },
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates arithmetic where at least one operand carries a unit.
    ///
    /// The result unit is the left operand's unit if it has one, otherwise
    /// the right operand's. Both operands are expressed in that unit first; a
    /// plain number is used as-is, with no scaling.
    ///
    /// # Errors
    /// - `DivisionByZero` if the converted right operand is zero.
    /// - `UnknownUnit` if an operand's unit is not registered.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let sum = Environment::eval_unit_op(BinaryOperator::Add,
    ///                                     &Value::WithUnit(1.0, "km".into()),
    ///                                     &Value::WithUnit(500.0, "m".into())).unwrap();
    /// assert_eq!(sum, Value::WithUnit(1.5, "km".into()));
    /// ```
    pub fn eval_unit_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let Some(target) = left.unit().or_else(|| right.unit()) else {
            return Self::eval_scalar_op(op, left, right);
        };

        let a = amount_in(left, target)?;
        let b = amount_in(right, target)?;

        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a / b
            },
            _ => return Err(invalid_operands(op, left, right)),
        };

        Ok(Value::WithUnit(result, target.to_string()))
    }
}
