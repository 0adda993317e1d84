use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Frame},
        evaluator::core::EvalResult,
        units::{self, DEFAULT_UNIT},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a variable reference.
    ///
    /// Constants are consulted first, then the call frames, then global
    /// variables.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no binding exists.
    ///
    /// # Example
    /// ```
    /// use umni::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.eval_variable("true", None).unwrap(), Value::LogicalValue(true));
    /// assert!(env.eval_variable("x", None).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, frame: Option<&Frame<'_>>) -> EvalResult<Value> {
        self.lookup(name, frame)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates the operand of a unary operator and applies it.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         frame: Option<&mut Frame<'_>>)
                         -> EvalResult<Value> {
        let value = self.eval(expr, frame)?;
        Self::eval_unary(op, &value)
    }

    /// Evaluates both operands, left first, and applies a binary operator.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          mut frame: Option<&mut Frame<'_>>)
                          -> EvalResult<Value> {
        let left = self.eval(left, frame.as_deref_mut())?;
        let right = self.eval(right, frame)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated first, so a chain such as
    /// `x = y = 5` binds `y` before `x`. The result is the assigned value.
    ///
    /// # Errors
    /// - `AssignToConstant` if the target names a constant.
    /// - `InvalidAssignmentTarget` if the target is not a variable.
    pub fn eval_assignment(&mut self,
                           target: &Expr,
                           value: &Expr,
                           mut frame: Option<&mut Frame<'_>>)
                           -> EvalResult<Value> {
        let value = self.eval(value, frame.as_deref_mut())?;
        self.assign_target(target, value.clone(), frame)?;
        Ok(value)
    }

    /// Binds `value` to the variable a target resolves to, following nested
    /// assignment targets.
    fn assign_target(&mut self,
                     target: &Expr,
                     value: Value,
                     frame: Option<&mut Frame<'_>>)
                     -> EvalResult<()> {
        match target {
            Expr::Variable { name } => {
                log::debug!("assigning {name} = {value}");
                self.assign(name, value, frame)
            },
            Expr::Assignment { target, .. } => self.assign_target(target, value, frame),
            _ => Err(RuntimeError::InvalidAssignmentTarget),
        }
    }

    /// Evaluates a ternary. Only the selected branch is evaluated.
    ///
    /// # Errors
    /// Returns `RuntimeError::NonBooleanCondition` if the condition is not a
    /// `LogicalValue`.
    pub fn eval_ternary(&mut self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr,
                        mut frame: Option<&mut Frame<'_>>)
                        -> EvalResult<Value> {
        let condition = self.eval(condition, frame.as_deref_mut())?
                            .as_bool()
                            .ok_or(RuntimeError::NonBooleanCondition)?;

        if condition {
            self.eval(then_branch, frame)
        } else {
            self.eval(else_branch, frame)
        }
    }

    /// Evaluates `expr to unit`.
    ///
    /// A unit-bearing value converts from its own unit; a plain number is
    /// taken to be in [`DEFAULT_UNIT`].
    ///
    /// # Errors
    /// - `NonNumericConversion` if the value is not a number.
    /// - `UnknownUnit` if `unit` is not registered.
    pub fn eval_unit_conversion(&mut self,
                                expr: &Expr,
                                unit: &str,
                                frame: Option<&mut Frame<'_>>)
                                -> EvalResult<Value> {
        let value = self.eval(expr, frame)?;

        let converted = match &value {
            Value::WithUnit(amount, from) => units::convert(*amount, from, unit)?,
            Value::Natural(_) | Value::Real(_) => {
                let amount = value.as_number().ok_or(RuntimeError::NonNumericConversion)?;
                units::convert(amount, DEFAULT_UNIT, unit)?
            },
            Value::StringValue(_) | Value::LogicalValue(_) | Value::FunctionMarker => {
                return Err(RuntimeError::NonNumericConversion);
            },
        };

        Ok(Value::WithUnit(converted, unit.to_string()))
    }

    /// Evaluates call arguments left to right.
    pub(crate) fn eval_arguments(&mut self,
                                 arguments: &[Expr],
                                 mut frame: Option<&mut Frame<'_>>)
                                 -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.eval(argument, frame.as_deref_mut()))
                 .collect()
    }
}

/// Builds the error for an operator applied to operands it does not support.
pub(crate) fn invalid_operands(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::InvalidOperands { op:    op.to_string(),
                                    left:  left.render(),
                                    right: right.render(), }
}

/// Expresses a numeric value in `target` units.
///
/// A unit-bearing value is converted through the unit table; a plain number
/// is taken as already being in `target`.
pub(crate) fn amount_in(value: &Value, target: &str) -> EvalResult<f64> {
    match value {
        Value::WithUnit(amount, unit) => units::convert(*amount, unit, target),
        _ => value.as_plain_number().ok_or(RuntimeError::NonNumericConversion),
    }
}
