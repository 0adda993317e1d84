use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
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
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// - If either operand carries a unit and both are numeric, the other
    ///   operand is expressed in that unit (the left unit wins) and the
    ///   amounts are compared.
    /// - Plain numbers compare numerically, strings lexicographically and
    ///   booleans by value.
    /// - Operands of different kinds are never equal; ordering them is an
    ///   error.
    ///
    /// A comparison involving NaN is false for every operator but `!=`.
    ///
    /// # Example
    /// ```
    /// use umni::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let r = Environment::eval_comparison(BinaryOperator::Greater,
    ///                                      &Value::WithUnit(1.0, "km".into()),
    ///                                      &Value::WithUnit(999.0, "m".into()));
    /// assert_eq!(r.unwrap(), Value::LogicalValue(true));
    ///
    /// let r = Environment::eval_comparison(BinaryOperator::Equal,
    ///                                      &Value::Natural(1),
    ///                                      &Value::from("1"));
    /// assert_eq!(r.unwrap(), Value::LogicalValue(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{FunctionMarker, LogicalValue, Natural, Real, StringValue, WithUnit};

        let ordering = match (left, right) {
            (WithUnit(_, unit), Natural(_) | Real(_) | WithUnit(..))
            | (Natural(_) | Real(_), WithUnit(_, unit)) => {
                amount_in(left, unit)?.partial_cmp(&amount_in(right, unit)?)
            },
            (Natural(a), Natural(b)) => Some(a.cmp(b)),
            (Natural(_) | Real(_), Natural(_) | Real(_)) => {
                left.as_number().partial_cmp(&right.as_number())
            },
            (StringValue(a), StringValue(b)) => Some(a.cmp(b)),
            (LogicalValue(a), LogicalValue(b)) => Some(a.cmp(b)),
            (FunctionMarker, FunctionMarker) => Some(Ordering::Equal),
            _ => {
                return match op {
                    BinaryOperator::Equal => Ok(LogicalValue(false)),
                    BinaryOperator::NotEqual => Ok(LogicalValue(true)),
                    _ => Err(invalid_operands(op, left, right)),
                };
            },
        };

        let result = match op {
            BinaryOperator::Less => ordering == Some(Ordering::Less),
            BinaryOperator::LessEqual => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            },
            BinaryOperator::Greater => ordering == Some(Ordering::Greater),
            BinaryOperator::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            BinaryOperator::Equal => ordering == Some(Ordering::Equal),
            BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
                return Self::eval_binary(op, left, right);
            },
        };

        Ok(LogicalValue(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn compare(op: BinaryOperator, a: &Value, b: &Value) -> bool {
        match Environment::eval_comparison(op, a, b) {
            Ok(Value::LogicalValue(result)) => result,
            other => panic!("unexpected comparison result {other:?}"),
        }
    }

    #[test]
    fn numbers() {
        assert!(compare(BinaryOperator::Less, &Value::Natural(1), &Value::Real(1.5)));
        assert!(compare(BinaryOperator::Equal, &Value::Natural(2), &Value::Real(2.0)));
        assert!(compare(BinaryOperator::GreaterEqual, &Value::Natural(2), &Value::Natural(2)));
        assert!(!compare(BinaryOperator::Equal, &Value::Real(f64::NAN), &Value::Real(f64::NAN)));
        assert!(compare(BinaryOperator::NotEqual, &Value::Real(f64::NAN), &Value::Real(f64::NAN)));
    }

    #[test]
    fn units_convert_into_the_unit_operand() {
        let km = Value::WithUnit(1.0, "km".to_string());
        assert!(compare(BinaryOperator::Equal, &km, &Value::WithUnit(1000.0, "m".to_string())));
        assert!(!compare(BinaryOperator::Less, &Value::Natural(1), &km));
        assert!(compare(BinaryOperator::Equal, &Value::Natural(1), &km));
    }

    #[test]
    fn strings_and_booleans() {
        assert!(compare(BinaryOperator::Less, &Value::from("apple"), &Value::from("banana")));
        assert!(compare(BinaryOperator::Equal, &Value::from("a"), &Value::from("a")));
        assert!(compare(BinaryOperator::Greater,
                        &Value::LogicalValue(true),
                        &Value::LogicalValue(false)));
    }

    #[test]
    fn mixed_kinds() {
        assert!(!compare(BinaryOperator::Equal, &Value::from("1"), &Value::Natural(1)));
        assert!(compare(BinaryOperator::NotEqual,
                        &Value::LogicalValue(true),
                        &Value::WithUnit(1.0, "m".to_string())));
        assert!(matches!(Environment::eval_comparison(BinaryOperator::Less,
                                                      &Value::from("a"),
                                                      &Value::Natural(1)),
                         Err(RuntimeError::InvalidOperands { .. })));
    }
}
