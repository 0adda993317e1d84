use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Frame},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; every variant has a rule.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `frame`: The innermost call frame, `None` at the top level.
    ///
    /// # Returns
    /// The value the expression evaluates to.
    pub fn eval(&mut self, expr: &Expr, frame: Option<&mut Frame<'_>>) -> EvalResult<Value> {
        match expr {
            Expr::Number(literal) => Ok(literal.into()),
            Expr::UnitLiteral { value, unit } => Ok(Value::WithUnit(*value, unit.clone())),
            Expr::StringLiteral(text) => Ok(Value::StringValue(text.clone())),
            Expr::Variable { name } => self.eval_variable(name, frame.as_deref()),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr, frame),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right, frame),
            Expr::Assignment { target, value } => self.eval_assignment(target, value, frame),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.eval_ternary(condition, then_branch, else_branch, frame)
            },
            Expr::FunctionDecl(def) => self.eval_function_decl(def),
            Expr::FunctionCall { name, arguments } => {
                self.eval_function_call(name, arguments, frame)
            },
            Expr::UnitConversion { expr, unit } => self.eval_unit_conversion(expr, unit, frame),
        }
    }
}
