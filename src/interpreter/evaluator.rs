use crate::{
    ast::Expr,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: plain
/// arithmetic with Natural/Real reclassification, unit-aware arithmetic,
/// string concatenation and repetition, and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the main dispatch over expression nodes and the evaluator's
/// result type.
pub mod core;

/// Utility functions for evaluation.
///
/// Evaluation of the node kinds that need the environment: variables,
/// assignments, ternaries, conversions and the operand evaluation in front of
/// operators and calls.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// function declarations.
pub mod function;

/// Evaluates one parsed statement against `env`.
///
/// Mutations made before a failure are kept: in `pi = x = 5` the binding of
/// `x` survives the error raised for `pi`.
///
/// # Errors
/// Returns the [`RuntimeError`](crate::error::RuntimeError) that aborted the
/// statement.
///
/// # Example
/// ```
/// use umni::interpreter::{
///     environment::Environment, evaluator::interpret, lexer::tokenize, parser::parse,
///     value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// let ast = parse(&tokenize("2 + 3").unwrap()).unwrap();
/// assert_eq!(interpret(&ast, &mut env).unwrap(), Value::Natural(5));
/// ```
pub fn interpret(node: &Expr, env: &mut Environment) -> EvalResult<Value> {
    let result = env.eval(node, None);
    if let Err(error) = &result {
        log::debug!("statement failed: {error}");
    }
    result
}
