use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Frame},
        evaluator::{core::EvalResult, function::builtin},
        value::core::Value,
    },
};

/// Deepest chain of nested user function calls a statement may build.
pub const MAX_CALL_DEPTH: usize = 256;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// result wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `Builtin` (table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A native function registered under a fixed name.
        #[derive(Debug)]
        pub struct Builtin {
            /// Name the function is called by.
            pub name:  &'static str,
            /// Exact number of arguments.
            pub arity: usize,
            /// Implementation.
            pub func:  BuiltinFn,
        }
        /// Every builtin, in registration order.
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtins.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: 1, func: builtin::sin },
    "cos"       => { arity: 1, func: builtin::cos },
    "length"    => { arity: 1, func: builtin::length },
    "b64Encode" => { arity: 1, func: builtin::b64_encode },
    "b64Decode" => { arity: 1, func: builtin::b64_decode },
    "type"      => { arity: 1, func: builtin::type_of },
}

impl Environment {
    /// Evaluates a function declaration.
    ///
    /// # Returns
    /// `Value::FunctionMarker` once the declaration is stored.
    ///
    /// # Errors
    /// Returns `RuntimeError::ConstantAsFunction` if the name is a constant.
    pub fn eval_function_decl(&mut self, def: &Rc<FunctionDef>) -> EvalResult<Value> {
        self.declare_function(Rc::clone(def))?;
        Ok(Value::FunctionMarker)
    }

    /// Evaluates a function call.
    ///
    /// Builtins are resolved first, then user functions. The argument count is
    /// checked before any argument is evaluated; arguments are then evaluated
    /// left to right in the caller's frame.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `frame`: The caller's frame, if the call happens inside a function.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no function has that name.
    /// - `ArgumentCountMismatch` if the argument count is wrong.
    /// - Any error raised by an argument or the function itself.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              mut frame: Option<&mut Frame<'_>>)
                              -> EvalResult<Value> {
        if let Some(builtin) = self.builtin(name) {
            check_arity(name, builtin.arity, arguments.len())?;
            let args = self.eval_arguments(arguments, frame.as_deref_mut())?;
            return (builtin.func)(&args);
        }

        let def = self.function(name)
                      .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;
        check_arity(name, def.params.len(), arguments.len())?;

        let args = self.eval_arguments(arguments, frame.as_deref_mut())?;
        self.call_user_defined_function(&def, args, frame.as_deref())
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound in a new frame stacked on the caller's, and the
    /// body is evaluated in it. Global variables stay readable but cannot be
    /// written from the body.
    ///
    /// # Errors
    /// Returns `RuntimeError::CallDepthExceeded` if the new frame would be
    /// deeper than [`MAX_CALL_DEPTH`].
    fn call_user_defined_function(&mut self,
                                  def: &FunctionDef,
                                  args: Vec<Value>,
                                  parent: Option<&Frame<'_>>)
                                  -> EvalResult<Value> {
        let depth = parent.map_or(0, Frame::depth) + 1;
        if depth > MAX_CALL_DEPTH {
            log::debug!("{} exceeded the call depth limit", def.name);
            return Err(RuntimeError::CallDepthExceeded { name:  def.name.clone(),
                                                         limit: MAX_CALL_DEPTH, });
        }

        let locals = def.params.iter().cloned().zip(args).collect();
        let mut frame = Frame::new(locals, parent);

        log::debug!("calling {} at depth {depth}", def.name);
        self.eval(&def.body, Some(&mut frame))
    }
}

/// Fails with `ArgumentCountMismatch` unless `found == expected`.
fn check_arity(name: &str, expected: usize, found: usize) -> EvalResult<()> {
    if expected == found {
        return Ok(());
    }
    Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                              expected,
                                              found })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_and_names_agree() {
        assert_eq!(BUILTIN_FUNCTIONS, ["sin", "cos", "length", "b64Encode", "b64Decode", "type"]);
        assert!(BUILTIN_TABLE.iter().all(|b| b.arity == 1));
    }

    #[test]
    fn arity_is_checked_before_arguments() {
        let mut env = Environment::new();
        let undefined = Expr::Variable { name: "nope".to_string() };
        assert_eq!(env.eval_function_call("sin", &[undefined.clone(), undefined], None),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                             expected: 1,
                                                             found:    2, }));
    }

    fn call_forever() -> EvalResult<Value> {
        let mut env = Environment::new();
        let body = Expr::FunctionCall { name:      "forever".to_string(),
                                        arguments: vec![], };
        env.declare_function(Rc::new(FunctionDef { name: "forever".to_string(),
                                                   params: vec![],
                                                   body }))?;
        env.eval_function_call("forever", &[], None)
    }

    #[test]
    fn nesting_is_limited() {
        // each nested call takes several native frames
        let result = std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                                .spawn(call_forever)
                                                .unwrap()
                                                .join()
                                                .unwrap();
        assert_eq!(result,
                   Err(RuntimeError::CallDepthExceeded { name:  "forever".to_string(),
                                                         limit: MAX_CALL_DEPTH, }));
    }

    #[test]
    fn unknown_function_is_reported_before_arguments() {
        let mut env = Environment::new();
        let undefined = Expr::Variable { name: "nope".to_string() };
        assert_eq!(env.eval_function_call("f", &[undefined], None),
                   Err(RuntimeError::UndefinedFunction { name: "f".to_string() }));
    }
}
