use std::{
    collections::HashMap,
    f64::consts::{E, PI},
    rc::Rc,
};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{BUILTIN_TABLE, Builtin},
        },
        value::core::Value,
    },
};

/// Stores the state one session evaluates statements against.
///
/// `Environment` is created once and reused for every statement; bindings
/// and declarations made by one statement are visible to the next. Calls to
/// user functions do not copy it: parameters live in a [`Frame`] that is
/// threaded through evaluation instead.
#[derive(Debug)]
pub struct Environment {
    /// Global variable bindings, written by top-level assignments.
    pub(crate) variables: HashMap<String, Value>,
    /// `pi`, `e`, `true` and `false`. Fixed at construction.
    pub(crate) constants: HashMap<&'static str, Value>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated by declarations like `fn square(x) = x * x`.
    pub(crate) functions: HashMap<String, Rc<FunctionDef>>,
    /// Native functions, resolved before user-defined ones.
    pub(crate) builtins: HashMap<&'static str, &'static Builtin>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with the constants and builtins installed and
    /// no variables or user functions.
    #[must_use]
    pub fn new() -> Self {
        let constants = HashMap::from([("pi", Value::Real(PI)),
                                       ("e", Value::Real(E)),
                                       ("true", Value::LogicalValue(true)),
                                       ("false", Value::LogicalValue(false))]);

        Self { variables: HashMap::new(),
               constants,
               functions: HashMap::new(),
               builtins: BUILTIN_TABLE.iter().map(|b| (b.name, b)).collect() }
    }

    /// Returns `true` if `name` is one of the fixed constants.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Returns the global binding of `name`, ignoring constants.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the user function declared as `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Returns the builtin registered as `name`.
    #[must_use]
    pub fn builtin(&self, name: &str) -> Option<&'static Builtin> {
        self.builtins.get(name).copied()
    }

    /// Resolves a name: constants first, then the call frames from the
    /// innermost outwards, then global variables.
    #[must_use]
    pub fn lookup(&self, name: &str, frame: Option<&Frame<'_>>) -> Option<Value> {
        self.constants
            .get(name)
            .or_else(|| frame.and_then(|f| f.get(name)))
            .or_else(|| self.variables.get(name))
            .cloned()
    }

    /// Binds `name` in the innermost frame, or globally outside any call.
    ///
    /// # Errors
    /// Returns `RuntimeError::AssignToConstant` if `name` is a constant.
    pub fn assign(&mut self,
                  name: &str,
                  value: Value,
                  frame: Option<&mut Frame<'_>>)
                  -> EvalResult<()> {
        if self.is_constant(name) {
            return Err(RuntimeError::AssignToConstant { name: name.to_string() });
        }
        match frame {
            Some(frame) => frame.set(name, value),
            None => {
                self.variables.insert(name.to_string(), value);
            },
        }
        Ok(())
    }

    /// Stores a function declaration, replacing any earlier one of the same
    /// name.
    ///
    /// # Errors
    /// Returns `RuntimeError::ConstantAsFunction` if the name is a constant.
    pub fn declare_function(&mut self, def: Rc<FunctionDef>) -> EvalResult<()> {
        if self.is_constant(&def.name) {
            return Err(RuntimeError::ConstantAsFunction { name: def.name.clone() });
        }
        if self.builtins.contains_key(def.name.as_str()) {
            log::warn!("function '{}' is shadowed by the builtin of the same name", def.name);
        }

        log::debug!("declared {}({})", def.name, def.params.join(", "));
        self.functions.insert(def.name.clone(), def);
        Ok(())
    }
}

/// Parameter bindings of one active function call.
///
/// Frames form a chain through `parent`, one link per nested call, so a body
/// sees its own parameters first and then those of its callers.
#[derive(Debug)]
pub struct Frame<'p> {
    locals: HashMap<String, Value>,
    parent: Option<&'p Frame<'p>>,
}

impl<'p> Frame<'p> {
    /// Creates a frame holding `locals` on top of `parent`.
    #[must_use]
    pub const fn new(locals: HashMap<String, Value>, parent: Option<&'p Frame<'p>>) -> Self {
        Self { locals, parent }
    }

    /// Looks `name` up in this frame and then in its ancestors.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.locals
            .get(name)
            .or_else(|| self.parent.and_then(|parent| parent.get(name)))
    }

    /// Binds `name` in this frame only.
    pub fn set(&mut self, name: &str, value: Value) {
        self.locals.insert(name.to_string(), value);
    }

    /// Number of frames in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.parent.map_or(0, Frame::depth)
    }
}
