use std::rc::Rc;

/// A numeric literal as written in source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// An integer literal.
    Natural(i64),
    /// A literal with a decimal point.
    Real(f64),
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self::Natural(value)
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node.
///
/// One statement parses into one `Expr`. Assignments and function
/// declarations are nodes like any other so that chains such as
/// `x = y = 5` can be represented directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A plain number.
    Number(NumberLiteral),
    /// A number carrying a unit, such as `5km`.
    UnitLiteral {
        /// The numeric value.
        value: f64,
        /// The unit symbol.
        unit:  String,
    },
    /// A string literal.
    StringLiteral(String),
    /// Reference to a variable or constant by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (`-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic or comparison operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `target = value`; `target` is itself a node so chains nest.
    Assignment {
        /// The node being assigned to.
        target: Box<Self>,
        /// The assigned expression.
        value:  Box<Self>,
    },
    /// `condition ? then_branch : else_branch`.
    Ternary {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Evaluated when the condition is false.
        else_branch: Box<Self>,
    },
    /// `fn name(params) = body`.
    FunctionDecl(Rc<FunctionDef>),
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// `expr to unit`.
    UnitConversion {
        /// The value being converted.
        expr: Box<Self>,
        /// The target unit symbol.
        unit: String,
    },
}

/// Represents a user-defined function definition.
///
/// Declarations are shared through `Rc` so the function table can keep them
/// for the whole session while calls borrow them.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*` or `times`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
