/// The error families a runtime failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Undefined names, constant writes and invalid assignment targets.
    Name,
    /// Argument count mismatches.
    Arity,
    /// Operands or arguments of the wrong kind.
    Type,
    /// Division by zero.
    Arithmetic,
    /// Unknown unit symbols.
    Unit,
    /// Evaluation nested too deeply.
    Resource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is neither a constant nor bound.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither builtin nor declared.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// Tried to assign to a constant such as `pi`.
    AssignToConstant {
        /// The name of the constant.
        name: String,
    },
    /// Tried to declare a function named like a constant.
    ConstantAsFunction {
        /// The name of the constant.
        name: String,
    },
    /// The left-hand side of an assignment is not a variable.
    InvalidAssignmentTarget,
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters the function takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A unary operator was applied to a value it does not support.
    InvalidUnaryOperand {
        /// The operator symbol.
        op:      String,
        /// Type name of the operand.
        operand: String,
    },
    /// A binary operator was applied to operands it does not support.
    InvalidOperands {
        /// The operator symbol.
        op:    String,
        /// Rendered left operand.
        left:  String,
        /// Rendered right operand.
        right: String,
    },
    /// A builtin received an argument it cannot process.
    InvalidArgument {
        /// The builtin's name.
        function: String,
        /// Details about why the argument is invalid.
        details:  String,
    },
    /// The condition of a ternary did not evaluate to a boolean.
    NonBooleanCondition,
    /// A unit conversion was applied to a non-numeric value.
    NonNumericConversion,
    /// Attempted division by zero.
    DivisionByZero,
    /// A unit symbol missing from the unit table.
    UnknownUnit {
        /// The offending symbol.
        unit: String,
    },
    /// User function calls nested deeper than the call depth limit.
    CallDepthExceeded {
        /// The function whose call crossed the limit.
        name:  String,
        /// The limit.
        limit: usize,
    },
}

impl RuntimeError {
    /// Returns the family this error belongs to.
    ///
    /// ## Example
    /// ```
    /// use umni::error::{ErrorKind, RuntimeError};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.kind(), ErrorKind::Arithmetic);
    /// assert_eq!(RuntimeError::InvalidAssignmentTarget.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. }
            | Self::UndefinedFunction { .. }
            | Self::AssignToConstant { .. }
            | Self::ConstantAsFunction { .. }
            | Self::InvalidAssignmentTarget => ErrorKind::Name,
            Self::ArgumentCountMismatch { .. } => ErrorKind::Arity,
            Self::InvalidUnaryOperand { .. }
            | Self::InvalidOperands { .. }
            | Self::InvalidArgument { .. }
            | Self::NonBooleanCondition
            | Self::NonNumericConversion => ErrorKind::Type,
            Self::DivisionByZero => ErrorKind::Arithmetic,
            Self::UnknownUnit { .. } => ErrorKind::Unit,
            Self::CallDepthExceeded { .. } => ErrorKind::Resource,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Name error: Undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "Name error: Undefined function: {name}"),
            Self::AssignToConstant { name } => {
                write!(f, "Name error: Cannot assign to constant '{name}'")
            },
            Self::ConstantAsFunction { name } => {
                write!(f, "Name error: Cannot declare constant '{name}' as function")
            },
            Self::InvalidAssignmentTarget => write!(f, "Name error: Invalid assignment target"),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Arity error: Argument count mismatch for function: {name} (expected {expected}, found {found})"),
            Self::InvalidUnaryOperand { op, operand } => {
                write!(f, "Type error: Invalid operand for unary '{op}': {operand}")
            },
            Self::InvalidOperands { op, left, right } => {
                write!(f, "Type error: Invalid operands for '{op}': {left} and {right}")
            },
            Self::InvalidArgument { function, details } => {
                write!(f, "Type error: Invalid argument for {function}: {details}")
            },
            Self::NonBooleanCondition => {
                write!(f, "Type error: Condition must evaluate to a boolean value")
            },
            Self::NonNumericConversion => write!(f, "Type error: Cannot convert non-numeric value"),
            Self::DivisionByZero => write!(f, "Arithmetic error: Division by zero"),
            Self::UnknownUnit { unit } => write!(f, "Unit error: Unknown unit: {unit}"),
            Self::CallDepthExceeded { name, limit } => {
                write!(f, "Resource error: Calls nested deeper than {limit} in {name}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
