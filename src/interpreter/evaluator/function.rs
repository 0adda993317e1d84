/// Built-in function implementations.
///
/// `sin`, `cos`, `length`, `b64Encode`, `b64Decode` and `type`.
pub mod builtin;

/// The builtin table, function calls and declarations.
pub mod core;
