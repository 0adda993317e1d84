/// Dispatch of binary operators to the operand-specific handlers.
pub mod core;

/// Arithmetic between plain numbers.
pub mod scalar;

/// Arithmetic where at least one operand carries a unit.
pub mod unit;

/// String concatenation and repetition.
pub mod string;

/// Equality and relational comparisons.
pub mod comparison;
