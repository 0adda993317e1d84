/// The runtime value type.
///
/// Declares the closed `Value` enum together with its type names, numeric
/// accessors and the Natural/Real reclassification applied to every
/// arithmetic result.
pub mod core;

/// Display formatting for numbers.
///
/// Groups the integer part with thousands separators and truncates the
/// fractional part to four digits.
pub mod format;
