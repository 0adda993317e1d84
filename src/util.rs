/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Every arithmetic
/// result is computed in `f64` and then reclassified through these helpers.
pub mod num;
