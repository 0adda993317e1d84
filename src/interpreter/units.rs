use crate::error::RuntimeError;

/// Unit assumed for a bare number converted with `to`.
pub const DEFAULT_UNIT: &str = "m";

/// The physical quantity a unit measures.
///
/// Conversion does not consult the dimension: the table is one flat registry,
/// so `1km to mb` converts numerically like any other pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Metres and their multiples.
    Length,
    /// Binary data sizes.
    DataSize,
}

struct UnitDef {
    symbol:    &'static str,
    factor:    f64,
    dimension: Dimension,
}

static UNIT_TABLE: &[UnitDef] = &[
    UnitDef { symbol: "m", factor: 1.0, dimension: Dimension::Length },
    UnitDef { symbol: "km", factor: 1000.0, dimension: Dimension::Length },
    UnitDef { symbol: "cm", factor: 0.01, dimension: Dimension::Length },
    UnitDef { symbol: "mm", factor: 0.001, dimension: Dimension::Length },
    UnitDef { symbol: "kb", factor: 1024.0, dimension: Dimension::DataSize },
    UnitDef { symbol: "mb", factor: 1024.0 * 1024.0, dimension: Dimension::DataSize },
    UnitDef { symbol: "gb", factor: 1024.0 * 1024.0 * 1024.0, dimension: Dimension::DataSize },
];

/// Every registered unit symbol, in table order.
pub const SYMBOLS: &[&str] = &["m", "km", "cm", "mm", "kb", "mb", "gb"];

fn lookup(symbol: &str) -> Option<&'static UnitDef> {
    UNIT_TABLE.iter().find(|u| u.symbol == symbol)
}

/// Returns `true` if `symbol` names a registered unit.
///
/// ## Example
/// ```
/// use umni::interpreter::units::is_supported;
///
/// assert!(is_supported("km"));
/// assert!(!is_supported("KM"));
/// assert!(!is_supported("ft"));
/// ```
#[must_use]
pub fn is_supported(symbol: &str) -> bool {
    lookup(symbol).is_some()
}

/// Returns the conversion factor of `symbol` relative to the common base.
#[must_use]
pub fn factor(symbol: &str) -> Option<f64> {
    lookup(symbol).map(|u| u.factor)
}

/// Returns the dimension `symbol` belongs to.
#[must_use]
pub fn dimension(symbol: &str) -> Option<Dimension> {
    lookup(symbol).map(|u| u.dimension)
}

/// Converts `value` expressed in `from` into `to`.
///
/// Computed as `value * factor(from) / factor(to)`.
///
/// # Errors
/// Returns `RuntimeError::UnknownUnit` if either symbol is not registered.
///
/// ## Example
/// ```
/// use umni::interpreter::units::convert;
///
/// assert_eq!(convert(5.0, "km", "m").unwrap(), 5000.0);
/// assert_eq!(convert(1024.0, "kb", "mb").unwrap(), 1.0);
/// assert!(convert(1.0, "ft", "m").is_err());
/// ```
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, RuntimeError> {
    let source = factor(from).ok_or_else(|| RuntimeError::UnknownUnit { unit: from.to_string() })?;
    let target = factor(to).ok_or_else(|| RuntimeError::UnknownUnit { unit: to.to_string() })?;
    if from == to {
        return Ok(value);
    }
    Ok(value * source / target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn symbols_match_table() {
        assert_eq!(SYMBOLS.len(), UNIT_TABLE.len());
        for symbol in SYMBOLS {
            assert!(is_supported(symbol), "{symbol} missing from table");
        }
    }

    #[test]
    fn identity_conversion_is_exact() {
        for unit in SYMBOLS {
            for v in [0.0, 1.0, -3.5, 123_456.789, 1e-9] {
                assert_eq!(convert(v, unit, unit).unwrap(), v);
            }
        }
    }

    #[test]
    fn conversion_round_trips() {
        for a in SYMBOLS {
            for b in SYMBOLS {
                for v in [1.0, 2.5, -42.0, 1e6, 0.125] {
                    let there = convert(v, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    assert!(close(back, v), "{v}{a} -> {b} -> {a} gave {back}");
                }
            }
        }
    }

    #[test]
    fn known_factors() {
        assert_eq!(convert(100.0, "cm", "m").unwrap(), 1.0);
        assert_eq!(convert(1.0, "gb", "mb").unwrap(), 1024.0);
        assert_eq!(convert(1500.0, "mm", "m").unwrap(), 1.5);
    }

    #[test]
    fn cross_dimension_is_numeric() {
        assert_eq!(dimension("km"), Some(Dimension::Length));
        assert_eq!(dimension("mb"), Some(Dimension::DataSize));
        assert_eq!(convert(1.0, "mb", "m").unwrap(), 1_048_576.0);
    }

    #[test]
    fn unknown_units_are_reported() {
        assert_eq!(convert(1.0, "ft", "m"),
                   Err(RuntimeError::UnknownUnit { unit: "ft".to_string() }));
        assert_eq!(convert(1.0, "m", "yd"),
                   Err(RuntimeError::UnknownUnit { unit: "yd".to_string() }));
    }
}
