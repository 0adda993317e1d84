use crate::{
    ast::NumberLiteral,
    interpreter::value::format::{format_natural, format_number},
    util::num::f64_to_natural,
};

/// Represents a runtime value in the interpreter.
///
/// The set of variants is closed: every operator and builtin matches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integral number.
    Natural(i64),
    /// A number with a fractional part, and every quotient.
    Real(f64),
    /// A number tagged with a unit symbol from the unit table.
    WithUnit(f64, String),
    /// A text value.
    StringValue(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and `!`, and required as the
    /// condition of a ternary.
    LogicalValue(bool),
    /// The result of a successful function declaration.
    FunctionMarker,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Natural(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::LogicalValue(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::StringValue(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::StringValue(v.to_string())
    }
}

impl From<&NumberLiteral> for Value {
    fn from(lit: &NumberLiteral) -> Self {
        match lit {
            NumberLiteral::Natural(n) => (*n).into(),
            NumberLiteral::Real(r) => (*r).into(),
        }
    }
}

impl Value {
    /// Wraps an arithmetic result, reclassifying it by its own value.
    ///
    /// The result is a `Natural` if it is integral and exactly representable,
    /// and a `Real` otherwise, whatever the operand kinds were.
    ///
    /// # Example
    /// ```
    /// use umni::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_number(10.0), Value::Natural(10));
    /// assert_eq!(Value::from_number(5.5), Value::Real(5.5));
    /// ```
    #[must_use]
    pub fn from_number(value: f64) -> Self {
        f64_to_natural(value).map_or(Self::Real(value), Self::Natural)
    }

    /// Returns the name of this value's kind, as reported by `type(...)`.
    ///
    /// # Example
    /// ```
    /// use umni::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Natural(1).type_name(), "integer");
    /// assert_eq!(Value::WithUnit(1.0, "km".into()).type_name(), "double with unit");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Natural(_) => "integer",
            Self::Real(_) => "double",
            Self::WithUnit(..) => "double with unit",
            Self::StringValue(_) => "string",
            Self::LogicalValue(_) => "boolean",
            Self::FunctionMarker => "function",
        }
    }

    /// Returns the numeric payload of `Natural`, `Real` and `WithUnit`.
    ///
    /// # Returns
    /// - `Some(f64)`: The number, without its unit.
    /// - `None`: For strings, booleans and the function marker.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Natural(n) => Some(*n as f64),
            Self::Real(r) | Self::WithUnit(r, _) => Some(*r),
            _ => None,
        }
    }

    /// Returns the number of a unitless numeric value.
    #[must_use]
    pub fn as_plain_number(&self) -> Option<f64> {
        match self {
            Self::Natural(_) | Self::Real(_) => self.as_number(),
            _ => None,
        }
    }

    /// Returns the unit symbol of a `WithUnit` value.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::WithUnit(_, unit) => Some(unit),
            _ => None,
        }
    }

    /// Returns the boolean of a `LogicalValue`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::LogicalValue(b) => Some(*b),
            _ => None,
        }
    }

    /// Renders the value for display.
    ///
    /// Same text as the `Display` impl.
    ///
    /// # Example
    /// ```
    /// use umni::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Natural(1234567).render(), "1,234,567");
    /// assert_eq!(Value::WithUnit(1.5, "km".into()).render(), "1.5km");
    /// assert_eq!(Value::LogicalValue(true).render(), "true");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural(n) => write!(f, "{}", format_natural(*n)),
            Self::Real(r) => write!(f, "{}", format_number(*r)),
            Self::WithUnit(r, unit) => write!(f, "{}{unit}", format_number(*r)),
            Self::StringValue(s) => write!(f, "{s}"),
            Self::LogicalValue(b) => write!(f, "{b}"),
            Self::FunctionMarker => write!(f, "function"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reclassification_follows_the_result() {
        assert_eq!(Value::from_number(-3.0), Value::Natural(-3));
        assert_eq!(Value::from_number(0.1 + 0.2), Value::Real(0.1 + 0.2));
        assert_eq!(Value::from_number(1e300), Value::Real(1e300));
        assert!(matches!(Value::from_number(f64::NAN), Value::Real(r) if r.is_nan()));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Real(0.5).type_name(), "double");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(false).type_name(), "boolean");
        assert_eq!(Value::FunctionMarker.type_name(), "function");
    }

    #[test]
    fn numeric_accessors() {
        assert_eq!(Value::Natural(4).as_number(), Some(4.0));
        assert_eq!(Value::WithUnit(2.0, "m".into()).as_number(), Some(2.0));
        assert_eq!(Value::WithUnit(2.0, "m".into()).as_plain_number(), None);
        assert_eq!(Value::from("4").as_number(), None);
        assert_eq!(Value::WithUnit(2.0, "mb".into()).unit(), Some("mb"));
    }

    #[test]
    fn rendering() {
        assert_eq!(Value::Real(1234.56789).render(), "1,234.5678");
        assert_eq!(Value::WithUnit(5000.0, "m".into()).render(), "5,000m");
        assert_eq!(Value::from("a b").render(), "a b");
        assert_eq!(Value::FunctionMarker.render(), "function");
        assert_eq!(Value::Natural(-42).to_string(), "-42");
    }
}
