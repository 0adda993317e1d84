use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Extracts the single argument of a one-argument builtin.
fn single<'v>(name: &str, args: &'v [Value]) -> EvalResult<&'v Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                       expected: 1,
                                                       found:    args.len(), }),
    }
}

fn invalid_argument(function: &str, details: impl Into<String>) -> RuntimeError {
    RuntimeError::InvalidArgument { function: function.to_string(),
                                    details:  details.into(), }
}

/// Applies a trigonometric function to a numeric value.
///
/// The generated functions accept exactly one argument. Naturals, reals and
/// the amount of a unit-bearing value are accepted; the unit is dropped and
/// the result is always `Real`.
///
/// Non-numeric arguments produce an `InvalidArgument` error.
///
/// # Example
/// ```
/// use umni::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x]).unwrap(), Value::Real(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $name:literal) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let arg = single($name, args)?;
            arg.as_number()
               .map(|x| Value::Real(x.$fname()))
               .ok_or_else(|| {
                   invalid_argument($name, format!("expected a number, found {}", arg.type_name()))
               })
        }
    };
}

real_builtin!(sin, "sin");
real_builtin!(cos, "cos");

/// Returns the number of characters in a string.
///
/// # Example
/// ```
/// use umni::interpreter::{evaluator::function::builtin::length, value::core::Value};
///
/// assert_eq!(length(&[Value::from("héllo")]).unwrap(), Value::Natural(5));
/// ```
pub fn length(args: &[Value]) -> EvalResult<Value> {
    match single("length", args)? {
        Value::StringValue(s) => Ok(Value::Natural(i64::try_from(s.chars().count()).unwrap_or(i64::MAX))),
        other => Err(invalid_argument("length",
                                      format!("expected a string, found {}", other.type_name()))),
    }
}

/// Encodes the UTF-8 bytes of a string as standard, padded base64.
///
/// # Example
/// ```
/// use umni::interpreter::{evaluator::function::builtin::b64_encode, value::core::Value};
///
/// assert_eq!(b64_encode(&[Value::from("hi")]).unwrap(), Value::from("aGk="));
/// ```
pub fn b64_encode(args: &[Value]) -> EvalResult<Value> {
    match single("b64Encode", args)? {
        Value::StringValue(s) => Ok(Value::StringValue(STANDARD.encode(s.as_bytes()))),
        other => Err(invalid_argument("b64Encode",
                                      format!("expected a string, found {}", other.type_name()))),
    }
}

/// Decodes standard, padded base64 into a string.
///
/// # Errors
/// Returns `InvalidArgument` if the input is not valid base64 or does not
/// decode to UTF-8.
pub fn b64_decode(args: &[Value]) -> EvalResult<Value> {
    let encoded = match single("b64Decode", args)? {
        Value::StringValue(s) => s,
        other => {
            return Err(invalid_argument("b64Decode",
                                        format!("expected a string, found {}", other.type_name())));
        },
    };

    let bytes = STANDARD.decode(encoded)
                        .map_err(|e| invalid_argument("b64Decode", e.to_string()))?;
    String::from_utf8(bytes).map(Value::StringValue)
                            .map_err(|_| invalid_argument("b64Decode", "decoded bytes are not UTF-8"))
}

/// Returns the kind name of any value as a string.
///
/// # Example
/// ```
/// use umni::interpreter::{evaluator::function::builtin::type_of, value::core::Value};
///
/// assert_eq!(type_of(&[Value::Real(0.5)]).unwrap(), Value::from("double"));
/// ```
pub fn type_of(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::from(single("type", args)?.type_name()))
}
