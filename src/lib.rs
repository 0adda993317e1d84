//! # umni
//!
//! umni is a small calculation language written in Rust. It mixes plain
//! numbers, strings, booleans and numbers carrying a length or data-size
//! unit, with user-defined functions and unit conversion as an operator.
//!
//! ```
//! use umni::{Session, interpreter::value::core::Value};
//!
//! let mut session = Session::new();
//! session.execute_line("fn area(w, h) = w * h").unwrap();
//! assert_eq!(session.execute_line("area(3, 4)").unwrap(), Some(Value::Natural(12)));
//! assert_eq!(session.execute_line("1024kb to mb").unwrap().unwrap().render(), "1mb");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of one statement as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node type for every language construct.
/// - Shares function declarations so the function table can keep them.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while executing a
/// statement. Each carries structured fields (the offending token, name,
/// unit or argument count) and renders its human-readable message only
/// through `Display`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Groups runtime errors into the kinds name, arity, type, arithmetic and
///   unit.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the environment,
/// the unit table and value representations.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for tokenizing, parsing and evaluating
///   statements.
pub mod interpreter;
/// Line-by-line execution of documents against one environment.
pub mod session;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers that are used throughout the
/// lexer and evaluator: checked conversions between `i64` and `f64`, the
/// integral check behind Natural/Real reclassification, and repetition
/// counts.
pub mod util;

pub use error::Error;
pub use session::{LineOutcome, Session};

use crate::interpreter::value::core::Value;

/// Returns the final evaluation result after execution.
///
/// Every line of `source` is executed in order against one fresh session.
/// Execution stops at the first failing line. Blank lines are skipped.
///
/// # Parameters
/// - `source`: The document to execute.
/// - `auto_print`: Print the last produced value to stdout.
///
/// # Returns
/// The value of the last non-blank line, or `None` if there was none.
///
/// # Errors
/// Returns the error of the first line that fails.
///
/// # Examples
/// ```
/// use umni::{get_result, interpreter::value::core::Value};
///
/// let res = get_result("x = 2 + 2\nx * 10", false);
/// assert_eq!(res.unwrap(), Some(Value::Natural(40)));
///
/// // 'y' is not defined
/// let res = get_result("x = y + 1", false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<Value>, Error> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines() {
        if let Some(value) = session.execute_line(line)? {
            result = Some(value);
        }
    }

    if auto_print && let Some(v) = &result {
        println!("{v}");
    }

    Ok(result)
}
