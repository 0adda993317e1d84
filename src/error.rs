/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: malformed
/// numbers, unterminated strings, unsupported unit suffixes and unknown
/// characters.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence. Parse errors describe the expected token and the token
/// that was actually found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined names, writes to constants, argument count
/// mismatches, operand type mismatches, division by zero and unknown units.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};

/// Any failure produced while executing a single statement.
///
/// Each phase has its own error type; this enum lets the statement boundary
/// propagate all of them with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The token sequence did not form a statement.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
