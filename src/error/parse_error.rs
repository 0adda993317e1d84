#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
///
/// Token descriptions are rendered with the token's `Display` form, for
/// example `'+'`, `identifier 'x'` or `end of input`.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
    },
    /// A ternary `?` was not followed by a matching `:`.
    ExpectedTernaryColon {
        /// The token encountered instead of `:`.
        found: String,
    },
    /// The `to` keyword was not followed by a unit symbol.
    ExpectedUnit {
        /// The token encountered instead of a unit.
        found: String,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found: String,
    },
    /// The token sequence ended without an end-of-input marker.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Parse error: Expected {expected} but found {found}.")
            },
            Self::ExpectedTernaryColon { found } => {
                write!(f, "Parse error: Expected ':' in ternary operation but found {found}.")
            },
            Self::ExpectedUnit { found } => {
                write!(f, "Parse error: Expected unit after 'to' but found {found}.")
            },
            Self::UnexpectedTrailingTokens { found } => {
                write!(f, "Parse error: Extra tokens after statement, starting at {found}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Parse error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
