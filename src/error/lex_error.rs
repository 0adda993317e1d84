/// The reason a piece of source text could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A number had more than one decimal point or a misplaced underscore.
    InvalidNumberFormat,
    /// A string literal ran off the end of the input.
    UnterminatedString,
    /// Letters directly after a number did not name a registered unit.
    UnsupportedUnit(String),
    /// A character that starts no token.
    UnknownCharacter(char),
    /// An integer literal too large to be represented exactly.
    LiteralTooLarge,
}

impl Default for LexErrorKind {
    // The lexer reports unmatched input through `Default`; the actual
    // character is filled in by `tokenize` from the offending slice.
    fn default() -> Self {
        Self::UnknownCharacter('\0')
    }
}

/// A tokenizer failure together with the character offset where it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// What went wrong.
    pub kind:     LexErrorKind,
    /// Zero-based character offset of the offending lexeme.
    pub position: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.position;
        match &self.kind {
            LexErrorKind::InvalidNumberFormat => {
                write!(f, "Lexer error at position {position}: Invalid number format.")
            },
            LexErrorKind::UnterminatedString => {
                write!(f, "Lexer error at position {position}: Unterminated string literal.")
            },
            LexErrorKind::UnsupportedUnit(unit) => {
                write!(f, "Lexer error at position {position}: Unsupported unit '{unit}'.")
            },
            LexErrorKind::UnknownCharacter(c) => {
                write!(f, "Lexer error at position {position}: Unknown character '{c}'.")
            },
            LexErrorKind::LiteralTooLarge => {
                write!(f, "Lexer error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
