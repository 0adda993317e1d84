use logos::Logos;

use crate::{
    error::{LexError, LexErrorKind},
    interpreter::units,
    util::num::i64_to_f64_checked,
};

/// Operators spelled with symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolicOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `!`
    Bang,
    /// `?`
    Question,
    /// `:`
    Colon,
}

impl std::fmt::Display for SymbolicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Bang => "!",
            Self::Question => "?",
            Self::Colon => ":",
        };
        write!(f, "{symbol}")
    }
}

/// Operators spelled as keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticOperator {
    /// `to`, unit conversion.
    To,
    /// `times`, an alias for `*`.
    Times,
}

/// Represents a lexical token in the source input.
///
/// A token sequence produced by [`tokenize`] always ends with
/// [`Token::EndOfInput`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer literal such as `42` or `1_000`.
    Natural(i64),
    /// Literal with a decimal point such as `3.14`.
    Real(f64),
    /// Number immediately followed by a unit symbol, such as `5km`.
    WithUnit(f64, String),
    /// Text between single or double quotes.
    StringLiteral(String),
    /// Variable or function name.
    Identifier(String),
    /// A unit symbol standing on its own, as in `5km to m`.
    Unit(String),
    /// `+ - * / > >= < <= == != ! ? :`
    SymbolicOperator(SymbolicOperator),
    /// `to` or `times`.
    SemanticOperator(SemanticOperator),
    /// `fn`
    FunctionKeyword,
    /// `=`
    Assign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// Marks the end of the token sequence.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural(n) => write!(f, "number {n}"),
            Self::Real(r) => write!(f, "number {r}"),
            Self::WithUnit(v, unit) => write!(f, "number {v}{unit}"),
            Self::StringLiteral(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Unit(unit) => write!(f, "unit '{unit}'"),
            Self::SymbolicOperator(op) => write!(f, "'{op}'"),
            Self::SemanticOperator(SemanticOperator::To) => write!(f, "'to'"),
            Self::SemanticOperator(SemanticOperator::Times) => write!(f, "'times'"),
            Self::FunctionKeyword => write!(f, "'fn'"),
            Self::Assign => write!(f, "'='"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Raw lexemes recognised by the scanner before they become [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
enum Lexeme {
    /// Digits, underscores and dots, optionally fused with a unit suffix.
    #[regex(r"[0-9][0-9_.]*[a-zA-Z]*", lex_number)]
    Number(Token),
    /// Identifiers, keywords and standalone units.
    #[regex(r"[a-zA-Z_가-힣][a-zA-Z0-9_가-힣]*", lex_word)]
    Word(Token),
    /// `"..."` or `'...'`; the closing quote is optional so a missing one can
    /// be reported.
    #[regex(r#""[^"]*"?"#, |lex| lex_string(lex, '"'), allow_greedy = true)]
    #[regex(r"'[^']*'?", |lex| lex_string(lex, '\''), allow_greedy = true)]
    Str(String),
    #[token("+", |_| SymbolicOperator::Plus)]
    #[token("-", |_| SymbolicOperator::Minus)]
    #[token("*", |_| SymbolicOperator::Star)]
    #[token("/", |_| SymbolicOperator::Slash)]
    #[token(">", |_| SymbolicOperator::Greater)]
    #[token(">=", |_| SymbolicOperator::GreaterEqual)]
    #[token("<", |_| SymbolicOperator::Less)]
    #[token("<=", |_| SymbolicOperator::LessEqual)]
    #[token("==", |_| SymbolicOperator::EqualEqual)]
    #[token("!=", |_| SymbolicOperator::BangEqual)]
    #[token("!", |_| SymbolicOperator::Bang)]
    #[token("?", |_| SymbolicOperator::Question)]
    #[token(":", |_| SymbolicOperator::Colon)]
    Symbolic(SymbolicOperator),
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Validates the numeric part of a number lexeme.
///
/// Underscores are only allowed between two digits and at most one decimal
/// point may appear. Returns the digits with underscores removed and whether a
/// decimal point was present.
fn normalize_digits(text: &str) -> Result<(String, bool), LexErrorKind> {
    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(chars.len());
    let mut has_dot = false;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '.' => {
                if has_dot {
                    return Err(LexErrorKind::InvalidNumberFormat);
                }
                has_dot = true;
                digits.push(c);
            },
            '_' => {
                let between_digits = i > 0
                                     && chars[i - 1].is_ascii_digit()
                                     && chars.get(i + 1).is_some_and(char::is_ascii_digit);
                if !between_digits {
                    return Err(LexErrorKind::InvalidNumberFormat);
                }
            },
            _ => digits.push(c),
        }
    }

    Ok((digits, has_dot))
}

/// Turns a number lexeme into a `Natural`, `Real` or `WithUnit` token.
fn lex_number(lex: &logos::Lexer<Lexeme>) -> Result<Token, LexErrorKind> {
    let slice = lex.slice();
    let split = slice.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(slice.len());
    let (number, unit) = slice.split_at(split);
    let (digits, has_dot) = normalize_digits(number)?;

    if !unit.is_empty() {
        if !units::is_supported(unit) {
            return Err(LexErrorKind::UnsupportedUnit(unit.to_string()));
        }
        let value = digits.parse::<f64>()
                          .map_err(|_| LexErrorKind::InvalidNumberFormat)?;
        return Ok(Token::WithUnit(value, unit.to_string()));
    }

    if has_dot {
        return digits.parse::<f64>()
                     .map(Token::Real)
                     .map_err(|_| LexErrorKind::InvalidNumberFormat);
    }

    let value = digits.parse::<i64>()
                      .map_err(|_| LexErrorKind::LiteralTooLarge)?;
    i64_to_f64_checked(value, LexErrorKind::LiteralTooLarge)?;
    Ok(Token::Natural(value))
}

/// Classifies a word as keyword, unit symbol or identifier.
fn lex_word(lex: &logos::Lexer<Lexeme>) -> Token {
    match lex.slice() {
        "fn" => Token::FunctionKeyword,
        "to" => Token::SemanticOperator(SemanticOperator::To),
        "times" => Token::SemanticOperator(SemanticOperator::Times),
        word if units::is_supported(word) => Token::Unit(word.to_string()),
        word => Token::Identifier(word.to_string()),
    }
}

/// Strips the delimiters from a string lexeme.
fn lex_string(lex: &logos::Lexer<Lexeme>, delimiter: char) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    if slice.len() < 2 || !slice.ends_with(delimiter) {
        return Err(LexErrorKind::UnterminatedString);
    }
    Ok(slice[1..slice.len() - 1].to_string())
}

/// Converts source text into a token sequence terminated by
/// [`Token::EndOfInput`].
///
/// Whitespace separates tokens and decides whether letters after a number are
/// its unit suffix (`5km`) or the next word (`5 km`).
///
/// # Errors
/// Returns the first [`LexError`] encountered; no tokens are returned in that
/// case.
///
/// # Example
/// ```
/// use umni::interpreter::lexer::{SemanticOperator, Token, tokenize};
///
/// let tokens = tokenize("5km to m").unwrap();
/// assert_eq!(tokens,
///            vec![Token::WithUnit(5.0, "km".to_string()),
///                 Token::SemanticOperator(SemanticOperator::To),
///                 Token::Unit("m".to_string()),
///                 Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = source[..lexer.span().start].chars().count();
        let lexeme = lexeme.map_err(|kind| {
                               let kind = match kind {
                                   LexErrorKind::UnknownCharacter(_) => {
                                       LexErrorKind::UnknownCharacter(lexer.slice()
                                                                           .chars()
                                                                           .next()
                                                                           .unwrap_or('\0'))
                                   },
                                   other => other,
                               };
                               LexError { kind, position }
                           })?;

        tokens.push(match lexeme {
                        Lexeme::Number(token) | Lexeme::Word(token) => token,
                        Lexeme::Str(text) => Token::StringLiteral(text),
                        Lexeme::Symbolic(op) => Token::SymbolicOperator(op),
                        Lexeme::Assign => Token::Assign,
                        Lexeme::LParen => Token::LeftParen,
                        Lexeme::RParen => Token::RightParen,
                        Lexeme::Comma => Token::Comma,
                        Lexeme::Ignored => continue,
                    });
    }

    tokens.push(Token::EndOfInput);
    log::trace!("tokenized {} tokens from {source:?}", tokens.len());
    Ok(tokens)
}
