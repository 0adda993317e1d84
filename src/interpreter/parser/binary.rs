use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{SemanticOperator, SymbolicOperator, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::describe},
    },
};

/// Maps a token to the binary operator it spells, if any.
///
/// `times` maps to [`BinaryOperator::Mul`], the same as `*`.
///
/// # Example
/// ```
/// use umni::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{SemanticOperator, SymbolicOperator, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::SymbolicOperator(SymbolicOperator::Plus)),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::SemanticOperator(SemanticOperator::Times)),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::SymbolicOperator(op) => match op {
            SymbolicOperator::Plus => Some(BinaryOperator::Add),
            SymbolicOperator::Minus => Some(BinaryOperator::Sub),
            SymbolicOperator::Star => Some(BinaryOperator::Mul),
            SymbolicOperator::Slash => Some(BinaryOperator::Div),
            SymbolicOperator::Less => Some(BinaryOperator::Less),
            SymbolicOperator::Greater => Some(BinaryOperator::Greater),
            SymbolicOperator::LessEqual => Some(BinaryOperator::LessEqual),
            SymbolicOperator::GreaterEqual => Some(BinaryOperator::GreaterEqual),
            SymbolicOperator::EqualEqual => Some(BinaryOperator::Equal),
            SymbolicOperator::BangEqual => Some(BinaryOperator::NotEqual),
            SymbolicOperator::Bang | SymbolicOperator::Question | SymbolicOperator::Colon => None,
        },
        Token::SemanticOperator(SemanticOperator::Times) => Some(BinaryOperator::Mul),
        _ => None,
    }
}

/// Folds a left-associative chain of operators accepted by `accepts`.
fn parse_left_fold<'a, I>(tokens: &mut Peekable<I>,
                          operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                          right_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens)?;

    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = right_operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }

    Ok(left)
}

/// Parses comparison chains.
///
/// The left-most operand is parsed at the conversion level; every operand to
/// the right of a comparison operator is parsed at the additive level, so
/// `1 < 2km to m` does not parse.
///
/// Grammar: `comparison := conversion (("<" | "<=" | ">" | ">=" | "==" | "!=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_fold(tokens, parse_conversion, parse_additive, BinaryOperator::is_comparison)
}

/// Parses unit conversions.
///
/// Conversion binds looser than `+`/`-`, so `1km - 500m to m` converts the
/// difference. Conversions chain left to right.
///
/// Grammar: `conversion := additive ("to" UNIT)*`
///
/// # Errors
/// Returns `ParseError::ExpectedUnit` if `to` is not followed by a unit.
pub fn parse_conversion<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_additive(tokens)?;

    while let Some(Token::SemanticOperator(SemanticOperator::To)) = tokens.peek() {
        tokens.next();
        match tokens.next() {
            Some(Token::Unit(unit)) => {
                expr = Expr::UnitConversion { expr: Box::new(expr),
                                              unit: unit.clone(), };
            },
            found => return Err(ParseError::ExpectedUnit { found: describe(found) }),
        }
    }

    Ok(expr)
}

/// Parses addition and subtraction.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_fold(tokens, parse_multiplicative, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "times") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_fold(tokens, parse_unary, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}
