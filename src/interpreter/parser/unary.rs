use std::iter::Peekable;

use crate::{
    ast::{Expr, NumberLiteral, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{SymbolicOperator, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{describe, expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `-` and `!`, applied recursively so `--x` and `!!x` nest.
///
/// Grammar: `unary := ("-" | "!") unary | primary`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a unary operator or primary.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek() {
        Some(Token::SymbolicOperator(SymbolicOperator::Minus)) => UnaryOperator::Negate,
        Some(Token::SymbolicOperator(SymbolicOperator::Bang)) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };
    tokens.next();

    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses a primary expression.
///
/// Dispatches on the leading token:
/// - numbers, unit-bearing numbers and strings become literals,
/// - an identifier directly followed by `(` is a call, otherwise a variable,
/// - `(` starts a grouped expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | NUMBER_WITH_UNIT | STRING
///              | IDENT "(" arguments? ")" | IDENT
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Natural(n)) => Ok(Expr::Number(NumberLiteral::Natural(*n))),
        Some(Token::Real(r)) => Ok(Expr::Number(NumberLiteral::Real(*r))),
        Some(Token::WithUnit(value, unit)) => Ok(Expr::UnitLiteral { value: *value,
                                                                     unit:  unit.clone(), }),
        Some(Token::StringLiteral(s)) => Ok(Expr::StringLiteral(s.clone())),
        Some(Token::Identifier(name)) => parse_identifier_or_call(tokens, name),
        Some(Token::LeftParen) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RightParen)?;
            Ok(expr)
        },
        found => Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                   found:    describe(found), }),
    }
}

/// Parses what follows an identifier: a call if `(` comes next, otherwise a
/// variable reference.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::LeftParen) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RightParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments });
    }

    Ok(Expr::Variable { name: name.to_string() })
}
