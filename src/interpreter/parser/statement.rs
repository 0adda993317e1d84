use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, parse_ternary},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a function declaration (it starts with `fn`) or an
/// assignment chain, which degenerates to a plain expression when there is
/// no `=`.
///
/// Grammar: `statement := function_decl | assignment`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a line.
///
/// # Returns
/// The parsed statement node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::FunctionKeyword) = tokens.peek() {
        tokens.next();
        return parse_function_declaration(tokens);
    }
    parse_assignment(tokens)
}

/// Parses a right-associative assignment chain.
///
/// The target is parsed as an ordinary expression; checking that it names a
/// variable is left to evaluation.
///
/// Grammar: `assignment := ternary ("=" assignment)?`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_ternary(tokens)?;

    if let Some(Token::Assign) = tokens.peek() {
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::Assignment { target: Box::new(target),
                                     value:  Box::new(value), });
    }

    Ok(target)
}

/// Parses a function declaration after the `fn` keyword.
///
/// Grammar: `function_decl := "fn" IDENT "(" (IDENT ("," IDENT)*)? ")" "=" expression`
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - the parameter list is not closed,
/// - the `=` is missing,
/// - the body fails to parse.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LeftParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RightParen)?;
    expect_token(tokens, &Token::Assign)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::FunctionDecl(Rc::new(FunctionDef { name,
                                                params,
                                                body })))
}
