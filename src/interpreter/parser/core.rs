use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{SymbolicOperator, Token},
        parser::{binary::parse_comparison, utils::describe},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for every nested expression: grouping, call
/// arguments, ternary branches and function bodies. It starts at the ternary
/// level, so assignment is only reachable from the top of a statement.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_ternary(tokens)
}

/// Parses a conditional expression.
///
/// Both branches are full expressions, which makes the operator
/// right-associative: `a ? 1 : b ? 2 : 3` nests in the else branch.
///
/// Grammar: `ternary := comparison ("?" expression ":" expression)?`
///
/// # Errors
/// Returns `ParseError::ExpectedTernaryColon` if the `:` is missing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_comparison(tokens)?;

    if let Some(Token::SymbolicOperator(SymbolicOperator::Question)) = tokens.peek() {
        tokens.next();
        let then_branch = parse_expression(tokens)?;

        match tokens.next() {
            Some(Token::SymbolicOperator(SymbolicOperator::Colon)) => {},
            found => return Err(ParseError::ExpectedTernaryColon { found: describe(found) }),
        }

        let else_branch = parse_expression(tokens)?;
        return Ok(Expr::Ternary { condition:   Box::new(condition),
                                  then_branch: Box::new(then_branch),
                                  else_branch: Box::new(else_branch), });
    }

    Ok(condition)
}
