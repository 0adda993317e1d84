use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::describe,
        },
    },
    error::ParseError,
};

/// Core expression entry points and the ternary level.
///
/// Holds [`core::ParseResult`] and [`core::parse_expression`], which every
/// nested construct (grouping, call arguments, ternary branches, function
/// bodies) recurses into.
pub mod core;

/// Statement-level parsing: function declarations and assignment chains.
pub mod statement;

/// Binary operator levels.
///
/// Comparison, unit conversion, additive and multiplicative precedence
/// levels, each a left-to-right fold over its operands.
pub mod binary;

/// Unary operators and primary expressions.
pub mod unary;

/// Helpers shared across the parser modules.
pub mod utils;

/// Parses exactly one statement from a token sequence.
///
/// The sequence must end with [`Token::EndOfInput`] directly after the
/// statement; anything else left over is a parse error.
///
/// # Parameters
/// - `tokens`: Output of [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root [`Expr`] of the statement.
///
/// # Errors
/// Returns a [`ParseError`] describing the expected and the found token.
///
/// # Example
/// ```
/// use umni::{
///     ast::{BinaryOperator, Expr, NumberLiteral},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let ast = parse(&tokenize("1 + 2").unwrap()).unwrap();
/// assert_eq!(ast,
///            Expr::BinaryOp { left:  Box::new(Expr::Number(NumberLiteral::Natural(1))),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Number(NumberLiteral::Natural(2))), });
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;

    match iter.next() {
        Some(Token::EndOfInput) => {
            log::trace!("parsed statement: {statement:?}");
            Ok(statement)
        },
        Some(tok) => Err(ParseError::UnexpectedTrailingTokens { found: describe(Some(tok)) }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        ast::{BinaryOperator, FunctionDef, NumberLiteral, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn ast(source: &str) -> Expr {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn fail(source: &str) -> ParseError {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    fn nat(n: i64) -> Box<Expr> {
        Box::new(Expr::Number(NumberLiteral::Natural(n)))
    }

    fn var(name: &str) -> Box<Expr> {
        Box::new(Expr::Variable { name: name.to_string() })
    }

    fn bin(left: Box<Expr>, op: BinaryOperator, right: Box<Expr>) -> Box<Expr> {
        Box::new(Expr::BinaryOp { left, op, right })
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(ast("1 + 2 * 3"),
                   *bin(nat(1), BinaryOperator::Add, bin(nat(2), BinaryOperator::Mul, nat(3))));
        assert_eq!(ast("(1 + 2) * 3"),
                   *bin(bin(nat(1), BinaryOperator::Add, nat(2)), BinaryOperator::Mul, nat(3)));
    }

    #[test]
    fn times_is_multiplication() {
        assert_eq!(ast("2 times 3"), ast("2 * 3"));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(ast("10 - 4 - 3"),
                   *bin(bin(nat(10), BinaryOperator::Sub, nat(4)), BinaryOperator::Sub, nat(3)));
    }

    #[test]
    fn conversion_binds_looser_than_additive() {
        let expected = Expr::UnitConversion {
            expr: bin(Box::new(Expr::UnitLiteral { value: 1.0,
                                                   unit:  "km".to_string(), }),
                      BinaryOperator::Sub,
                      Box::new(Expr::UnitLiteral { value: 500.0,
                                                   unit:  "m".to_string(), })),
            unit: "m".to_string(),
        };
        assert_eq!(ast("1km - 500m to m"), expected);
    }

    #[test]
    fn conversions_chain() {
        let Expr::UnitConversion { expr, unit } = ast("5km to m to cm") else {
            panic!("expected a conversion");
        };
        assert_eq!(unit, "cm");
        assert!(matches!(*expr, Expr::UnitConversion { ref unit, .. } if unit == "m"));
    }

    #[test]
    fn comparison_right_side_is_additive() {
        assert!(matches!(fail("1 < 2km to m"), ParseError::UnexpectedTrailingTokens { .. }));
        assert_eq!(ast("1 + 1 == 2"),
                   *bin(bin(nat(1), BinaryOperator::Add, nat(1)), BinaryOperator::Equal, nat(2)));
    }

    #[test]
    fn unary_operators_nest() {
        let expected = Expr::UnaryOp { op:   UnaryOperator::Not,
                                       expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Not,
                                                                      expr: var("a"), }), };
        assert_eq!(ast("!!a"), expected);
        assert_eq!(ast("--2"),
                   Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                                  expr: nat(2), }), });
    }

    #[test]
    fn assignment_chains_to_the_right() {
        let expected = Expr::Assignment {
            target: var("x"),
            value:  Box::new(Expr::Assignment { target: var("y"),
                                                value:  nat(5), }),
        };
        assert_eq!(ast("x = y = 5"), expected);
    }

    #[test]
    fn assignment_target_is_not_checked_while_parsing() {
        assert!(matches!(ast("1 = 2"), Expr::Assignment { .. }));
    }

    #[test]
    fn ternary_nests_in_the_else_branch() {
        let Expr::Ternary { else_branch, .. } = ast("a ? 1 : b ? 2 : 3") else {
            panic!("expected a ternary");
        };
        assert!(matches!(*else_branch, Expr::Ternary { .. }));
    }

    #[test]
    fn ternary_without_colon_fails() {
        assert_eq!(fail("a ? 1 2"),
                   ParseError::ExpectedTernaryColon { found: "number 2".to_string() });
    }

    #[test]
    fn function_declaration() {
        let expected = FunctionDef { name:   "add".to_string(),
                                     params: vec!["x".to_string(), "y".to_string()],
                                     body:   *bin(var("x"), BinaryOperator::Add, var("y")), };
        assert_eq!(ast("fn add(x, y) = x + y"), Expr::FunctionDecl(Rc::new(expected)));
    }

    #[test]
    fn function_declaration_without_params() {
        let Expr::FunctionDecl(def) = ast("fn one() = 1") else {
            panic!("expected a declaration");
        };
        assert!(def.params.is_empty());
    }

    #[test]
    fn malformed_declarations_fail() {
        assert!(matches!(fail("fn (x) = x"), ParseError::UnexpectedToken { .. }));
        assert!(matches!(fail("fn f(x) x"), ParseError::UnexpectedToken { .. }));
        assert!(matches!(fail("fn f(x, 1) = x"), ParseError::UnexpectedToken { .. }));
        assert!(matches!(fail("fn f(x = x"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn calls_take_expressions() {
        let expected = Expr::FunctionCall { name:      "f".to_string(),
                                            arguments: vec![*bin(nat(1), BinaryOperator::Add, nat(2)),
                                                            *var("x")], };
        assert_eq!(ast("f(1 + 2, x)"), expected);
        assert_eq!(ast("f()"),
                   Expr::FunctionCall { name:      "f".to_string(),
                                        arguments: vec![], });
    }

    #[test]
    fn to_requires_a_unit() {
        assert_eq!(fail("5 to x"),
                   ParseError::ExpectedUnit { found: "identifier 'x'".to_string() });
        assert_eq!(fail("5 to"), ParseError::ExpectedUnit { found: "end of input".to_string() });
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(fail("1 2"),
                   ParseError::UnexpectedTrailingTokens { found: "number 2".to_string() });
        assert!(matches!(fail("(1"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn missing_operand_reports_end_of_input() {
        assert_eq!(fail("1 +"),
                   ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                 found:    "end of input".to_string(), });
    }

    #[test]
    fn tokens_without_end_marker() {
        let tokens = vec![Token::Natural(1)];
        assert_eq!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput));
    }
}
