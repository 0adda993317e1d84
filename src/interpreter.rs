/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic, unit conversion and comparisons, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, constants, builtins and user-defined functions.
/// - Reports runtime errors such as division by zero or unknown units.
pub mod evaluator;
/// The environment a session evaluates against.
///
/// Holds global variables, the fixed constants, declared functions and the
/// builtin table, plus the call frames used while a user function runs.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each corresponding to a meaningful language element such as a
/// number, a unit-bearing number, a string, an identifier, an operator or a
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Fuses a number with an immediately following unit symbol.
/// - Reports lexical errors with the character position of the failure.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer and
/// constructs the AST of exactly one statement.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Encodes operator precedence and associativity.
/// - Reports the expected and the found token on any deviation.
pub mod parser;
/// The unit table.
///
/// A static registry of unit symbols with one conversion factor each,
/// relative to a single implicit base.
pub mod units;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during interpretation: naturals,
/// reals, unit-bearing numbers, strings, booleans and the function marker,
/// together with their display formatting.
pub mod value;
