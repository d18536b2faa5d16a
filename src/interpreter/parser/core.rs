use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_or},
};

/// Result type used by the parser.
///
/// All parse functions return either a parsed node of type `T` or a
/// `ParseError` naming the expectation that failed.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy:
///
/// ```text
///     or -> and -> compare -> sum -> mul -> mod -> unary -> literal
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_or(tokens)
}
