use std::iter::Peekable;

use crate::{
    ast::{LiteralValue, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{parse_expression, ParseResult},
            utils::describe,
        },
    },
};

/// Parses a unary expression.
///
/// Grammar: `unary := [ '!' | '-' ] literal`. The operand sits at the
/// literal level, so unary operators do not chain: `--1` is a parse error.
/// Without a leading operator this falls through to [`parse_literal`].
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Bang, _)) => UnaryOperator::Not,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        _ => return parse_literal(tokens),
    };
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    tokens.next();
    let expr = parse_literal(tokens)?;
    Ok(Node::Unary { op,
                     expr: Box::new(expr),
                     line })
}

/// Parses a literal expression.
///
/// Handles parenthesized sub-expressions, identifiers and the literal forms
/// `true`, `false`, `nil`, strings and numbers. A parenthesized expression
/// restarts the grammar at the top, which is how grouping overrides
/// precedence.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `ParseError::ExpectedClosingParen` if a `(` is not matched by a `)`.
/// - `ParseError::InvalidNumericLiteral` if a numeric lexeme does not parse
///   as `f64`.
/// - `ParseError::ExpectedLiteral` for any other token, or at end of input.
pub fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::LParen, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Some((Token::Identifier(name), line)) => {
            let node = Node::Identifier { name: name.clone(),
                                          line: *line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::True, line)) => {
            let node = Node::Literal { value: LiteralValue::Bool(true),
                                       line:  *line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::False, line)) => {
            let node = Node::Literal { value: LiteralValue::Bool(false),
                                       line:  *line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::Nil, line)) => {
            let node = Node::Literal { value: LiteralValue::Nil,
                                       line:  *line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::String(text), line)) => {
            let node = Node::Literal { value: LiteralValue::String(text.clone()),
                                       line:  *line, };
            tokens.next();
            Ok(node)
        },
        Some((Token::Number(lexeme), line)) => {
            let line = *line;
            let parsed = lexeme.parse::<f64>()
                               .map_err(|_| ParseError::InvalidNumericLiteral { lexeme: lexeme.clone(),
                                                                                line })?;
            tokens.next();
            Ok(Node::Literal { value: LiteralValue::Number(parsed),
                               line })
        },
        other => {
            let line = other.map_or(0, |(_, line)| *line);
            Err(ParseError::ExpectedLiteral { found: describe(other.copied()),
                                              line })
        },
    }
}
