use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Builds a binary node from its parts.
fn binary(left: Node, op: BinaryOperator, right: Node, line: usize) -> Node {
    Node::Binary { left: Box::new(left),
                   op,
                   right: Box::new(right),
                   line }
}

/// Parses a logical OR expression.
///
/// Grammar: `or := and [ 'or' or ]`. The right operand re-enters this same
/// level, so chained `or` groups to the right.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_and(tokens)?;
    match tokens.peek() {
        Some((Token::Or, line)) => {
            let line = *line;
            tokens.next();
            let right = parse_or(tokens)?;
            Ok(binary(left, BinaryOperator::Or, right, line))
        },
        _ => Ok(left),
    }
}

/// Parses a logical AND expression.
///
/// Grammar: `and := compare [ 'and' and ]`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_compare(tokens)?;
    match tokens.peek() {
        Some((Token::And, line)) => {
            let line = *line;
            tokens.next();
            let right = parse_and(tokens)?;
            Ok(binary(left, BinaryOperator::And, right, line))
        },
        _ => Ok(left),
    }
}

/// Parses a comparison expression.
///
/// Grammar: `compare := sum [ op compare ]` where `op` is one of `==`, `!=`,
/// `<`, `>`, `<=`, `>=`. All six comparison operators share a single
/// precedence level.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_compare<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_sum(tokens)?;
    let op = match tokens.peek() {
        Some((Token::EqualEqual, _)) => BinaryOperator::Equal,
        Some((Token::BangEqual, _)) => BinaryOperator::NotEqual,
        Some((Token::Lower, _)) => BinaryOperator::Lower,
        Some((Token::Greater, _)) => BinaryOperator::Greater,
        Some((Token::LowerEqual, _)) => BinaryOperator::LowerEqual,
        Some((Token::GreaterEqual, _)) => BinaryOperator::GreaterEqual,
        _ => return Ok(left),
    };
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    tokens.next();
    let right = parse_compare(tokens)?;
    Ok(binary(left, op, right, line))
}

/// Parses a sum expression.
///
/// Grammar: `sum := mul [ ('+' | '-') sum ]`. Note the right operand
/// re-enters the sum level, so `1 - 2 - 3` parses as `1 - (2 - 3)`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_sum<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_mul(tokens)?;
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => BinaryOperator::Plus,
        Some((Token::Minus, _)) => BinaryOperator::Minus,
        _ => return Ok(left),
    };
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    tokens.next();
    let right = parse_sum(tokens)?;
    Ok(binary(left, op, right, line))
}

/// Parses a multiplication expression.
///
/// Grammar: `mul := mod [ ('*' | '/') mul ]`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_mul<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_mod(tokens)?;
    let op = match tokens.peek() {
        Some((Token::Star, _)) => BinaryOperator::Mult,
        Some((Token::Slash, _)) => BinaryOperator::Div,
        _ => return Ok(left),
    };
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    tokens.next();
    let right = parse_mul(tokens)?;
    Ok(binary(left, op, right, line))
}

/// Parses a modulo expression.
///
/// Grammar: `mod := unary [ '%' mod ]`. Modulo binds tighter than
/// multiplication and division.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_mod<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_unary(tokens)?;
    match tokens.peek() {
        Some((Token::Percent, line)) => {
            let line = *line;
            tokens.next();
            let right = parse_mod(tokens)?;
            Ok(binary(left, BinaryOperator::Mod, right, line))
        },
        _ => Ok(left),
    }
}
