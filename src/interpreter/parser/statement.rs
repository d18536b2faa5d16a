use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{parse_expression, ParseResult},
            utils::{current_line, describe, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// Dispatches on the current token: `if`, `while`, `repeat`, `def`,
/// `return`, `up`, `break`, `continue` and `do` introduce their statement
/// forms; anything else is parsed as a bare expression. Statements are not
/// separated by terminators, the grammar is self-delimiting.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statement node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Repeat, _)) => parse_repeat(tokens),
        Some((Token::Def, _)) => parse_define(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Up, _)) => parse_up(tokens),
        Some((Token::Break, line)) => {
            let line = *line;
            tokens.next();
            Ok(Node::Break { line })
        },
        Some((Token::Continue, line)) => {
            let line = *line;
            tokens.next();
            Ok(Node::Continue { line })
        },
        Some((Token::Do, _)) => parse_block(tokens),
        _ => parse_expression(tokens),
    }
}

/// Parses an `if` statement: `if CONDITION COMMAND`.
///
/// The command is a full statement, so `if` can directly guard a `do` block,
/// a loop or another `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let condition = parse_expression(tokens)?;
    let command = parse_statement(tokens)?;
    Ok(Node::If { condition: Box::new(condition),
                  command: Box::new(command),
                  line })
}

/// Parses a `while` loop: `while CONDITION COMMAND`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let condition = parse_expression(tokens)?;
    let command = parse_statement(tokens)?;
    Ok(Node::While { condition: Box::new(condition),
                     command: Box::new(command),
                     line })
}

/// Parses a `repeat` loop: `repeat COMMAND CONDITION`.
///
/// Note the order: the body comes first, the condition second. The body
/// always runs at least once.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let command = parse_statement(tokens)?;
    let condition = parse_expression(tokens)?;
    Ok(Node::Repeat { condition: Box::new(condition),
                      command: Box::new(command),
                      line })
}

/// Parses a `def` statement: `def NAME [, NAME]* [= EXPR [, EXPR]*]`.
///
/// Target and value counts are not required to match; the declaration is
/// kept structural and arity is left to the consumer.
pub(in crate::interpreter::parser) fn parse_define<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let mut targets = vec![parse_identifier(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        targets.push(parse_identifier(tokens)?);
    }
    let mut values = Vec::new();
    if let Some((Token::Assign, _)) = tokens.peek() {
        tokens.next();
        values.push(parse_expression(tokens)?);
        while let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            values.push(parse_expression(tokens)?);
        }
    }
    Ok(Node::Define { targets,
                      values,
                      line })
}

/// Parses a `return` statement: `return EXPR`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let value = parse_expression(tokens)?;
    Ok(Node::Return { value: Box::new(value),
                      line })
}

/// Parses an `up` statement: `up EXPR`.
fn parse_up<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let value = parse_expression(tokens)?;
    Ok(Node::Up { value: Box::new(value),
                  line })
}

/// Parses a `do ... end` block of statements.
///
/// # Errors
/// Returns `ParseError::ExpectedEnd` if the input ends before the matching
/// `end`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::End, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::ExpectedEnd { found: describe(None),
                                                     line });
            },
        }
    }
    Ok(Node::Block { statements,
                     line })
}
