use std::iter::Peekable;

use crate::{
    ast::{ClassDef, ClassMember, Element, Param},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::{parse_define, parse_statement},
            utils::{current_line, describe, parse_comma_separated},
        },
    },
};

/// Parses a top-level element.
///
/// The only element form is a class declaration; anything else is rejected.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed element.
///
/// # Errors
/// Returns `ParseError::ExpectedElement` if the input does not start with
/// `class`.
pub fn parse_element<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Element>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Class, _)) => parse_class(tokens).map(Element::Class),
        other => {
            let line = other.map_or(0, |(_, line)| *line);
            Err(ParseError::ExpectedElement { found: describe(other.copied()),
                                              line })
        },
    }
}

/// Parses a class declaration.
///
/// Grammar:
///
/// ```text
///     class := 'class' IDENT 'do' member* 'end'
///     member := function | init | field
///     function := 'function' IDENT '(' params ')' statement
///     init := 'init' '(' params ')' statement
///     field := def-statement
///     params := [ param (',' param)* ]
///     param := IDENT [ ':' IDENT ]
/// ```
///
/// # Errors
/// One error kind per grammar expectation: `ExpectedClassName`,
/// `ExpectedDo`, `ExpectedClassMember`, `ExpectedParamName`,
/// `ExpectedTypeName` and `ExpectedEnd`.
pub fn parse_class<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ClassDef>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        other => {
            return Err(ParseError::ExpectedClassName { found: describe(other),
                                                       line });
        },
    };
    match tokens.next() {
        Some((Token::Do, _)) => {},
        other => {
            return Err(ParseError::ExpectedDo { found: describe(other),
                                                line });
        },
    }
    let mut members = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::End, _)) => {
                tokens.next();
                break;
            },
            Some(_) => members.push(parse_class_member(tokens)?),
            None => {
                return Err(ParseError::ExpectedEnd { found: describe(None),
                                                     line });
            },
        }
    }
    Ok(ClassDef { name,
                  members,
                  line })
}

/// Parses one class member: a function, an initializer or a field.
fn parse_class_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ClassMember>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Function, _)) => parse_function(tokens),
        Some((Token::Init, _)) => parse_init(tokens),
        Some((Token::Def, _)) => {
            let define = parse_define(tokens)?;
            Ok(ClassMember::Field { define })
        },
        other => {
            let line = other.map_or(0, |(_, line)| *line);
            Err(ParseError::ExpectedClassMember { found: describe(other.copied()),
                                                  line })
        },
    }
}

/// Parses a named function member: `function NAME ( params ) statement`.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ClassMember>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        other => {
            return Err(ParseError::ExpectedIdentifier { found: describe(other),
                                                        line });
        },
    };
    let params = parse_param_list(tokens, line)?;
    let body = parse_statement(tokens)?;
    Ok(ClassMember::Function { name,
                               params,
                               body })
}

/// Parses an initializer member: `init ( params ) statement`.
fn parse_init<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ClassMember>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    tokens.next();
    let params = parse_param_list(tokens, line)?;
    let body = parse_statement(tokens)?;
    Ok(ClassMember::Init { params,
                           body })
}

/// Parses a parenthesized, comma-separated parameter list.
fn parse_param_list<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Param>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        other => {
            return Err(ParseError::UnexpectedToken { token: describe(other),
                                                     line });
        },
    }
    parse_comma_separated(tokens, parse_param, &Token::RParen)
}

/// Parses one parameter: `NAME [ ':' TYPE ]`.
fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Param>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        other => {
            return Err(ParseError::ExpectedParamName { found: describe(other),
                                                       line });
        },
    };
    let type_name = match tokens.peek() {
        Some((Token::Colon, _)) => {
            tokens.next();
            match tokens.next() {
                Some((Token::Identifier(name), _)) => Some(name.clone()),
                other => {
                    return Err(ParseError::ExpectedTypeName { found: describe(other),
                                                              line });
                },
            }
        },
        _ => None,
    };
    Ok(Param { name,
               type_name })
}
