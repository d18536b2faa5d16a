use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Describes a token stream entry for use in error messages.
///
/// Returns a debug rendering of the token, or `end of input` when the stream
/// is exhausted.
pub(in crate::interpreter::parser) fn describe(entry: Option<&(Token, usize)>) -> String {
    match entry {
        Some((token, _)) => format!("{token:?}"),
        None => "end of input".to_string(),
    }
}

/// Returns the source line of the current token, or `0` at end of input.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, line)| *line)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`; it is consumed on success.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns `ParseError::ExpectedIdentifier` if the next token is not an
/// identifier or the input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, line)) => Err(ParseError::ExpectedIdentifier { found: format!("{token:?}"),
                                                                    line:  *line, }),
        None => Err(ParseError::ExpectedIdentifier { found: "end of input".to_string(),
                                                     line }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the specified closing token to end it. The
/// closing token is consumed. An immediately encountered closing token
/// produces an empty list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek() {
        if token == closing {
            tokens.next();
            return Ok(items);
        }
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if token == closing => {
                tokens.next();
                break;
            },
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {token:?}"),
                                                         line:  *line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line: 0 });
            },
        }
    }
    Ok(items)
}
