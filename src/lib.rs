//! # genscript
//!
//! genscript is the scripting front end of a small code-generation
//! environment. It lexes, parses, and either evaluates scripts with a
//! tree-walking interpreter or emits equivalent Swift source from the parsed
//! tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::{Element, Node},
    error::ParseError,
    interpreter::{
        emitter::{emit, EmitContext},
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::{core::parse_expression, element::parse_element, statement::parse_statement},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by both the evaluator and the Swift emitter.
///
/// # Responsibilities
/// - Defines expression, statement and element types for all language
///   constructs.
/// - Attaches source line numbers to nodes for error reporting.
/// - Keeps literal values separate from runtime values.
pub mod ast;
/// Provides unified error types for parsing.
///
/// This module defines all errors that can be raised while lexing or parsing
/// code. Each error kind corresponds to one failed grammar expectation and
/// carries the offending token text and source line. Evaluation itself
/// cannot fail and has no error type.
///
/// # Responsibilities
/// - Defines one error variant per grammar expectation.
/// - Attaches line numbers and found-token descriptions for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, the value model
/// and source emission to provide a complete runtime for scripts. It hosts
/// the individual phases as submodules.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and emitter.
/// - Provides the building blocks behind the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes a source string.
///
/// Runs the lexer over the full input, pairing each token with the line it
/// starts on. Whitespace, newlines and comments are consumed by the lexer
/// and never appear in the output.
///
/// # Parameters
/// - `source`: The raw script text.
///
/// # Returns
/// The token stream as `(Token, line)` pairs.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the input contains a character
/// sequence no token rule matches.
///
/// # Examples
/// ```
/// use genscript::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("def x = 1").unwrap();
/// assert_eq!(tokens[0].0, Token::Def);
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses and evaluates a script, returning its final value.
///
/// All top-level statements are collected into one implicit block and
/// evaluated in a fresh context, so the script's result follows block
/// semantics: the first statement yielding a non-nil value ends execution
/// and becomes the result.
///
/// # Parameters
/// - `source`: The raw script text.
///
/// # Returns
/// The script's resulting [`Value`].
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails. Evaluation itself
/// cannot fail.
///
/// # Examples
/// ```
/// use genscript::{run_source, interpreter::value::Value};
///
/// let value = run_source("1 + 2 * 3").unwrap();
/// assert_eq!(value, Value::Number(7.0));
///
/// let value = run_source("repeat 5 false").unwrap();
/// assert_eq!(value, Value::Number(5.0));
/// ```
pub fn run_source(source: &str) -> Result<Value, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut statements = Vec::new();
    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    let program = Node::Block { statements,
                                line: 1 };
    let mut context = Context::new();
    Ok(context.eval(&program))
}

/// Parses a script and emits equivalent Swift source.
///
/// Each top-level statement is rendered on its own line. The parsed tree is
/// not evaluated.
///
/// # Parameters
/// - `source`: The raw script text.
///
/// # Returns
/// The generated Swift source.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails.
///
/// # Examples
/// ```
/// let swift = genscript::emit_source("def x = 1").unwrap();
/// assert_eq!(swift, "var x = 1\n");
/// ```
pub fn emit_source(source: &str) -> Result<String, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut context = EmitContext::new();
    let mut buffer = String::new();
    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter)?;
        buffer.push_str(&emit(&statement, &mut context));
        buffer.push('\n');
    }

    Ok(buffer)
}

/// Parses a single statement from a source string.
///
/// The statement must span the entire input.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails, or
/// `ParseError::UnexpectedTrailingTokens` if tokens remain after the
/// statement.
pub fn parse_statement_source(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;
    expect_exhausted(&mut iter)?;
    Ok(statement)
}

/// Parses a single expression from a source string.
///
/// The expression must span the entire input.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails, or
/// `ParseError::UnexpectedTrailingTokens` if tokens remain after the
/// expression.
pub fn parse_expression_source(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let expression = parse_expression(&mut iter)?;
    expect_exhausted(&mut iter)?;
    Ok(expression)
}

/// Parses a single top-level element from a source string.
///
/// The element must span the entire input.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails, or
/// `ParseError::UnexpectedTrailingTokens` if tokens remain after the
/// element.
pub fn parse_element_source(source: &str) -> Result<Element, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let element = parse_element(&mut iter)?;
    expect_exhausted(&mut iter)?;
    Ok(element)
}

/// Checks that the token stream is fully consumed.
fn expect_exhausted<'a, I>(tokens: &mut std::iter::Peekable<I>) -> Result<(), ParseError>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None => Ok(()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                       line:  *line, })
        },
    }
}
