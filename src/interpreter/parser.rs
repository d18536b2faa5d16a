/// Core parsing logic and the expression entry point.
///
/// Contains the shared `ParseResult` alias and the top of the expression
/// grammar.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence tier, from `or` down to `mod`. Every tier is
/// right-associative by construction.
pub mod binary;

/// Unary operator and literal parsing.
///
/// Handles prefix `!` and `-`, parenthesized sub-expressions and all literal
/// forms.
pub mod unary;

/// Statement parsing.
///
/// Implements the statement-level forms: `if`, `while`, `repeat`, `def`,
/// `return`, `up`, `break`, `continue` and `do ... end` blocks.
pub mod statement;

/// Top-level element parsing.
///
/// Parses `class` declarations, the input of the code-generation back end.
pub mod element;

/// Utility functions for the parser.
///
/// Provides shared helpers such as comma-separated list parsing and token
/// descriptions for error messages.
pub mod utils;
