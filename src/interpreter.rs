/// Lexical analysis.
///
/// Turns raw source text into a stream of tokens, tracking line numbers for
/// error reporting.
pub mod lexer;

/// Syntax analysis.
///
/// A recursive descent parser building [`crate::ast::Node`] trees from the
/// token stream.
pub mod parser;

/// Tree-walking evaluation.
///
/// Reduces a parsed tree to a single runtime [`value::Value`].
pub mod evaluator;

/// The runtime value model.
pub mod value;

/// Swift source emission.
///
/// The code-generation back end; renders a parsed tree as Swift source
/// instead of evaluating it.
pub mod emitter;
