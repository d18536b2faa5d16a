/// Core evaluation logic.
///
/// Defines the evaluation `Context`, the internal `Flow` signal type and the
/// node dispatcher.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the coercion rules for logical, equality, ordering, arithmetic
/// and modulo operators.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Control-flow evaluation.
///
/// Blocks, conditionals and the two loop forms, plus the propagation of
/// `break`, `continue`, `return` and `up` signals.
pub mod control;
