use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// `!` requires a boolean operand and `-` a numeric one; any other
    /// operand yields `Nil`.
    ///
    /// # Parameters
    /// - `op`: The unary operator to apply.
    /// - `value`: The evaluated operand.
    ///
    /// # Returns
    /// The resulting [`Value`].
    ///
    /// # Example
    /// ```
    /// use genscript::ast::UnaryOperator;
    /// use genscript::interpreter::evaluator::core::Context;
    /// use genscript::interpreter::value::Value;
    ///
    /// let negated = Context::eval_unary(UnaryOperator::Negate, &Value::Number(2.0));
    /// assert_eq!(negated, Value::Number(-2.0));
    ///
    /// let invalid = Context::eval_unary(UnaryOperator::Not, &Value::Number(2.0));
    /// assert_eq!(invalid, Value::Nil);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Not => {
                match value {
                    Value::Bool(b) => Value::Bool(!b),
                    _ => Value::Nil,
                }
            },
            UnaryOperator::Negate => {
                match value {
                    Value::Number(n) => Value::Number(-n),
                    _ => Value::Nil,
                }
            },
        }
    }
}
