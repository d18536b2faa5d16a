use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, Flow},
        value::Value,
    },
};

impl Context {
    /// Evaluates a block of statements.
    ///
    /// Statements run in order while each yields `Nil`. The first statement
    /// to produce anything else, a non-nil value or a control signal, stops
    /// the block and becomes its result. An empty block yields `Nil`.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> Flow {
        for statement in statements {
            match self.eval_flow(statement) {
                Flow::Value(Value::Nil) => {},
                other => return other,
            }
        }
        Flow::Value(Value::Nil)
    }

    /// Evaluates an `if` statement.
    ///
    /// The command runs only when the condition evaluates to exactly
    /// `Bool(true)`; every other condition value yields `Nil`. A signal
    /// raised by the condition itself propagates.
    pub(crate) fn eval_if(&mut self, condition: &Node, command: &Node) -> Flow {
        match self.eval_flow(condition) {
            Flow::Value(value) => {
                if value.is_true() {
                    self.eval_flow(command)
                } else {
                    Flow::Value(Value::Nil)
                }
            },
            signal => signal,
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before each iteration and must be
    /// exactly `Bool(true)` for the body to run. A body yielding a non-nil
    /// value ends the loop with that value; `break` ends it with `Nil`;
    /// `continue` starts the next iteration; `return` and `up` propagate.
    pub(crate) fn eval_while(&mut self, condition: &Node, command: &Node) -> Flow {
        loop {
            match self.eval_flow(condition) {
                Flow::Value(value) => {
                    if !value.is_true() {
                        return Flow::Value(Value::Nil);
                    }
                },
                signal => return signal,
            }
            match self.eval_flow(command) {
                Flow::Value(Value::Nil) | Flow::Continue => {},
                Flow::Break => return Flow::Value(Value::Nil),
                other => return other,
            }
        }
    }

    /// Evaluates a `repeat` loop.
    ///
    /// The body runs first, then the condition decides whether to go round
    /// again, so the body always executes at least once. Body and signal
    /// handling match [`Self::eval_while`].
    pub(crate) fn eval_repeat(&mut self, condition: &Node, command: &Node) -> Flow {
        loop {
            match self.eval_flow(command) {
                Flow::Value(Value::Nil) | Flow::Continue => {},
                Flow::Break => return Flow::Value(Value::Nil),
                other => return other,
            }
            match self.eval_flow(condition) {
                Flow::Value(value) => {
                    if !value.is_true() {
                        return Flow::Value(Value::Nil);
                    }
                },
                signal => return signal,
            }
        }
    }
}
