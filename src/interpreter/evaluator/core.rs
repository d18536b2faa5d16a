use crate::{ast::Node, interpreter::value::Value};

/// The result of evaluating a single node.
///
/// Most nodes produce a plain [`Flow::Value`]; the control-transfer
/// statements produce one of the signal cases instead. Signals travel
/// upwards through enclosing blocks and loops until a construct consumes
/// them: loops absorb `Break` and `Continue`, the top level unwraps `Return`
/// and `Up` to their payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// An ordinary value, continuing sequential execution.
    Value(Value),
    /// A `break` statement unwinding to the nearest enclosing loop.
    Break,
    /// A `continue` statement restarting the nearest enclosing loop.
    Continue,
    /// A `return` statement carrying its evaluated payload.
    Return(Value),
    /// An `up` statement carrying its evaluated payload.
    Up(Value),
}

/// The evaluation context.
///
/// A context is created once per top-level evaluation and threaded through
/// every node. Evaluation is pure with respect to the context: evaluating
/// the same tree twice in fresh contexts yields the same value.
#[derive(Debug, Default)]
pub struct Context;

impl Context {
    /// Creates a new, empty evaluation context.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a node to a runtime value.
    ///
    /// This is the public entry point. Control signals that escape the tree
    /// are resolved here: `return` and `up` yield their payload, `break` and
    /// `continue` outside any loop yield `Nil`.
    ///
    /// # Parameters
    /// - `node`: The root of the tree to evaluate.
    ///
    /// # Returns
    /// The resulting [`Value`]. Evaluation cannot fail; every illegal
    /// operand combination evaluates to [`Value::Nil`].
    ///
    /// # Example
    /// ```
    /// use genscript::interpreter::evaluator::core::Context;
    /// use genscript::interpreter::value::Value;
    /// use genscript::ast::{LiteralValue, Node};
    ///
    /// let node = Node::Literal { value: LiteralValue::Number(7.0), line: 1 };
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&node), Value::Number(7.0));
    /// ```
    pub fn eval(&mut self, node: &Node) -> Value {
        match self.eval_flow(node) {
            Flow::Value(value) | Flow::Return(value) | Flow::Up(value) => value,
            Flow::Break | Flow::Continue => Value::Nil,
        }
    }

    /// Evaluates a node to a flow result, dispatching on the node kind.
    pub(crate) fn eval_flow(&mut self, node: &Node) -> Flow {
        match node {
            Node::Literal { value, .. } => Flow::Value(value.into()),
            // Name lookup is not wired up yet; identifiers read as nil.
            Node::Identifier { .. } => Flow::Value(Value::Nil),
            // Declarations are structural only. Initializers are not
            // evaluated, so a def never triggers side effects or signals.
            Node::Define { .. } => Flow::Value(Value::Nil),
            Node::Binary { left, op, right, .. } => {
                let left = match self.eval_flow(left) {
                    Flow::Value(value) => value,
                    signal => return signal,
                };
                let right = match self.eval_flow(right) {
                    Flow::Value(value) => value,
                    signal => return signal,
                };
                Flow::Value(Self::eval_binary(*op, &left, &right))
            },
            Node::Unary { op, expr, .. } => {
                match self.eval_flow(expr) {
                    Flow::Value(value) => Flow::Value(Self::eval_unary(*op, &value)),
                    signal => signal,
                }
            },
            Node::Block { statements, .. } => self.eval_block(statements),
            Node::If { condition, command, .. } => self.eval_if(condition, command),
            Node::While { condition, command, .. } => self.eval_while(condition, command),
            Node::Repeat { condition, command, .. } => self.eval_repeat(condition, command),
            Node::Break { .. } => Flow::Break,
            Node::Continue { .. } => Flow::Continue,
            Node::Return { value, .. } => {
                match self.eval_flow(value) {
                    Flow::Value(value) => Flow::Return(value),
                    signal => signal,
                }
            },
            Node::Up { value, .. } => {
                match self.eval_flow(value) {
                    Flow::Value(value) => Flow::Up(value),
                    signal => signal,
                }
            },
        }
    }
}
