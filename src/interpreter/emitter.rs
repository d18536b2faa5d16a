use crate::ast::{LiteralValue, Node};

/// State threaded through source emission.
///
/// Tracks the current indentation depth so nested blocks render readable
/// output.
#[derive(Debug, Default)]
pub struct EmitContext {
    tab_count: usize,
}

impl EmitContext {
    /// Creates a new emit context at indentation depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increases the indentation depth by one level.
    pub fn increase(&mut self) {
        self.tab_count += 1;
    }

    /// Decreases the indentation depth by one level.
    pub fn decrease(&mut self) {
        self.tab_count = self.tab_count.saturating_sub(1);
    }

    /// Returns the whitespace prefix for the current depth.
    #[must_use]
    pub fn indent(&self) -> String {
        "    ".repeat(self.tab_count)
    }
}

/// Emits Swift source for a statement tree.
///
/// This is the code-generation back end: instead of evaluating the tree, it
/// renders an equivalent Swift fragment. Blocks become `do { ... }`
/// statements, `def` becomes `var`, and `repeat` maps onto Swift's native
/// `repeat ... while`.
///
/// # Parameters
/// - `node`: The statement or expression to render.
/// - `context`: Emission state carrying the indentation depth.
///
/// # Returns
/// The rendered source fragment, without a trailing newline.
///
/// # Example
/// ```
/// use genscript::ast::Node;
/// use genscript::interpreter::emitter::{emit, EmitContext};
///
/// let node = Node::Break { line: 1 };
/// assert_eq!(emit(&node, &mut EmitContext::new()), "break");
/// ```
#[must_use]
pub fn emit(node: &Node, context: &mut EmitContext) -> String {
    match node {
        Node::Block { statements, .. } => {
            let mut buffer = String::from("do {\n");
            context.increase();
            for statement in statements {
                buffer.push_str(&context.indent());
                buffer.push_str(&emit(statement, context));
                buffer.push('\n');
            }
            context.decrease();
            buffer.push_str(&context.indent());
            buffer.push('}');
            buffer
        },
        Node::Define { targets, values, .. } => {
            let bindings: Vec<String> =
                targets.iter()
                       .enumerate()
                       .map(|(index, name)| {
                           match values.get(index) {
                               Some(value) => format!("{name} = {}", emit(value, context)),
                               None => name.clone(),
                           }
                       })
                       .collect();
            format!("var {}", bindings.join(", "))
        },
        Node::If { condition, command, .. } => {
            let condition = emit(condition, context);
            let command = emit(command, context);
            format!("if {condition} {command}")
        },
        Node::While { condition, command, .. } => {
            let condition = emit(condition, context);
            let command = emit(command, context);
            format!("while {condition} {command}")
        },
        Node::Repeat { condition, command, .. } => {
            let command = emit(command, context);
            let condition = emit(condition, context);
            format!("repeat {command} while {condition}")
        },
        Node::Break { .. } => "break".to_string(),
        Node::Continue { .. } => "continue".to_string(),
        Node::Return { value, .. } | Node::Up { value, .. } => {
            format!("return {}", emit(value, context))
        },
        Node::Binary { left, op, right, .. } => {
            format!("({} {op} {})", emit(left, context), emit(right, context))
        },
        Node::Unary { op, expr, .. } => format!("{op}{}", emit(expr, context)),
        Node::Literal { value, .. } => {
            match value {
                LiteralValue::Number(n) => format!("{n}"),
                LiteralValue::String(s) => format!("\"{s}\""),
                LiteralValue::Bool(b) => format!("{b}"),
                LiteralValue::Nil => "nil".to_string(),
            }
        },
        Node::Identifier { name, .. } => name.clone(),
    }
}
