/// Represents a literal value appearing directly in source code.
///
/// `LiteralValue` covers the raw constants of the language: numbers, strings,
/// booleans and `nil`. It is used by the AST to represent literal expressions
/// and converts directly into a runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal.
    String(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node.
///
/// The grammar has no separate statement category: every statement is a value
/// node invoked for effect, and a node's evaluation either produces a runtime
/// value or propagates a control signal. Each node owns its children outright;
/// the tree is immutable after parsing and may be evaluated repeatedly.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A sequence of statements evaluated in declaration order.
    ///
    /// Evaluation stops at the first child whose result is not `Nil`; that
    /// result becomes the block's result.
    Block {
        /// Statements inside the block.
        statements: Vec<Node>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A variable declaration: `def a, b = 1, 2`.
    ///
    /// The grammar does not constrain the two lists to equal length.
    Define {
        /// Names of the declared variables.
        targets: Vec<String>,
        /// Initializer expressions, possibly empty.
        values:  Vec<Node>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A conditional: `if <condition> <command>`. There is no `else` clause.
    If {
        /// The condition expression.
        condition: Box<Node>,
        /// The command evaluated when the condition is exactly `true`.
        command:   Box<Node>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A pre-checked loop: `while <condition> <command>`.
    While {
        /// The condition expression, re-evaluated before each iteration.
        condition: Box<Node>,
        /// The loop body.
        command:   Box<Node>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A post-checked loop: `repeat <command> <condition>`.
    ///
    /// The body precedes the condition in source and always runs once before
    /// the condition is first checked.
    Repeat {
        /// The condition expression, checked after each iteration.
        condition: Box<Node>,
        /// The loop body.
        command:   Box<Node>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `break` statement.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// A `continue` statement.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// A `return <expr>` statement.
    Return {
        /// The returned expression.
        value: Box<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `up <expr>` statement, escaping one nesting level upward.
    Up {
        /// The escaped expression.
        value: Box<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Node>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Node>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (logical not or numeric negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Node>,
        /// Line number in the source code.
        line: usize,
    },
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// An unresolved identifier used in expression position.
    ///
    /// The context carries no variable environment, so an identifier
    /// evaluates to `Nil`.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Node {
    /// Gets the source line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Block { line, .. }
            | Self::Define { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Repeat { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. }
            | Self::Up { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Literal { line, .. }
            | Self::Identifier { line, .. } => *line,
        }
    }
}

/// A top-level declaration parsed from source.
///
/// Elements are the input of the code-generation back end; they are parsed
/// but carry no interpreter semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A class declaration: `class <name> do <member>* end`.
    Class(ClassDef),
}

/// A parsed class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// The class name.
    pub name:    String,
    /// Members in declaration order.
    pub members: Vec<ClassMember>,
    /// Line number in the source code.
    pub line:    usize,
}

/// A single member of a class declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// A named function: `function <name> ( <param>* ) <command>`.
    Function {
        /// The function name.
        name:   String,
        /// Declared parameters.
        params: Vec<Param>,
        /// The function body command.
        body:   Node,
    },
    /// An initializer: `init ( <param>* ) <command>`.
    Init {
        /// Declared parameters.
        params: Vec<Param>,
        /// The initializer body command.
        body:   Node,
    },
    /// A field declaration, sharing the `def` statement grammar.
    Field {
        /// The underlying `def` node.
        define: Node,
    },
}

/// A declared parameter with an optional type annotation: `name [: type]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name:      String,
    /// The annotated type name, when present.
    pub type_name: Option<String>,
}

/// Represents a binary operator.
///
/// All binary tiers of the grammar are right-associative, including the
/// arithmetic and comparison tiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`or`)
    Or,
    /// Logical and (`and`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Lower,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LowerEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition or string concatenation (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Mult,
    /// Division (`/`)
    Div,
    /// Truncating modulo (`%`)
    Mod,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`), defined for booleans only.
    Not,
    /// Arithmetic negation (`-x`), defined for numbers only.
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Lower => "<",
            Self::Greater => ">",
            Self::LowerEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}
