#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// The parser stops at the first mismatch; no recovery or resynchronization
/// is attempted. Each variant names the expectation of the grammar rule that
/// failed.
pub enum ParseError {
    /// Found a token the lexer or the active grammar rule cannot accept.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a grammar rule.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal-level expression was expected but not found.
    ExpectedLiteral {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An identifier was expected but not found.
    ExpectedIdentifier {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric token whose lexeme does not parse as a floating-point
    /// number.
    InvalidNumericLiteral {
        /// The offending lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A top-level element (a `class` declaration) was expected.
    ExpectedElement {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A class name was expected after the `class` keyword.
    ExpectedClassName {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The `do` keyword was expected.
    ExpectedDo {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The `end` keyword was expected.
    ExpectedEnd {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A class member (`function`, `init` or `def`) was expected.
    ExpectedClassMember {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A parameter name was expected.
    ExpectedParamName {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A type name was expected after `:` in a parameter declaration.
    ExpectedTypeName {
        /// What was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedLiteral { found, line } => {
                write!(f, "Error on line {line}: Expected a literal or expression, found {found}.")
            },

            Self::ExpectedIdentifier { found, line } => {
                write!(f, "Error on line {line}: Expected an identifier, found {found}.")
            },

            Self::ExpectedClosingParen { line } => {
                write!(f,
                       "Error on line {line}: Expected closing parenthesis ')' but none found.")
            },

            Self::InvalidNumericLiteral { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid numeric literal '{lexeme}'.")
            },

            Self::ExpectedElement { found, line } => {
                write!(f, "Error on line {line}: Expected a class declaration, found {found}.")
            },

            Self::ExpectedClassName { found, line } => {
                write!(f, "Error on line {line}: Expected a class name, found {found}.")
            },

            Self::ExpectedDo { found, line } => {
                write!(f, "Error on line {line}: Expected 'do', found {found}.")
            },

            Self::ExpectedEnd { found, line } => {
                write!(f, "Error on line {line}: Expected 'end', found {found}.")
            },

            Self::ExpectedClassMember { found, line } => {
                write!(f,
                       "Error on line {line}: Expected 'function', 'init' or 'def', found {found}.")
            },

            Self::ExpectedParamName { found, line } => {
                write!(f, "Error on line {line}: Expected a parameter name, found {found}.")
            },

            Self::ExpectedTypeName { found, line } => {
                write!(f, "Error on line {line}: Expected a type name, found {found}.")
            },

            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f,
                       "Error on line {line}: Extra tokens after expression. Check your input: {token}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
