use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Literal-carrying tokens keep their raw lexeme; interpretation (such as
/// parsing a numeric lexeme as `f64`) belongs to the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens; the lexeme excludes the surrounding quotes.
    #[regex(r#""[^"\n]*""#, trim_quotes)]
    String(String),
    /// Identifier tokens; variable, class or function names such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `class`
    #[token("class")]
    Class,
    /// `extends` (lexed for completeness; no grammar rule consumes it)
    #[token("extends")]
    Extends,
    /// `function`
    #[token("function")]
    Function,
    /// `init`
    #[token("init")]
    Init,
    /// `do`
    #[token("do")]
    Do,
    /// `end`
    #[token("end")]
    End,
    /// `def`
    #[token("def")]
    Def,
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `for` (lexed for completeness; no grammar rule consumes it)
    #[token("for")]
    For,
    /// `return`
    #[token("return")]
    Return,
    /// `up`
    #[token("up")]
    Up,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `or`
    #[token("or")]
    Or,
    /// `and`
    #[token("and")]
    And,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Lower,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LowerEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// Line break; skipped, but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Multi line comments; skipped while keeping the line count accurate.
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Strips the surrounding quotes from a string-literal lexeme.
fn trim_quotes(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
