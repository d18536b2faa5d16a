use std::fs;

use genscript::{
    ast::{ClassMember, Element, Node},
    emit_source,
    error::ParseError,
    interpreter::value::Value,
    parse_element_source, parse_expression_source, parse_statement_source, run_source,
};
use walkdir::WalkDir;

fn value_of(src: &str) -> Value {
    match run_source(src) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn number_of(src: &str) -> f64 {
    match value_of(src) {
        Value::Number(n) => n,
        other => panic!("Expected a number from {src:?}, got {other:?}"),
    }
}

fn bool_of(src: &str) -> bool {
    match value_of(src) {
        Value::Bool(b) => b,
        other => panic!("Expected a bool from {src:?}, got {other:?}"),
    }
}

fn str_of(src: &str) -> String {
    match value_of(src) {
        Value::String(s) => s,
        other => panic!("Expected a string from {src:?}, got {other:?}"),
    }
}

fn assert_nil(src: &str) {
    assert_eq!(value_of(src), Value::Nil, "Expected nil from {src:?}");
}

#[test]
fn sample_scripts_parse_and_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "cge")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;
        if let Err(e) = run_source(&content) {
            panic!("Sample script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No sample scripts found in tests/scripts");
}

#[test]
fn numeric_literals() {
    assert_eq!(number_of("42"), 42.0);
    assert_eq!(number_of("3.25"), 3.25);
    assert_eq!(number_of("2e3"), 2000.0);
    assert_eq!(number_of("1.5e-1"), 0.15);
}

#[test]
fn other_literals() {
    assert_eq!(str_of("\"hello\""), "hello");
    assert!(bool_of("true"));
    assert!(!bool_of("false"));
    assert_nil("nil");
}

#[test]
fn arithmetic_is_right_associative() {
    // 1 - (2 - 3)
    assert_eq!(number_of("1 - 2 - 3"), 2.0);
    // 100 / (10 / 2)
    assert_eq!(number_of("100 / 10 / 2"), 20.0);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(number_of("1 + 2 * 3"), 7.0);
    assert_eq!(number_of("(1 + 2) * 3"), 9.0);
    assert_eq!(number_of("1 - (2 - 3)"), 2.0);
}

#[test]
fn modulo_binds_tighter_than_mul() {
    // 3 * (10 % 4)
    assert_eq!(number_of("3 * 10 % 4"), 6.0);
}

#[test]
fn modulo_truncates_operands() {
    assert_eq!(number_of("4 % 6"), 4.0);
    assert_eq!(number_of("6 % 4"), 2.0);
    assert_eq!(number_of("5.9 % 3.9"), 2.0);
    assert_eq!(number_of("-7 % 3"), -1.0);
}

#[test]
fn modulo_by_zero_is_nil() {
    assert_nil("5 % 0");
    assert_nil("5 % 0.4");
}

#[test]
fn string_concatenation() {
    assert_eq!(str_of("\"foo\" + \"bar\""), "foobar");
    assert_eq!(str_of("\"a\" + \"b\" + \"c\""), "abc");
}

#[test]
fn arithmetic_type_mismatch_passes_left_through() {
    assert_eq!(number_of("1 + \"x\""), 1.0);
    assert_eq!(number_of("7 - true"), 7.0);
    assert_eq!(number_of("3 * nil"), 3.0);
    assert_eq!(str_of("\"a\" + 1"), "a");
    assert_nil("\"a\" - \"b\"");
    assert_nil("true + true");
}

#[test]
fn equality_is_like_typed_only() {
    assert!(bool_of("1 == 1"));
    assert!(bool_of("1 != 2"));
    assert!(bool_of("\"a\" == \"a\""));
    assert!(bool_of("true != false"));
    assert_nil("1 == \"1\"");
    assert_nil("true == 1");
    assert_nil("nil == nil");
    assert_nil("nil != nil");
}

#[test]
fn ordering_numbers_and_strings() {
    assert!(bool_of("1 < 2"));
    assert!(bool_of("2 >= 2"));
    assert!(!bool_of("3 <= 2"));
    assert!(bool_of("\"abc\" < \"abd\""));
    assert!(bool_of("\"b\" > \"a\""));
    assert_nil("1 < \"2\"");
}

#[test]
fn logic_requires_booleans() {
    assert!(bool_of("true and true"));
    assert!(!bool_of("true and false"));
    assert!(bool_of("false or true"));
    assert!(!bool_of("false or false"));
    assert_nil("true and 1");
    assert_nil("nil or false");
}

#[test]
fn logic_precedence() {
    // or is weaker than and: false or (true and true)
    assert!(bool_of("false or true and true"));
}

#[test]
fn unary_operators() {
    assert!(!bool_of("!true"));
    assert!(bool_of("!false"));
    assert_eq!(number_of("-5"), -5.0);
    assert_eq!(number_of("-(1 + 2)"), -3.0);
    assert_nil("!1");
    assert_nil("-\"x\"");
}

#[test]
fn unary_operand_is_literal_level() {
    // The operand of '-' sits below the sum tier: -(1) - 2 groups as a
    // subtraction, not a double negation.
    assert_eq!(number_of("-1 - 2"), -3.0);
    assert!(parse_expression_source("--1").is_err());
    assert!(parse_expression_source("!!true").is_err());
}

#[test]
fn block_stops_at_first_non_nil() {
    assert_eq!(number_of("do nil nil 3 4 end"), 3.0);
    assert_nil("do end");
    assert_nil("do nil nil end");
}

#[test]
fn if_requires_exactly_true() {
    assert_eq!(number_of("if true 1"), 1.0);
    assert_nil("if false 1");
    assert_nil("if 1 2");
    assert_nil("if nil 2");
}

#[test]
fn while_condition_gate() {
    // The condition is never exactly true, so the body never runs.
    assert_nil("while false 1");
    assert_nil("while 1 2");
    // A non-nil body value ends the loop and becomes the result.
    assert_eq!(number_of("while true 7"), 7.0);
}

#[test]
fn repeat_runs_body_first() {
    assert_eq!(number_of("repeat 5 false"), 5.0);
    assert_eq!(number_of("repeat 5 true"), 5.0);
    assert_nil("repeat nil false");
}

#[test]
fn break_and_continue_end_loops() {
    assert_nil("while true break");
    assert_nil("repeat break false");
    // A signal from outside any loop resolves to nil at the top level.
    assert_nil("break");
    assert_nil("continue");
}

#[test]
fn return_and_up_escape_blocks() {
    assert_eq!(number_of("do return 9 4 end"), 9.0);
    assert_eq!(number_of("do up 2 end"), 2.0);
    assert_eq!(number_of("while true return 3"), 3.0);
    assert_eq!(str_of("return \"done\""), "done");
}

#[test]
fn define_yields_nil_without_evaluating() {
    assert_nil("def x = 1");
    assert_nil("def a, b = 1, 2");
    assert_nil("def a, b");
    assert_nil("def x = (1 + 2)");
}

#[test]
fn identifiers_read_as_nil() {
    assert_nil("x");
    assert_eq!(number_of("do x 3 end"), 3.0);
}

#[test]
fn evaluation_is_repeatable() {
    let tree = parse_expression_source("1 + 2 * 3").unwrap();
    let mut first = genscript::interpreter::evaluator::core::Context::new();
    let mut second = genscript::interpreter::evaluator::core::Context::new();
    assert_eq!(first.eval(&tree), second.eval(&tree));
}

#[test]
fn comments_and_lines_are_skipped() {
    assert_eq!(number_of("// leading comment\n1 + 1"), 2.0);
    assert_eq!(number_of("1 + /* inline */ 1"), 2.0);
    assert_eq!(number_of("/* spans\nlines */ 2"), 2.0);
}

#[test]
fn dangling_if_reports_expected_literal() {
    match run_source("if true") {
        Err(ParseError::ExpectedLiteral { found, .. }) => {
            assert_eq!(found, "end of input");
        },
        other => panic!("Expected an ExpectedLiteral error, got {other:?}"),
    }
}

#[test]
fn unclosed_paren_reports_its_line() {
    match run_source("(1 + 2") {
        Err(ParseError::ExpectedClosingParen { line }) => assert_eq!(line, 1),
        other => panic!("Expected an ExpectedClosingParen error, got {other:?}"),
    }
}

#[test]
fn unknown_character_is_a_lex_error() {
    assert!(matches!(run_source("1 + $"),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn error_lines_count_newlines() {
    match run_source("1 +\n\n(2") {
        Err(ParseError::ExpectedClosingParen { line }) => assert_eq!(line, 3),
        other => panic!("Expected an ExpectedClosingParen error, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse_expression_source("1 + 2 3"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_statement_source("break break"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn class_declarations_parse() {
    let source = "class Point do\n\
                  def x, y = 0, 0\n\
                  init(x: Number, y: Number) do end\n\
                  function length() return 0\n\
                  end";
    let Element::Class(class) = parse_element_source(source).unwrap();
    assert_eq!(class.name, "Point");
    assert_eq!(class.members.len(), 3);
    assert!(matches!(class.members[0], ClassMember::Field { .. }));
    match &class.members[1] {
        ClassMember::Init { params, .. } => {
            assert_eq!(params.len(), 2);
            assert_eq!(params[0].name, "x");
            assert_eq!(params[0].type_name.as_deref(), Some("Number"));
        },
        other => panic!("Expected an init member, got {other:?}"),
    }
    match &class.members[2] {
        ClassMember::Function { name, params, .. } => {
            assert_eq!(name, "length");
            assert!(params.is_empty());
        },
        other => panic!("Expected a function member, got {other:?}"),
    }
}

#[test]
fn class_errors_name_the_missing_piece() {
    assert!(matches!(parse_element_source("def x = 1"),
                     Err(ParseError::ExpectedElement { .. })));
    assert!(matches!(parse_element_source("class do end"),
                     Err(ParseError::ExpectedClassName { .. })));
    assert!(matches!(parse_element_source("class Point end"),
                     Err(ParseError::ExpectedDo { .. })));
    assert!(matches!(parse_element_source("class Point do return 1 end"),
                     Err(ParseError::ExpectedClassMember { .. })));
    assert!(matches!(parse_element_source("class Point do init(x:) do end end"),
                     Err(ParseError::ExpectedTypeName { .. })));
}

#[test]
fn statements_record_their_lines() {
    let node = parse_statement_source("do\nbreak\nend").unwrap();
    let Node::Block { statements, line } = node else {
        panic!("Expected a block");
    };
    assert_eq!(line, 1);
    assert_eq!(statements[0].line_number(), 2);
}

#[test]
fn emitter_renders_swift() {
    assert_eq!(emit_source("def x = 1").unwrap(), "var x = 1\n");
    assert_eq!(emit_source("def a, b = 1, 2").unwrap(), "var a = 1, b = 2\n");
    assert_eq!(emit_source("break").unwrap(), "break\n");
    assert_eq!(emit_source("repeat x false").unwrap(),
               "repeat x while false\n");
    assert_eq!(emit_source("if a == b return 1").unwrap(),
               "if (a == b) return 1\n");
    assert_eq!(emit_source("do\ndef x = 2\nend").unwrap(),
               "do {\n    var x = 2\n}\n");
}
