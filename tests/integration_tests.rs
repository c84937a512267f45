//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing to the printed tree and rendered diagnostics.

use lox_parser::{
    ast::expressions::Expr,
    format_error,
    lexer::{lexer::tokenize, tokens::LiteralValue},
    parse_source, parse_source_with_config,
    parser::parser::{parse, ParserConfig},
};

#[test]
fn test_parse_source_prints_tree() {
    let expr = parse_source("1 + 2 * 3 == 7".to_string(), Some("test.lox".to_string())).unwrap();

    assert_eq!(expr.to_string(), "(== (+ 1 (* 2 3)) 7)");
}

#[test]
fn test_parse_source_across_lines_and_comments() {
    let source = "(1 +   // first operand\n 2)\n * 3\n".to_string();

    let expr = parse_source(source, None).unwrap();

    assert_eq!(expr.to_string(), "(* (group (+ 1 2)) 3)");
}

#[test]
fn test_parse_source_reports_lexer_errors() {
    let error = parse_source("1 # 2".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_source_string_literal() {
    let expr = parse_source("\"hello\"".to_string(), None).unwrap();

    assert_eq!(expr, Expr::Literal(LiteralValue::String("hello".to_string())));
}

#[test]
fn test_unclosed_grouping_diagnostic() {
    let source = "1 +\n  (2 * 3";
    let error = parse_source(source.to_string(), Some("test.lox".to_string())).unwrap_err();

    let rendered = format_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnclosedGrouping (This `(` is never closed, add a `)`)"
    );
    assert_eq!(lines[1], "-> test.lox");
    assert_eq!(lines[3], "2 | (2 * 3");
    assert_eq!(lines[4], "  | ^");
}

#[test]
fn test_missing_operand_diagnostic_points_past_input() {
    let source = "1 *";
    let error = parse_source(source.to_string(), Some("test.lox".to_string())).unwrap_err();

    let rendered = format_error(&error, source);

    assert!(rendered.starts_with("Error: ExpectedExpression (Expected an expression in primary, found `end of input`)"));
    assert!(rendered.ends_with("1 | 1 *\n  | ---^\n"));
}

#[test]
fn test_default_depth_limit_stops_deep_nesting() {
    let depth = ParserConfig::default().max_depth + 10;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    // Reaching the limit still needs a few frames per level
    let handle = std::thread::Builder::new()
        .stack_size(16 * 1024 * 1024)
        .spawn(move || {
            parse_source(source, None)
                .map(|expr| expr.to_string())
                .map_err(|error| error.get_error_name().to_string())
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), Err("ExpressionTooDeep".to_string()));
}

#[test]
fn test_custom_depth_limit() {
    // four prefix operators over a literal make a tree five deep
    let source = "- - - - 1".to_string();

    assert!(parse_source_with_config(source.clone(), None, ParserConfig { max_depth: 5 }).is_ok());
    assert!(parse_source_with_config(source, None, ParserConfig { max_depth: 4 }).is_err());
}

#[test]
fn test_independent_parses_on_separate_threads() {
    let sources = ["1 - 2 - 3", "!(true == false)", "-(-(1)) / 2"];
    let expected = ["(- (- 1 2) 3)", "(! (group (== true false)))", "(/ (- (group (- (group 1)))) 2)"];

    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || parse_source(source, None).unwrap().to_string())
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_parser_state_after_failure() {
    let tokens = tokenize("1 + (2".to_string(), None).unwrap();

    let (parser, result) = parse(tokens);

    assert!(result.is_err());
    assert_eq!(parser.current_token_kind(), lox_parser::lexer::tokens::TokenKind::EOF);
}
