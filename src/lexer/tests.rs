//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric and string literals, operators,
//! comments, positions and error cases.

use rstest::rstest;

use super::{
    lexer::tokenize,
    tokens::{LiteralValue, TokenKind},
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lox".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    use TokenKind::*;

    assert_eq!(
        kinds("and class else false for fun if nil or print return super this true var while"),
        vec![
            And, Class, Else, False, For, Fun, If, Nil, Or, Print, Return, Super, This, True, Var,
            While, EOF
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase truthy".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    let lexemes: Vec<&str> = tokens[..6].iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, ["foo", "bar", "baz_123", "_underscore", "CamelCase", "truthy"]);
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Identifier));
    assert!(tokens[..6].iter().all(|t| t.literal.is_none()));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[rstest]
#[case("42", 42.0)]
#[case("2.75", 2.75)]
#[case("0", 0.0)]
#[case("100.5", 100.5)]
fn test_tokenize_numbers(#[case] source: &str, #[case] expected: f64) {
    let tokens = tokenize(source.to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, source);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(expected)));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_trailing_dot_is_separate() {
    use TokenKind::*;

    assert_eq!(kinds("1."), vec![Number, Dot, EOF]);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(LiteralValue::String("hello".to_string())));
    assert_eq!(
        tokens[1].literal,
        Some(LiteralValue::String("multiple words".to_string()))
    );
    assert_eq!(tokens[2].literal, Some(LiteralValue::String(String::new())));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_multiline_string() {
    let tokens = tokenize("\"a\nb\"".to_string(), None).unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::String("a\nb".to_string())));
}

#[test]
fn test_tokenize_keyword_literals() {
    let tokens = tokenize("true false nil".to_string(), None).unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::Boolean(true)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Boolean(false)));
    assert_eq!(tokens[2].literal, Some(LiteralValue::Nil));
}

#[test]
fn test_tokenize_operators() {
    use TokenKind::*;

    assert_eq!(
        kinds("+ - * / == != < > <= >= = !"),
        vec![
            Plus, Dash, Star, Slash, Equals, NotEquals, Less, Greater, LessEquals, GreaterEquals,
            Assignment, Not, EOF
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    use TokenKind::*;

    assert_eq!(kinds("!!=<==>="), vec![Not, NotEquals, LessEquals, Assignment, GreaterEquals, EOF]);
}

#[test]
fn test_tokenize_punctuation() {
    use TokenKind::*;

    assert_eq!(
        kinds("( ) { } , . ;"),
        vec![OpenParen, CloseParen, OpenCurly, CloseCurly, Comma, Dot, Semicolon, EOF]
    );
}

#[test]
fn test_tokenize_comments() {
    use TokenKind::*;

    assert_eq!(kinds("1 // this is a comment\n+ 2 // trailing"), vec![Number, Plus, Number, EOF]);
}

#[test]
fn test_tokenize_positions() {
    let source = "  1 +\n 23".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[3].span.start.1.as_str(), "test.lox");
}

#[test]
fn test_tokenize_default_file_name() {
    let tokens = tokenize("1".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let result = tokenize("1 + @".to_string(), Some("test.lox".to_string()));

    let error = result.unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("1 + \"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_mixed_expression() {
    use TokenKind::*;

    assert_eq!(
        kinds("-123 * (45.67)"),
        vec![Dash, Number, Star, OpenParen, Number, CloseParen, EOF]
    );
}
