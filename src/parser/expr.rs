//! The expression grammar, one procedure per precedence level.
//!
//! ```text
//! expression  = equality
//! equality    = comparison ( ("!=" | "==") comparison )*
//! comparison  = term ( (">" | ">=" | "<" | "<=") term )*
//! term        = factor ( ("-" | "+") factor )*
//! factor      = unary ( ("/" | "*") unary )*
//! unary       = ("!" | "-") unary | primary
//! primary     = NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```

use log::trace;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{LiteralValue, Token, TokenKind},
};

use super::{
    lookups::{OperandHandler, Rule},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("enter {} at {}", Rule::Expression, parser.cursor());
    parse_equality(parser)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, Rule::Equality, parse_comparison)
}

pub fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, Rule::Comparison, parse_term)
}

pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, Rule::Term, parse_factor)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, Rule::Factor, parse_unary_expr)
}

/// Left-associative fold: `operand (op operand)*` with the accumulator as
/// the left child of each new node.
fn parse_binary_expr(
    parser: &mut Parser,
    rule: Rule,
    operand: OperandHandler,
) -> Result<Expr, Error> {
    trace!("enter {} at {}", rule, parser.cursor());
    let mut left = operand(parser)?;

    while let Some(operator) = parser.match_any(rule.tokens()) {
        let right = operand(parser)?;
        let at = operator.span.start.clone();
        left = parser.bounded(Expr::binary(left, operator, right), at)?;
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(operator) = parser.match_any(Rule::Unary.tokens()) {
        parser.descend()?;
        let right = parse_unary_expr(parser)?;
        parser.ascend();

        let at = operator.span.start.clone();
        return parser.bounded(Expr::unary(operator, right), at);
    }

    parse_primary_expr(parser)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(token) = parser.match_any(Rule::Primary.tokens()) {
        return Ok(Expr::literal(literal_value(&token)?));
    }

    if let Some(open) = parser.match_any(&[TokenKind::OpenParen]) {
        return parse_grouping_expr(parser, open);
    }

    Err(Error::new(
        ErrorImpl::ExpectedExpression {
            rule: Rule::Primary,
            token: parser.current_token().describe(),
        },
        parser.get_position(),
    ))
}

/// Parses the rest of `( expression )` after `open` has been consumed.
pub fn parse_grouping_expr(parser: &mut Parser, open: Token) -> Result<Expr, Error> {
    parser.descend()?;
    let inner = parse_expr(parser)?;
    parser.ascend();

    let unclosed = Error::new(
        ErrorImpl::UnclosedGrouping {
            token: open.lexeme.clone(),
        },
        open.span.start.clone(),
    );
    parser.expect_error(TokenKind::CloseParen, unclosed)?;

    parser.bounded(Expr::grouping(inner), open.span.start)
}

/// The value a literal token carries. Tokens built without an attached
/// literal fall back to their lexeme.
fn literal_value(token: &Token) -> Result<LiteralValue, Error> {
    if let Some(literal) = &token.literal {
        return Ok(literal.clone());
    }

    match token.kind {
        TokenKind::True => Ok(LiteralValue::Boolean(true)),
        TokenKind::False => Ok(LiteralValue::Boolean(false)),
        TokenKind::Nil => Ok(LiteralValue::Nil),
        TokenKind::Number => token.lexeme.parse().map(LiteralValue::Number).map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.lexeme.clone(),
                },
                token.span.start.clone(),
            )
        }),
        TokenKind::String => {
            let lexeme = token.lexeme.as_str();
            let contents = lexeme
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(lexeme);
            Ok(LiteralValue::String(contents.to_string()))
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                rule: Rule::Primary,
                token: token.describe(),
            },
            token.span.start.clone(),
        )),
    }
}
