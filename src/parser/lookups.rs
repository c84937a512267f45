use std::fmt::Display;

use crate::{ast::expressions::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Grammar rules, ordered from loosest to tightest binding.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Rule {
    Expression,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Primary,
}

pub type OperandHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub const EQUALITY_OPERATORS: &[TokenKind] = &[TokenKind::NotEquals, TokenKind::Equals];
pub const COMPARISON_OPERATORS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Less,
    TokenKind::LessEquals,
];
pub const TERM_OPERATORS: &[TokenKind] = &[TokenKind::Dash, TokenKind::Plus];
pub const FACTOR_OPERATORS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];
pub const UNARY_OPERATORS: &[TokenKind] = &[TokenKind::Not, TokenKind::Dash];
pub const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::False,
    TokenKind::True,
    TokenKind::Nil,
    TokenKind::Number,
    TokenKind::String,
];

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Expression => "expression",
            Rule::Equality => "equality",
            Rule::Comparison => "comparison",
            Rule::Term => "term",
            Rule::Factor => "factor",
            Rule::Unary => "unary",
            Rule::Primary => "primary",
        }
    }

    /// The tokens this rule consumes itself: the operators a level folds
    /// over, or the literal terminals for `primary`.
    pub fn tokens(&self) -> &'static [TokenKind] {
        match self {
            Rule::Equality => EQUALITY_OPERATORS,
            Rule::Comparison => COMPARISON_OPERATORS,
            Rule::Term => TERM_OPERATORS,
            Rule::Factor => FACTOR_OPERATORS,
            Rule::Unary => UNARY_OPERATORS,
            Rule::Primary => LITERAL_KINDS,
            Rule::Expression => &[],
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
