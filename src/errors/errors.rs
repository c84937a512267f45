use std::fmt::Display;

use thiserror::Error;

use crate::{parser::lookups::Rule, Position};

/// A failure raised while lexing or parsing, pinned to a source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnclosedGrouping { .. } => "UnclosedGrouping",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpressionTooDeep { .. } => "ExpressionTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::ExpectedExpression { rule, token } => ErrorTip::Suggestion(format!(
                "Expected an expression in {}, found `{}`",
                rule, token
            )),
            ErrorImpl::UnclosedGrouping { .. } => {
                ErrorTip::Suggestion(String::from("This `(` is never closed, add a `)`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}` after a complete expression",
                token
            )),
            ErrorImpl::ExpressionTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected expression in {rule}: found {token:?}")]
    ExpectedExpression { rule: Rule, token: String },
    #[error("unclosed grouping opened by {token:?}")]
    UnclosedGrouping { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expression nested deeper than {limit}")]
    ExpressionTooDeep { limit: usize },
}
