//! Parser state and entry points.
//!
//! The `Parser` owns the token sequence and a cursor into it. The grammar
//! procedures in `expr` take the parser by `&mut` and move the cursor through
//! the helpers defined here; nothing else mutates it.

use std::rc::Rc;

use log::{debug, trace, warn};

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::expr::parse_expr;

/// Default bound on the depth of a parsed tree.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest tree the parser will build, counting a literal as depth 1.
    /// Anything deeper fails with `ExpressionTooDeep`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A cursor over one token sequence.
///
/// Invariant: `tokens` is non-empty, ends with `EOF`, and
/// `pos < tokens.len()`.
#[derive(Debug)]
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth of groupings and prefix operators
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A sequence that does not end in `EOF` gets one appended just past its
    /// last token.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            warn!("token sequence is not terminated by EOF, appending one");
            let end = match tokens.last() {
                Some(last) => last.span.end.clone(),
                None => Position(0, Rc::new(String::from("shell"))),
            };
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// Index of the current token.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Reports whether the current token has `kind`. Always false at `EOF`.
    pub fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current_token_kind() == kind
    }

    /// Returns the current token and moves past it. At `EOF` the cursor
    /// stays where it is.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        trace!("consumed {} at {}", self.tokens[current], current);
        &self.tokens[current]
    }

    /// Consumes the current token if its kind is one of `kinds`, tried in
    /// the given order.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    /// Expects a token of the specified kind, failing with `error` otherwise.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Error) -> Result<Token, Error> {
        if self.check(expected_kind) {
            Ok(self.advance().clone())
        } else {
            Err(error)
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let error = self.unexpected_token();
        self.expect_error(expected_kind, error)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn unexpected_token(&self) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: self.current_token().describe(),
            },
            self.get_position(),
        )
    }

    /// Enters one level of nesting. A tree under `n` nested groupings or
    /// prefix operators is at least `n + 1` deep, so this fails before the
    /// recursion outgrows the limit.
    pub fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth >= self.config.max_depth {
            return Err(self.too_deep(self.get_position()));
        }
        Ok(())
    }

    /// Passes `expr` through if it is within `max_depth`.
    ///
    /// Binary chains are folded in a loop, so only this check keeps
    /// `1 + 1 + ... + 1` from growing a tree too deep to print or drop.
    pub fn bounded(&self, expr: Expr, at: Position) -> Result<Expr, Error> {
        if expr.depth() > self.config.max_depth {
            return Err(self.too_deep(at));
        }
        Ok(expr)
    }

    fn too_deep(&self, at: Position) -> Error {
        Error::new(
            ErrorImpl::ExpressionTooDeep {
                limit: self.config.max_depth,
            },
            at,
        )
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Parses a token sequence into a single expression using the default
/// configuration.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (its cursor sits on `EOF` after a successful parse)
/// - Result containing either the expression tree or an Error
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<Expr, Error>) {
    parse_with_config(tokens, ParserConfig::default())
}

pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> (Parser, Result<Expr, Error>) {
    let mut parser = Parser::new(tokens, config);

    let result = parse_expr(&mut parser).and_then(|expr| {
        if parser.is_at_end() {
            Ok(expr)
        } else {
            Err(parser.unexpected_token())
        }
    });

    match &result {
        Ok(expr) => debug!("parsed {} tokens into {}", parser.tokens.len(), expr),
        Err(error) => debug!("parse failed at token {}: {}", parser.pos, error),
    }

    (parser, result)
}
