//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Lox source text
//! into the token sequence consumed by the parser. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
