//! Error types and error handling for the parser.
//!
//! This module defines the errors raised while lexing and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer and each grammar failure
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
