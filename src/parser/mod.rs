//! Parser module for building the expression tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an `Expr`. Each precedence level is its own
//! procedure calling the next-tighter level for its operands:
//!
//! - `parser`: parser state, cursor helpers and the `parse` entry points
//! - `expr`: the grammar procedures
//! - `lookups`: grammar rules and the operator set of each level

pub mod expr;
pub mod lookups;
pub mod parser;
