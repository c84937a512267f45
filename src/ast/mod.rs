/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - expressions: the closed `Expr` sum type
/// - printer: parenthesized rendering of an `Expr`
pub mod expressions;
pub mod printer;
