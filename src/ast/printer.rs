//! Parenthesized (Lisp-style) rendering of expression trees.
//!
//! `-123 * (45.67)` prints as `(* (- 123) (group 45.67))`. Every operator
//! node is wrapped in parentheses, so the output shows exactly how the parser
//! grouped its input.

use std::fmt::Display;

use super::expressions::Expr;

pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal(value) => out.push_str(&value.to_string()),
        Expr::Unary { operator, right } => parenthesize(&operator.lexeme, &[&**right], out),
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(&operator.lexeme, &[&**left, &**right], out),
        Expr::Grouping(inner) => parenthesize("group", &[&**inner], out),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr], out: &mut String) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_expr(expr, out);
    }
    out.push(')');
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print_expr(self))
    }
}
