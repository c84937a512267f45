use crate::lexer::tokens::{LiteralValue, Token};

/// Expression tree node.
///
/// Each node exclusively owns its children. `Grouping` is kept as its own
/// node so `(a)` and `a` stay distinguishable after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping(Box<Expr>),
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Unary { right, .. } => 1 + right.depth(),
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expr::Grouping(inner) => 1 + inner.depth(),
        }
    }
}
