use super::{Direction, Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression to sort by
    pub expr: Expr,

    /// Ascending or descending
    pub order: Direction,
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Direction::Asc,
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Direction::Desc,
        }
    }
}
