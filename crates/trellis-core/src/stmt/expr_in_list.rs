use super::*;

/// Tests whether `expr` is contained in `list`.
///
/// ```text
/// in_list(x, [1, 2, 3])      // x IN (1, 2, 3)
/// not_in_list(x, [1, 2, 3])  // x NOT IN (1, 2, 3)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    /// When `true`, this is a "not in" check.
    pub negate: bool,

    pub expr: Box<Expr>,

    pub list: Box<Expr>,
}

impl Expr {
    pub fn in_list(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprInList {
            negate: false,
            expr: Box::new(lhs.into()),
            list: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn not_in_list(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprInList {
            negate: true,
            expr: Box::new(lhs.into()),
            list: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
