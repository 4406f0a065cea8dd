use super::Expr;
use crate::schema::{Column, ColumnId};

/// A reference to a schema column inside a predicate or sort key.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExprColumn {
    /// The referenced column
    pub column: ColumnId,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

impl From<ColumnId> for ExprColumn {
    fn from(value: ColumnId) -> Self {
        ExprColumn { column: value }
    }
}

impl From<&Column> for ExprColumn {
    fn from(value: &Column) -> Self {
        ExprColumn { column: value.id }
    }
}
