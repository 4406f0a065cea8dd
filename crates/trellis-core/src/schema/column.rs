use super::{StorageType, TableId};
use crate::stmt;
use std::fmt;

/// A column of a relational table.
#[derive(Debug, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column.
    pub name: String,

    /// The column type, from the engine's point of view. Client-supplied
    /// filter literals are coerced through this before predicate
    /// construction.
    pub ty: stmt::Type,

    /// The backend storage type of the column, when the schema declares
    /// one. Drives the projection-fallback denylist.
    pub storage_ty: Option<StorageType>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
