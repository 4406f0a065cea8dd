use super::Column;
use indexmap::IndexMap;
use std::fmt;

/// A relational table.
///
/// The column map preserves schema-declaration order; the projection
/// fallback in the engine crate relies on it when picking a default
/// column.
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table within the schema
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns, keyed by name, in declaration order
    pub columns: IndexMap<String, Column>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Self {
        Self {
            id,
            name,
            columns: IndexMap::new(),
        }
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> {
        self.columns.values()
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
