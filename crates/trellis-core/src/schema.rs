mod builder;
pub use builder::{Builder, TableBuilder};

mod column;
pub use column::{Column, ColumnId};

mod relation;
pub use relation::{Relation, RelationKind};

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::StorageType;

use indexmap::IndexMap;
use std::collections::HashMap;

/// The schema registry: every table, column, and relation the engine knows
/// about.
///
/// Built once through [`Builder`] and immutable afterwards, which is what
/// makes the per-table shape caches in the engine crate safe to share
/// across concurrent requests.
#[derive(Debug, Default)]
pub struct Schema {
    /// All tables, in declaration order.
    pub(crate) tables: IndexMap<TableId, Table>,

    /// Table name -> id lookup.
    pub(crate) names: HashMap<String, TableId>,

    /// Per-table named relations, in declaration order.
    pub(crate) relations: HashMap<TableId, IndexMap<String, Relation>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get a table by ID
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(&id.into()).expect("invalid table ID")
    }

    /// Get a table by name
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.names.get(name).map(|id| self.table(*id))
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// The named relations declared on a table, if any.
    pub fn relations(&self, table: impl Into<TableId>) -> Option<&IndexMap<String, Relation>> {
        self.relations.get(&table.into())
    }
}
