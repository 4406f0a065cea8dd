use super::{Schema, Table, TableId};

/// A named edge between a source table and a target table.
///
/// Relations form a directed graph over tables which may contain cycles
/// (self-joins, mutual references); nothing here bounds traversal. The
/// walker terminates because a requested-field tree is finite.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Name of the relation as exposed on the source table
    pub name: String,

    /// The table declaring the relation
    pub source: TableId,

    /// The related table
    pub target: TableId,

    /// Whether the relation yields a single record or a collection
    pub kind: RelationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// A single related record
    One,

    /// A collection of related records
    Many,
}

impl Relation {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Table {
        schema.table(self.target)
    }

    pub fn is_one(&self) -> bool {
        matches!(self.kind, RelationKind::One)
    }

    pub fn is_many(&self) -> bool {
        matches!(self.kind, RelationKind::Many)
    }
}
