use super::{Column, ColumnId, Relation, RelationKind, Schema, StorageType, Table, TableId};
use crate::{stmt, Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Used to track state while a schema is assembled.
///
/// Tables are created eagerly so their identifiers are stable; relations
/// are collected by name and resolved against the table lookup in
/// [`Builder::build`], which is where dangling names are rejected.
#[derive(Debug, Default)]
pub struct Builder {
    /// Tables as they are built
    tables: Vec<Table>,

    /// Maps table names to identifiers
    table_lookup: IndexMap<String, TableId>,

    /// Relations waiting for name resolution
    relations: Vec<PendingRelation>,

    /// Duplicate column declarations, reported at build time
    duplicate_columns: Vec<(String, String)>,
}

#[derive(Debug)]
struct PendingRelation {
    source: String,
    name: String,
    target: String,
    kind: RelationKind,
}

/// Adds columns to one table under construction.
pub struct TableBuilder<'a> {
    builder: &'a mut Builder,
    table: TableId,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table. Columns are added through the returned
    /// [`TableBuilder`]; declaration order is preserved.
    pub fn table(&mut self, name: impl Into<String>) -> TableBuilder<'_> {
        let name = name.into();
        let table = match self.table_lookup.get(&name) {
            Some(id) => *id,
            None => {
                let id = TableId(self.tables.len());
                self.table_lookup.insert(name.clone(), id);
                self.tables.push(Table::new(id, name));
                id
            }
        };

        TableBuilder {
            builder: self,
            table,
        }
    }

    /// Declare a one-cardinality relation from `source` to `target`.
    pub fn has_one(
        &mut self,
        source: impl Into<String>,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Self {
        self.relation(source, name, target, RelationKind::One)
    }

    /// Declare a many-cardinality relation from `source` to `target`.
    pub fn has_many(
        &mut self,
        source: impl Into<String>,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Self {
        self.relation(source, name, target, RelationKind::Many)
    }

    fn relation(
        &mut self,
        source: impl Into<String>,
        name: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
    ) -> &mut Self {
        self.relations.push(PendingRelation {
            source: source.into(),
            name: name.into(),
            target: target.into(),
            kind,
        });
        self
    }

    /// Resolve relation names and freeze the schema.
    pub fn build(self) -> Result<Schema> {
        if let Some((table, column)) = self.duplicate_columns.first() {
            return Err(Error::invalid_schema(format!(
                "column `{column}` declared twice on table `{table}`"
            )));
        }

        let mut relations: HashMap<TableId, IndexMap<String, Relation>> = HashMap::new();

        for pending in self.relations {
            let Some(source) = self.table_lookup.get(&pending.source).copied() else {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` declared on unknown table `{}`",
                    pending.name, pending.source
                )));
            };
            let Some(target) = self.table_lookup.get(&pending.target).copied() else {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` on `{}` targets unknown table `{}`",
                    pending.name, pending.source, pending.target
                )));
            };

            let entry = relations.entry(source).or_default();
            if entry.contains_key(&pending.name) {
                return Err(Error::invalid_schema(format!(
                    "relation `{}` declared twice on table `{}`",
                    pending.name, pending.source
                )));
            }

            entry.insert(
                pending.name.clone(),
                Relation {
                    name: pending.name,
                    source,
                    target,
                    kind: pending.kind,
                },
            );
        }

        let mut tables = IndexMap::new();
        let mut names = HashMap::new();

        for table in self.tables {
            if table.columns.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has no columns",
                    table.name
                )));
            }
            names.insert(table.name.clone(), table.id);
            tables.insert(table.id, table);
        }

        Ok(Schema {
            tables,
            names,
            relations,
        })
    }
}

impl TableBuilder<'_> {
    /// Add a column with the given wire type.
    pub fn column(self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.push_column(name.into(), ty, None)
    }

    /// Add a column with an explicit backend storage type.
    pub fn column_with_storage(
        self,
        name: impl Into<String>,
        ty: stmt::Type,
        storage_ty: StorageType,
    ) -> Self {
        self.push_column(name.into(), ty, Some(storage_ty))
    }

    fn push_column(self, name: String, ty: stmt::Type, storage_ty: Option<StorageType>) -> Self {
        let table = &mut self.builder.tables[self.table.0];

        if table.columns.contains_key(&name) {
            self.builder
                .duplicate_columns
                .push((table.name.clone(), name));
            return self;
        }

        let id = ColumnId {
            table: table.id,
            index: table.columns.len(),
        };
        table.columns.insert(
            name.clone(),
            Column {
                id,
                name,
                ty,
                storage_ty,
            },
        );
        self
    }
}
