use indexmap::IndexMap;
use trellis_core::schema::Table;
use trellis_core::stmt;

/// The scalar output fields a table exposes, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub fields: IndexMap<String, stmt::Type>,
}

impl FieldShape {
    pub(crate) fn of(table: &Table) -> Self {
        Self {
            fields: table
                .columns()
                .map(|column| (column.name.clone(), column.ty.clone()))
                .collect(),
        }
    }
}
