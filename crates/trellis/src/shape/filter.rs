use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use trellis_core::schema::Table;
use trellis_core::stmt;

/// The filter input shape of a table.
///
/// Every column carries the same operator set over its own scalar type,
/// plus the self-referential OR list, so the shape records only the
/// column-to-type mapping and the synthesized input type name.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterShape {
    /// Synthesized input type name, `{Table}Filters`
    pub type_name: String,

    pub columns: IndexMap<String, stmt::Type>,
}

impl FilterShape {
    pub(crate) fn of(table: &Table) -> Self {
        Self {
            type_name: format!("{}Filters", table.name.to_upper_camel_case()),
            columns: table
                .columns()
                .map(|column| (column.name.clone(), column.ty.clone()))
                .collect(),
        }
    }
}
