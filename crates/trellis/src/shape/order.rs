use heck::ToUpperCamelCase;
use trellis_core::schema::Table;

/// The order input shape of a table: every column is orderable by an
/// `{direction, priority}` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderShape {
    /// Synthesized input type name, `{Table}OrderBy`
    pub type_name: String,

    pub columns: Vec<String>,
}

impl OrderShape {
    pub(crate) fn of(table: &Table) -> Self {
        Self {
            type_name: format!("{}OrderBy", table.name.to_upper_camel_case()),
            columns: table.columns().map(|column| column.name.clone()).collect(),
        }
    }
}
