use super::Error;

/// Error when a filter combines an `OR` list with plain operator fields at
/// the same nesting level.
///
/// `OR` and explicit operator (or column) keys are mutually exclusive on a
/// single filter value; a request that populates both is malformed.
#[derive(Debug)]
pub(super) struct ConflictingFilterSyntax {
    /// Name of the column, table, or relation carrying the conflict.
    pub(super) target: Box<str>,

    /// True when the conflict is on a table-level filter, false for a
    /// column operator set.
    pub(super) table_level: bool,
}

impl std::error::Error for ConflictingFilterSyntax {}

impl core::fmt::Display for ConflictingFilterSyntax {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let scope = if self.table_level {
            "table filters"
        } else {
            "column operators"
        };
        write!(
            f,
            "WHERE {}: cannot specify both fields and 'OR' in {}",
            self.target, scope
        )
    }
}

impl Error {
    /// Creates a conflicting filter syntax error for a column operator set.
    pub fn conflicting_column_filters(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConflictingFilterSyntax(
            ConflictingFilterSyntax {
                target: column.into().into(),
                table_level: false,
            },
        ))
    }

    /// Creates a conflicting filter syntax error for a table-level filter.
    pub fn conflicting_table_filters(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConflictingFilterSyntax(
            ConflictingFilterSyntax {
                target: table.into().into(),
                table_level: true,
            },
        ))
    }

    /// Returns `true` if this error is a conflicting filter syntax error.
    pub fn is_conflicting_filter_syntax(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConflictingFilterSyntax(_))
    }
}
