use super::Error;

/// Error when filter or order arguments name a column the table lacks.
///
/// Unmatched names in the requested-field *tree* are silently skipped; a
/// filter or order directive keyed by a nonexistent column is a malformed
/// request and fails compilation.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    pub(super) target: Box<str>,
    pub(super) column: Box<str>,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column `{}` for `{}`", self.column, self.target)
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(target: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn {
            target: target.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
