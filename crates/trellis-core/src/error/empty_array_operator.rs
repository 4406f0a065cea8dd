use super::Error;

/// Error when an array operator is given a zero-length literal array.
///
/// `inArray`/`notInArray` with `[]` is a usage error rather than a vacuous
/// predicate: silently compiling it would turn a malformed request into a
/// query that matches nothing (or everything).
#[derive(Debug)]
pub(super) struct EmptyArrayOperator {
    pub(super) column: Box<str>,
    pub(super) operator: &'static str,
}

impl std::error::Error for EmptyArrayOperator {}

impl core::fmt::Display for EmptyArrayOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "WHERE {}: unable to use operator {} with an empty array",
            self.column, self.operator
        )
    }
}

impl Error {
    /// Creates an empty array operator error.
    pub fn empty_array_operator(column: impl Into<String>, operator: &'static str) -> Error {
        Error::from(super::ErrorKind::EmptyArrayOperator(EmptyArrayOperator {
            column: column.into().into(),
            operator,
        }))
    }

    /// Returns `true` if this error is an empty array operator error.
    pub fn is_empty_array_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyArrayOperator(_))
    }
}
