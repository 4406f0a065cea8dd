mod conflicting_filter_syntax;
mod empty_array_operator;
mod invalid_schema;
mod invalid_type_conversion;
mod unknown_column;

use conflicting_filter_syntax::ConflictingFilterSyntax;
use empty_array_operator::EmptyArrayOperator;
use invalid_schema::InvalidSchema;
use invalid_type_conversion::InvalidTypeConversion;
use std::sync::Arc;
use unknown_column::UnknownColumn;

/// Return early with an adhoc error built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Create an adhoc error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building a schema or compiling a request.
///
/// All request-shape errors are fatal to the request that produced them:
/// there is no partial-success mode and a single malformed filter fragment
/// aborts compilation of the whole request.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added
    /// context first, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let mut inner = consequent.inner;
        Arc::get_mut(&mut inner)
            .expect("consequent error must be uniquely owned")
            .cause = Some(self);
        Error { inner }
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(anyhow::Error::msg(match args.as_str() {
            Some(s) => s.to_string(),
            None => args.to_string(),
        }))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    ConflictingFilterSyntax(ConflictingFilterSyntax),
    EmptyArrayOperator(EmptyArrayOperator),
    InvalidSchema(InvalidSchema),
    InvalidTypeConversion(InvalidTypeConversion),
    UnknownColumn(UnknownColumn),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            ConflictingFilterSyntax(err) => core::fmt::Display::fmt(err, f),
            EmptyArrayOperator(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidTypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnknownColumn(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
