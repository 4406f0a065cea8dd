mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses Trellis's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
