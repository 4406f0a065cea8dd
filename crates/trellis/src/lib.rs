mod engine;
pub use engine::{Engine, Options};

pub mod select;

pub mod shape;

pub use trellis_core::{schema, stmt, Error, Result};
