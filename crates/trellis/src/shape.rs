mod cache;
pub use cache::ShapeCache;

mod field;
pub use field::FieldShape;

mod filter;
pub use filter::FilterShape;

mod order;
pub use order::OrderShape;

mod select_data;
pub use select_data::{RelationData, SelectData};
