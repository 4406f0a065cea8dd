mod args;
pub use args::{FilterColumnOperators, Filters, OrderByArgs, OrderByDirective, TableSelectArgs};

mod columns;
pub use columns::{extract_selected_columns, ProjectionPolicy};

mod filters;
pub use filters::{extract_column_filters, extract_filters};

mod order;
pub use order::extract_order_by;

mod processed;
pub use processed::ProcessedSelectArgs;

mod relations;
pub use relations::{extract_relation_params, TypePath};

mod tree;
pub use tree::FieldNode;
