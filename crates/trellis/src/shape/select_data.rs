use super::{FieldShape, FilterShape, OrderShape};
use indexmap::IndexMap;
use std::sync::Arc;
use trellis_core::schema::RelationKind;

/// The generated graph-surface description of one selectable level: the
/// table's output fields, its filter/order input shapes, and every
/// relation reachable from it within the generation limits.
///
/// This is the engine's half of the "queryable graph API surface"; the
/// mapping from these shapes to a concrete graph type system is a
/// mechanical job left to the transport layer.
#[derive(Debug, Clone)]
pub struct SelectData {
    /// The type name keying this level in requested-field trees
    pub type_name: String,

    pub fields: Arc<FieldShape>,

    pub filters: Arc<FilterShape>,

    /// Absent where ordering is not exposed (one-cardinality relations)
    pub order: Option<Arc<OrderShape>>,

    /// Reachable relations, keyed by relation name
    pub relations: IndexMap<String, RelationData>,
}

#[derive(Debug, Clone)]
pub struct RelationData {
    pub kind: RelationKind,

    pub data: SelectData,
}
