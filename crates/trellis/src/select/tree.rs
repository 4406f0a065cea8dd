use super::TableSelectArgs;
use indexmap::IndexMap;

/// One field occurrence in a requested-field tree.
///
/// Sub-selections are keyed by type name at each branching point, then by
/// response key; the field's own `name` is carried inside because a
/// response key may alias it. This mirrors how parsed graph-query resolve
/// information is keyed, so a transport layer can map its own tree into
/// this one mechanically.
#[derive(Debug, Clone, Default)]
pub struct FieldNode {
    /// The field's own name
    pub name: String,

    /// Arguments bound to this field occurrence
    pub args: TableSelectArgs,

    /// Sub-selections, keyed by type name and then by response key
    pub fields_by_type: IndexMap<String, IndexMap<String, FieldNode>>,
}

impl FieldNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: TableSelectArgs) -> Self {
        self.args = args;
        self
    }

    /// Append a child field under `type_name`, keyed by its own name.
    pub fn field(mut self, type_name: impl Into<String>, child: FieldNode) -> Self {
        self.fields_by_type
            .entry(type_name.into())
            .or_default()
            .insert(child.name.clone(), child);
        self
    }

    /// The sub-selection keyed by `type_name`, if the caller requested one.
    pub fn selection(&self, type_name: &str) -> Option<&IndexMap<String, FieldNode>> {
        self.fields_by_type.get(type_name)
    }
}
