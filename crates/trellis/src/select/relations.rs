use super::{
    extract_filters, extract_order_by, extract_selected_columns, FieldNode, ProcessedSelectArgs,
    ProjectionPolicy,
};
use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use tracing::trace;
use trellis_core::schema::{Schema, Table};
use trellis_core::Result;

/// The walk token threaded through relation traversal.
///
/// Carries the type name the current selection is keyed by, the base used
/// to synthesize child relation type names, and the depth as an explicit
/// parameter instead of encoding depth into the name string alone. The synthesized
/// child name is `{base}{Relation}Relation`, with the capitalized table
/// name as the base at the root, so same-named relations at different
/// depths never collide in the tree's keying.
#[derive(Debug, Clone)]
pub struct TypePath {
    name: String,
    base: String,
    depth: usize,
}

impl TypePath {
    /// Token for the root of a walk. `type_name` keys the root selection;
    /// children synthesize from the capitalized table name.
    pub fn root(type_name: impl Into<String>, table_name: &str) -> Self {
        Self {
            name: type_name.into(),
            base: table_name.to_upper_camel_case(),
            depth: 0,
        }
    }

    /// Token for the sub-selection of `relation` below this one.
    pub fn child(&self, relation: &str) -> Self {
        let name = format!("{}{}Relation", self.base, relation.to_upper_camel_case());
        Self {
            base: name.clone(),
            name,
            depth: self.depth + 1,
        }
    }

    /// The type name keying the selection at this level.
    pub fn type_name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Recursively compile the parameters for every requested relation below
/// `table`.
///
/// Returns `Ok(None)` when the table declares no relations or the tree has
/// no branch keyed by the current type name. Relations the caller did not
/// request are skipped silently. Ordering is compiled only for
/// many-cardinality relations; a single related record has nothing to
/// order. Termination needs no depth bound here: only requested branches
/// are followed, and a requested-field tree is finite.
pub fn extract_relation_params(
    schema: &Schema,
    table: &Table,
    field: &FieldNode,
    path: &TypePath,
    policy: &ProjectionPolicy,
) -> Result<Option<IndexMap<String, ProcessedSelectArgs>>> {
    let Some(relations) = schema.relations(table.id) else {
        return Ok(None);
    };

    let Some(selection) = field.selection(path.type_name()) else {
        return Ok(None);
    };

    let mut args = IndexMap::new();

    for (relation_name, relation) in relations {
        let child = path.child(relation_name);

        let Some(relation_field) = selection.values().find(|f| f.name == *relation_name) else {
            continue;
        };
        let Some(relation_selection) = relation_field.selection(child.type_name()) else {
            continue;
        };

        let target = relation.target(schema);

        let columns = extract_selected_columns(relation_selection, target, policy);

        let filter = match &relation_field.args.filter {
            Some(filters) => extract_filters(target, relation_name, filters)?,
            None => None,
        };

        let order_by = match &relation_field.args.order_by {
            Some(order_args) if relation.is_many() => Some(extract_order_by(target, order_args)?),
            _ => None,
        };

        let with = extract_relation_params(schema, target, relation_field, &child, policy)?;

        trace!(
            relation = %relation_name,
            target = %target.name,
            type_name = %child.type_name(),
            depth = child.depth(),
            "extracted relation params"
        );

        args.insert(
            relation_name.clone(),
            ProcessedSelectArgs {
                columns,
                filter,
                order_by,
                offset: relation_field.args.offset,
                limit: relation_field.args.limit,
                with,
            },
        );
    }

    Ok(Some(args))
}
