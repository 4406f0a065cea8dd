use super::FieldNode;
use indexmap::{IndexMap, IndexSet};
use trellis_core::schema::{Column, StorageType, Table};

/// Policy for the fallback column used when a selection projects no real
/// columns (for example, a caller that requested only nested relations).
///
/// Every generated query must select at least one real column. Some
/// backends cannot select certain storage classes as the sole bare column
/// of a query, so the fallback prefers columns outside the denylist. The
/// default denylist carries the storage classes known to be unsafe; a
/// backend without the restriction can pass [`ProjectionPolicy::allow_all`].
#[derive(Debug, Clone)]
pub struct ProjectionPolicy {
    /// Storage types unsafe to select as a sole bare column
    pub deny: Vec<StorageType>,
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        Self {
            deny: vec![StorageType::BigInt, StorageType::Json, StorageType::Blob],
        }
    }
}

impl ProjectionPolicy {
    pub fn allow_all() -> Self {
        Self { deny: vec![] }
    }

    fn is_denied(&self, column: &Column) -> bool {
        column
            .storage_ty
            .as_ref()
            .is_some_and(|ty| self.deny.contains(ty))
    }
}

/// Derive the minimal column projection for one selection level.
///
/// Requested fields whose name matches a real column are projected in
/// selection order; names that match nothing are skipped, not errors.
/// An empty result falls back to a single deterministically chosen column.
pub fn extract_selected_columns(
    selection: &IndexMap<String, FieldNode>,
    table: &Table,
    policy: &ProjectionPolicy,
) -> IndexSet<String> {
    let mut selected = IndexSet::new();

    for field in selection.values() {
        if table.column(&field.name).is_some() {
            selected.insert(field.name.clone());
        }
    }

    if selected.is_empty() {
        let fallback = table
            .columns()
            .find(|column| !policy.is_denied(column))
            .unwrap_or_else(|| table.columns().next().expect("table has no columns"));

        selected.insert(fallback.name.clone());
    }

    selected
}
