use indexmap::{IndexMap, IndexSet};
use trellis_core::stmt::{Expr, OrderBy};

/// The compiled parameters for one relation level of a nested fetch.
///
/// Built bottom-up by the relation walker, consumed top-down by the
/// storage engine; owned exclusively by the request that created it and
/// never cached or shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedSelectArgs {
    /// Columns to materialize, in selection order
    pub columns: IndexSet<String>,

    /// The compiled `where` predicate, if any constraint survived
    pub filter: Option<Expr>,

    /// The compiled sort-key sequence, when ordering was requested
    pub order_by: Option<OrderBy>,

    pub offset: Option<u64>,

    pub limit: Option<u64>,

    /// Compiled parameters for requested nested relations, keyed by
    /// relation name. `None` when the level's table has no relations or
    /// the request had no matching branch.
    pub with: Option<IndexMap<String, ProcessedSelectArgs>>,
}
