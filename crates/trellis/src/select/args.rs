use indexmap::IndexMap;
use trellis_core::stmt::{Direction, Value};

/// Raw filter/order/pagination arguments bound to one field occurrence in
/// a requested-field tree.
#[derive(Debug, Clone, Default)]
pub struct TableSelectArgs {
    /// The `where` argument
    pub filter: Option<Filters>,

    /// The `orderBy` argument
    pub order_by: Option<OrderByArgs>,

    pub offset: Option<u64>,

    pub limit: Option<u64>,
}

/// A per-table filter specification.
///
/// A populated column map and a populated `or` list are mutually
/// exclusive; the table filter compiler rejects values carrying both.
/// A `None` column entry contributes no constraint and is not an error.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Per-column operator sets, keyed by column name
    pub columns: IndexMap<String, Option<FilterColumnOperators>>,

    /// Equal-table alternatives, combined with logical OR
    pub or: Option<Vec<Filters>>,
}

/// A per-column filter specification: one optional slot per operator plus
/// a self-referential `or` list of equal-column alternatives.
///
/// The same mutual-exclusivity rule applies as on [`Filters`]: a populated
/// plain operator alongside a populated `or` list is a request-shape
/// error. An operator that is `None` is absent; `is_null`/`is_not_null`
/// set to `Some(false)` are present but contribute no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterColumnOperators {
    pub eq: Option<Value>,
    pub ne: Option<Value>,
    pub gt: Option<Value>,
    pub gte: Option<Value>,
    pub lt: Option<Value>,
    pub lte: Option<Value>,
    pub like: Option<String>,
    pub not_like: Option<String>,
    pub ilike: Option<String>,
    pub not_ilike: Option<String>,
    pub in_array: Option<Vec<Value>>,
    pub not_in_array: Option<Vec<Value>>,
    pub is_null: Option<bool>,
    pub is_not_null: Option<bool>,

    /// Equal-column alternatives, combined with logical OR
    pub or: Option<Vec<FilterColumnOperators>>,
}

impl FilterColumnOperators {
    /// True when any plain operator slot is populated, regardless of
    /// whether it will contribute a constraint.
    pub(crate) fn has_operators(&self) -> bool {
        self.eq.is_some()
            || self.ne.is_some()
            || self.gt.is_some()
            || self.gte.is_some()
            || self.lt.is_some()
            || self.lte.is_some()
            || self.like.is_some()
            || self.not_like.is_some()
            || self.ilike.is_some()
            || self.not_ilike.is_some()
            || self.in_array.is_some()
            || self.not_in_array.is_some()
            || self.is_null.is_some()
            || self.is_not_null.is_some()
    }
}

/// Per-column order directives, keyed by column name. Columns mapped to
/// `None` are excluded from ordering entirely.
pub type OrderByArgs = IndexMap<String, Option<OrderByDirective>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderByDirective {
    pub direction: Direction,

    /// Higher priority sorts first
    pub priority: i64,
}
