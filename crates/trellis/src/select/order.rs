use super::OrderByArgs;
use trellis_core::schema::Table;
use trellis_core::stmt::{Expr, OrderBy, OrderByExpr};
use trellis_core::{Error, Result};

/// Turn per-column order directives into an ordered sort-key sequence.
///
/// Entries are sorted by priority descending; the sort is stable, so input
/// order is preserved for equal priority. Columns without a directive are
/// omitted entirely rather than defaulting to ascending.
pub fn extract_order_by(table: &Table, order_args: &OrderByArgs) -> Result<OrderBy> {
    let mut entries: Vec<_> = order_args
        .iter()
        .filter_map(|(name, directive)| directive.map(|d| (name.as_str(), d)))
        .collect();

    entries.sort_by(|a, b| b.1.priority.cmp(&a.1.priority));

    let mut exprs = vec![];

    for (column_name, directive) in entries {
        let Some(column) = table.column(column_name) else {
            return Err(Error::unknown_column(&table.name, column_name));
        };

        exprs.push(OrderByExpr {
            expr: Expr::column(column),
            order: directive.direction,
        });
    }

    Ok(OrderBy { exprs })
}
