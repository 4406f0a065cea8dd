use super::{FilterColumnOperators, Filters};
use trellis_core::schema::{Column, Table};
use trellis_core::stmt::{Expr, Value};
use trellis_core::{Error, Result};

/// Compile one column's operator set into a predicate fragment.
///
/// Returns `Ok(None)` when the operator set contributes no constraint.
/// An `or` list that is present but empty is treated as absent; a
/// populated `or` list alongside any populated plain operator fails with a
/// conflicting-filter-syntax error naming the column.
pub fn extract_column_filters(
    column: &Column,
    column_name: &str,
    ops: &FilterColumnOperators,
) -> Result<Option<Expr>> {
    let or = ops.or.as_ref().filter(|alternatives| !alternatives.is_empty());

    if let Some(alternatives) = or {
        if ops.has_operators() {
            return Err(Error::conflicting_column_filters(column_name));
        }

        let mut variants = vec![];

        for alternative in alternatives {
            if let Some(extracted) = extract_column_filters(column, column_name, alternative)? {
                variants.push(extracted);
            }
        }

        return Ok(match variants.len() {
            0 => None,
            _ => Some(Expr::or_from_vec(variants)),
        });
    }

    let mut variants = vec![];

    if let Some(value) = &ops.eq {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::eq(Expr::column(column), value));
    }
    if let Some(value) = &ops.ne {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::ne(Expr::column(column), value));
    }
    if let Some(value) = &ops.gt {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::gt(Expr::column(column), value));
    }
    if let Some(value) = &ops.gte {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::ge(Expr::column(column), value));
    }
    if let Some(value) = &ops.lt {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::lt(Expr::column(column), value));
    }
    if let Some(value) = &ops.lte {
        let value = column.ty.coerce(value.clone())?;
        variants.push(Expr::le(Expr::column(column), value));
    }

    if let Some(pattern) = &ops.like {
        variants.push(Expr::like(Expr::column(column), pattern.as_str()));
    }
    if let Some(pattern) = &ops.not_like {
        variants.push(Expr::not_like(Expr::column(column), pattern.as_str()));
    }
    if let Some(pattern) = &ops.ilike {
        variants.push(Expr::ilike(Expr::column(column), pattern.as_str()));
    }
    if let Some(pattern) = &ops.not_ilike {
        variants.push(Expr::not_ilike(Expr::column(column), pattern.as_str()));
    }

    if let Some(values) = &ops.in_array {
        let list = coerce_array(column, column_name, "inArray", values)?;
        variants.push(Expr::in_list(Expr::column(column), list));
    }
    if let Some(values) = &ops.not_in_array {
        let list = coerce_array(column, column_name, "notInArray", values)?;
        variants.push(Expr::not_in_list(Expr::column(column), list));
    }

    if ops.is_null == Some(true) {
        variants.push(Expr::is_null(Expr::column(column)));
    }
    if ops.is_not_null == Some(true) {
        variants.push(Expr::is_not_null(Expr::column(column)));
    }

    Ok(match variants.len() {
        0 => None,
        _ => Some(Expr::and_from_vec(variants)),
    })
}

fn coerce_array(
    column: &Column,
    column_name: &str,
    operator: &'static str,
    values: &[Value],
) -> Result<Value> {
    if values.is_empty() {
        return Err(Error::empty_array_operator(column_name, operator));
    }

    let coerced = values
        .iter()
        .map(|value| column.ty.coerce(value.clone()))
        .collect::<Result<Vec<_>>>()?;

    Ok(Value::List(coerced))
}

/// Compile a table-level filter into one predicate, recursing per column.
///
/// Mirrors [`extract_column_filters`] one level up: empty `or` discarded,
/// `or` alongside populated column entries fails naming `target` (the
/// table or relation the filter applies to), surviving alternatives
/// combine with OR, and per-column fragments combine with AND. A `None`
/// column entry is skipped. A column name the table lacks is a
/// request-shape error.
pub fn extract_filters(table: &Table, target: &str, filters: &Filters) -> Result<Option<Expr>> {
    let or = filters
        .or
        .as_ref()
        .filter(|alternatives| !alternatives.is_empty());

    if or.is_none() && filters.columns.is_empty() {
        return Ok(None);
    }

    if let Some(alternatives) = or {
        if !filters.columns.is_empty() {
            return Err(Error::conflicting_table_filters(target));
        }

        let mut variants = vec![];

        for alternative in alternatives {
            if let Some(extracted) = extract_filters(table, target, alternative)? {
                variants.push(extracted);
            }
        }

        return Ok(match variants.len() {
            0 => None,
            _ => Some(Expr::or_from_vec(variants)),
        });
    }

    let mut variants = vec![];

    for (column_name, ops) in &filters.columns {
        let Some(ops) = ops else {
            continue;
        };

        let Some(column) = table.column(column_name) else {
            return Err(Error::unknown_column(target, column_name));
        };

        if let Some(extracted) = extract_column_filters(column, column_name, ops)? {
            variants.push(extracted);
        }
    }

    Ok(match variants.len() {
        0 => None,
        _ => Some(Expr::and_from_vec(variants)),
    })
}
