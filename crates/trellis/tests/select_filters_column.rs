use trellis::schema::Schema;
use trellis::select::{extract_column_filters, FilterColumnOperators};
use trellis::stmt::{Expr, ExprAnd, ExprInList, ExprIsNull, ExprLike, ExprOr, Type, Value};

fn schema() -> Schema {
    let mut builder = Schema::builder();
    builder
        .table("users")
        .column("id", Type::I64)
        .column("name", Type::String)
        .column("age", Type::I64)
        .column("score", Type::F64);
    builder.build().unwrap()
}

fn extract(column: &str, ops: FilterColumnOperators) -> trellis::Result<Option<Expr>> {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let col = table.column(column).unwrap();
    extract_column_filters(col, column, &ops)
}

// ---------------------------------------------------------------------------
// Single-operator fragments
// ---------------------------------------------------------------------------

#[test]
fn single_eq_produces_one_binary_fragment() {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let age = table.column("age").unwrap();

    let expr = extract(
        "age",
        FilterColumnOperators {
            eq: Some(Value::I64(18)),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(expr, Expr::eq(Expr::column(age), Value::I64(18)));
}

#[test]
fn single_gte_produces_ge_fragment() {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let age = table.column("age").unwrap();

    let expr = extract(
        "age",
        FilterColumnOperators {
            gte: Some(Value::I64(18)),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(expr, Expr::ge(Expr::column(age), Value::I64(18)));
}

#[test]
fn like_family_sets_flags() {
    let ops = |like, not_like, ilike, not_ilike| FilterColumnOperators {
        like,
        not_like,
        ilike,
        not_ilike,
        ..Default::default()
    };

    let cases = [
        (ops(Some("a%".into()), None, None, None), false, false),
        (ops(None, Some("a%".into()), None, None), true, false),
        (ops(None, None, Some("a%".into()), None), false, true),
        (ops(None, None, None, Some("a%".into())), true, true),
    ];

    for (ops, negate, case_insensitive) in cases {
        let expr = extract("name", ops).unwrap().unwrap();
        let Expr::Like(ExprLike {
            negate: n,
            case_insensitive: ci,
            ..
        }) = expr
        else {
            panic!("expected a Like expression");
        };
        assert_eq!((n, ci), (negate, case_insensitive));
    }
}

#[test]
fn in_array_produces_in_list_with_coerced_values() {
    let expr = extract(
        "age",
        FilterColumnOperators {
            in_array: Some(vec![Value::I64(1), Value::F64(2.0)]),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    let Expr::InList(ExprInList { negate, list, .. }) = expr else {
        panic!("expected an InList expression");
    };
    assert!(!negate);
    assert_eq!(
        *list,
        Expr::Value(Value::List(vec![Value::I64(1), Value::I64(2)]))
    );
}

#[test]
fn is_null_true_produces_null_check() {
    let expr = extract(
        "name",
        FilterColumnOperators {
            is_null: Some(true),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    let Expr::IsNull(ExprIsNull { negate, .. }) = expr else {
        panic!("expected an IsNull expression");
    };
    assert!(!negate);
}

#[test]
fn is_null_false_contributes_nothing() {
    let extracted = extract(
        "name",
        FilterColumnOperators {
            is_null: Some(false),
            is_not_null: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(extracted, None);
}

#[test]
fn no_operators_is_no_constraint() {
    assert_eq!(extract("age", FilterColumnOperators::default()).unwrap(), None);
}

// ---------------------------------------------------------------------------
// Multiple operators combine with AND, canonical order
// ---------------------------------------------------------------------------

#[test]
fn multiple_operators_combine_with_and() {
    let expr = extract(
        "age",
        FilterColumnOperators {
            gte: Some(Value::I64(18)),
            lt: Some(Value::I64(65)),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    let Expr::And(ExprAnd { operands }) = expr else {
        panic!("expected an And expression");
    };
    assert_eq!(operands.len(), 2);
    // canonical operator order: gte before lt regardless of input shape
    assert!(matches!(&operands[0], Expr::BinaryOp(op) if op.op.to_string() == ">="));
    assert!(matches!(&operands[1], Expr::BinaryOp(op) if op.op.to_string() == "<"));
}

// ---------------------------------------------------------------------------
// OR handling
// ---------------------------------------------------------------------------

#[test]
fn or_alongside_operator_is_conflicting_syntax() {
    let err = extract(
        "age",
        FilterColumnOperators {
            eq: Some(Value::I64(1)),
            or: Some(vec![FilterColumnOperators::default()]),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(err.is_conflicting_filter_syntax());
    assert!(err.to_string().contains("age"));
}

#[test]
fn empty_or_is_discarded() {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let age = table.column("age").unwrap();

    let expr = extract(
        "age",
        FilterColumnOperators {
            eq: Some(Value::I64(1)),
            or: Some(vec![]),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(expr, Expr::eq(Expr::column(age), Value::I64(1)));
}

#[test]
fn or_of_empty_alternatives_is_no_constraint() {
    let extracted = extract(
        "age",
        FilterColumnOperators {
            or: Some(vec![
                FilterColumnOperators::default(),
                FilterColumnOperators::default(),
            ]),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(extracted, None);
}

#[test]
fn or_with_single_survivor_unwraps() {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let age = table.column("age").unwrap();

    let expr = extract(
        "age",
        FilterColumnOperators {
            or: Some(vec![
                FilterColumnOperators {
                    eq: Some(Value::I64(3)),
                    ..Default::default()
                },
                FilterColumnOperators::default(),
            ]),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(expr, Expr::eq(Expr::column(age), Value::I64(3)));
}

#[test]
fn or_with_two_survivors_wraps_in_or() {
    let expr = extract(
        "age",
        FilterColumnOperators {
            or: Some(vec![
                FilterColumnOperators {
                    lt: Some(Value::I64(10)),
                    ..Default::default()
                },
                FilterColumnOperators {
                    gt: Some(Value::I64(90)),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    let Expr::Or(ExprOr { operands }) = expr else {
        panic!("expected an Or expression");
    };
    assert_eq!(operands.len(), 2);
}

#[test]
fn nested_or_alternatives_recurse() {
    let expr = extract(
        "age",
        FilterColumnOperators {
            or: Some(vec![FilterColumnOperators {
                or: Some(vec![FilterColumnOperators {
                    eq: Some(Value::I64(5)),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert!(expr.is_binary_op());
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

#[test]
fn empty_in_array_is_usage_error() {
    let err = extract(
        "age",
        FilterColumnOperators {
            in_array: Some(vec![]),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(err.is_empty_array_operator());
    assert!(err.to_string().contains("inArray"));
    assert!(err.to_string().contains("age"));
}

#[test]
fn empty_not_in_array_is_usage_error() {
    let err = extract(
        "age",
        FilterColumnOperators {
            not_in_array: Some(vec![]),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(err.is_empty_array_operator());
    assert!(err.to_string().contains("notInArray"));
}

#[test]
fn literal_of_wrong_type_fails_coercion() {
    let err = extract(
        "age",
        FilterColumnOperators {
            eq: Some(Value::from("eighteen")),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(err.is_type_conversion());
}

#[test]
fn float_column_widens_integer_literal() {
    let schema = schema();
    let table = schema.table_by_name("users").unwrap();
    let score = table.column("score").unwrap();

    let expr = extract(
        "score",
        FilterColumnOperators {
            gt: Some(Value::I64(3)),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(expr, Expr::gt(Expr::column(score), Value::F64(3.0)));
}
