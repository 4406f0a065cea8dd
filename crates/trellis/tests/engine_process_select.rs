use pretty_assertions::assert_eq;
use trellis::schema::Schema;
use trellis::select::{
    FieldNode, FilterColumnOperators, Filters, OrderByArgs, OrderByDirective, TableSelectArgs,
};
use trellis::stmt::{Direction, Expr, Type, Value};
use trellis::Engine;

fn blog_schema() -> Schema {
    let mut builder = Schema::builder();
    builder
        .table("users")
        .column("id", Type::I64)
        .column("age", Type::I64);
    builder
        .table("posts")
        .column("id", Type::I64)
        .column("title", Type::String)
        .column("createdAt", Type::Timestamp);
    builder.has_many("users", "posts", "posts");
    builder.build().unwrap()
}

/// The full pipeline: adult users with their five most recent posts.
#[test]
fn adult_users_with_recent_posts() {
    let engine = Engine::new(blog_schema());

    // where: {age: {gte: 18}, OR: []}, the empty OR is discarded
    let filter = Filters {
        columns: [(
            "age".to_string(),
            Some(FilterColumnOperators {
                gte: Some(Value::I64(18)),
                ..Default::default()
            }),
        )]
        .into_iter()
        .collect(),
        or: Some(vec![]),
    };

    let post_order: OrderByArgs = [(
        "createdAt".to_string(),
        Some(OrderByDirective {
            direction: Direction::Desc,
            priority: 1,
        }),
    )]
    .into_iter()
    .collect();

    let posts = FieldNode::new("posts")
        .with_args(TableSelectArgs {
            order_by: Some(post_order),
            limit: Some(5),
            ..Default::default()
        })
        .field("UsersPostsRelation", FieldNode::new("id"))
        .field("UsersPostsRelation", FieldNode::new("title"))
        .field("UsersPostsRelation", FieldNode::new("createdAt"));

    let root = FieldNode::new("users")
        .with_args(TableSelectArgs {
            filter: Some(filter),
            ..Default::default()
        })
        .field("Users", FieldNode::new("id"))
        .field("Users", FieldNode::new("age"))
        .field("Users", posts);

    let args = engine.process_select("users", &root, "Users").unwrap();

    let users = engine.schema().table_by_name("users").unwrap();
    let posts_table = engine.schema().table_by_name("posts").unwrap();

    // root projection and predicate
    let names: Vec<_> = args.columns.iter().map(String::as_str).collect();
    assert_eq!(names, ["id", "age"]);
    assert_eq!(
        args.filter,
        Some(Expr::ge(
            Expr::column(users.column("age").unwrap()),
            Value::I64(18)
        ))
    );
    assert_eq!(args.order_by, None);
    assert_eq!(args.offset, None);
    assert_eq!(args.limit, None);

    // nested posts parameters
    let with = args.with.as_ref().unwrap();
    let posts_args = &with["posts"];

    let names: Vec<_> = posts_args.columns.iter().map(String::as_str).collect();
    assert_eq!(names, ["id", "title", "createdAt"]);
    assert_eq!(posts_args.limit, Some(5));
    assert_eq!(posts_args.offset, None);

    let order_by = posts_args.order_by.as_ref().unwrap();
    assert_eq!(order_by.exprs.len(), 1);
    assert_eq!(
        order_by.exprs[0].expr,
        Expr::column(posts_table.column("createdAt").unwrap())
    );
    assert_eq!(order_by.exprs[0].order, Direction::Desc);

    // posts has no relations of its own
    assert_eq!(posts_args.with, None);
}

#[test]
fn root_order_and_pagination_compile() {
    let engine = Engine::new(blog_schema());

    let order: OrderByArgs = [
        (
            "age".to_string(),
            Some(OrderByDirective {
                direction: Direction::Asc,
                priority: 1,
            }),
        ),
        (
            "id".to_string(),
            Some(OrderByDirective {
                direction: Direction::Desc,
                priority: 2,
            }),
        ),
    ]
    .into_iter()
    .collect();

    let root = FieldNode::new("users")
        .with_args(TableSelectArgs {
            order_by: Some(order),
            offset: Some(20),
            limit: Some(10),
            ..Default::default()
        })
        .field("Users", FieldNode::new("id"));

    let args = engine.process_select("users", &root, "Users").unwrap();
    let users = engine.schema().table_by_name("users").unwrap();

    let order_by = args.order_by.unwrap();
    // priority 2 first
    assert_eq!(
        order_by.exprs[0].expr,
        Expr::column(users.column("id").unwrap())
    );
    assert_eq!(order_by.exprs[1].expr,
        Expr::column(users.column("age").unwrap())
    );
    assert_eq!(args.offset, Some(20));
    assert_eq!(args.limit, Some(10));
}

#[test]
fn root_without_matching_selection_projects_fallback() {
    let engine = Engine::new(blog_schema());

    let root = FieldNode::new("users");
    let args = engine.process_select("users", &root, "Users").unwrap();

    let names: Vec<_> = args.columns.iter().map(String::as_str).collect();
    assert_eq!(names, ["id"]);
    assert_eq!(args.filter, None);
}

#[test]
fn malformed_filter_aborts_whole_request() {
    let engine = Engine::new(blog_schema());

    let filter = Filters {
        columns: [(
            "age".to_string(),
            Some(FilterColumnOperators {
                in_array: Some(vec![]),
                ..Default::default()
            }),
        )]
        .into_iter()
        .collect(),
        or: None,
    };

    let root = FieldNode::new("users")
        .with_args(TableSelectArgs {
            filter: Some(filter),
            ..Default::default()
        })
        .field("Users", FieldNode::new("id"));

    let err = engine.process_select("users", &root, "Users").unwrap_err();
    assert!(err.is_empty_array_operator());
}

#[test]
fn unknown_root_table_is_an_error() {
    let engine = Engine::new(blog_schema());
    let root = FieldNode::new("missing");

    let err = engine.process_select("missing", &root, "Missing").unwrap_err();
    assert!(err.to_string().contains("unknown table"));
}
