use crate::select::{
    extract_filters, extract_order_by, extract_relation_params, extract_selected_columns,
    FieldNode, ProcessedSelectArgs, ProjectionPolicy, TypePath,
};
use crate::shape::{FieldShape, FilterShape, OrderShape, RelationData, SelectData, ShapeCache};
use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use trellis_core::schema::{Schema, Table, TableId};
use trellis_core::{bail, Result};

/// Engine-wide options, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Maximum relation depth exposed by shape generation. `None` exposes
    /// every path the visited-table check permits.
    pub relations_depth_limit: Option<usize>,

    /// Fallback-column policy for empty projections.
    pub projection: ProjectionPolicy,
}

/// The front door: owns the immutable schema, the per-table shape caches,
/// and the options, and drives the extraction pipeline per request.
#[derive(Debug)]
pub struct Engine {
    schema: Schema,

    fields: ShapeCache<FieldShape>,
    filters: ShapeCache<FilterShape>,
    orders: ShapeCache<OrderShape>,

    options: Options,
}

impl Engine {
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, Options::default())
    }

    pub fn with_options(schema: Schema, options: Options) -> Self {
        Self {
            schema,
            fields: ShapeCache::new(),
            filters: ShapeCache::new(),
            orders: ShapeCache::new(),
            options,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The memoized field shape for `table`.
    pub fn field_shape(&self, table: &Table) -> Arc<FieldShape> {
        self.fields
            .get_or_compute(table.id, || FieldShape::of(table))
    }

    /// The memoized filter shape for `table`.
    pub fn filter_shape(&self, table: &Table) -> Arc<FilterShape> {
        self.filters
            .get_or_compute(table.id, || FilterShape::of(table))
    }

    /// The memoized order shape for `table`.
    pub fn order_shape(&self, table: &Table) -> Arc<OrderShape> {
        self.orders
            .get_or_compute(table.id, || OrderShape::of(table))
    }

    /// Generate the graph-surface description rooted at `table_name`.
    ///
    /// Returns `None` for an unknown table. Recursion over the relation
    /// graph is bounded by the already-visited-table set (a table never
    /// appears twice on one path) and by `relations_depth_limit` when set.
    pub fn select_data(&self, table_name: &str) -> Option<SelectData> {
        let table = self.schema.table_by_name(table_name)?;
        let path = TypePath::root(table.name.to_upper_camel_case(), &table.name);

        Some(self.select_data_inner(table, &path, true, &HashSet::new()))
    }

    fn select_data_inner(
        &self,
        table: &Table,
        path: &TypePath,
        with_order: bool,
        visited: &HashSet<TableId>,
    ) -> SelectData {
        let fields = self.field_shape(table);
        let filters = self.filter_shape(table);
        let order = with_order.then(|| self.order_shape(table));

        let relation_entries = self.schema.relations(table.id);

        let stop = visited.contains(&table.id)
            || self
                .options
                .relations_depth_limit
                .is_some_and(|limit| path.depth() >= limit)
            || relation_entries.map_or(true, |relations| relations.is_empty());

        let mut relations = IndexMap::new();

        if !stop {
            let mut visited = visited.clone();
            visited.insert(table.id);

            for (relation_name, relation) in relation_entries.unwrap() {
                let child = path.child(relation_name);
                let target = relation.target(&self.schema);

                let data = self.select_data_inner(target, &child, relation.is_many(), &visited);

                relations.insert(
                    relation_name.clone(),
                    RelationData {
                        kind: relation.kind,
                        data,
                    },
                );
            }
        }

        SelectData {
            type_name: path.type_name().to_string(),
            fields,
            filters,
            order,
            relations,
        }
    }

    /// Compile one request into the parameter tree the storage engine
    /// executes: root projection, root predicate and ordering, pagination,
    /// and the nested `with` map for every requested relation.
    ///
    /// `type_name` keys the root selection in the requested-field tree.
    pub fn process_select(
        &self,
        table_name: &str,
        field: &FieldNode,
        type_name: &str,
    ) -> Result<ProcessedSelectArgs> {
        let Some(table) = self.schema.table_by_name(table_name) else {
            bail!("unknown table `{}`", table_name);
        };

        let path = TypePath::root(type_name, &table.name);

        let empty = IndexMap::new();
        let selection = field.selection(path.type_name()).unwrap_or(&empty);
        let columns = extract_selected_columns(selection, table, &self.options.projection);

        let filter = match &field.args.filter {
            Some(filters) => extract_filters(table, &table.name, filters)?,
            None => None,
        };

        let order_by = match &field.args.order_by {
            Some(order_args) => Some(extract_order_by(table, order_args)?),
            None => None,
        };

        let with =
            extract_relation_params(&self.schema, table, field, &path, &self.options.projection)?;

        debug!(table = %table.name, "processed select args");

        Ok(ProcessedSelectArgs {
            columns,
            filter,
            order_by,
            offset: field.args.offset,
            limit: field.args.limit,
            with,
        })
    }
}
