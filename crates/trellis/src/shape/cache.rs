use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use trellis_core::schema::TableId;

/// A concurrent memo for per-table compiled shapes.
///
/// Keyed by [`TableId`], a stable opaque schema id, rather than pointer
/// identity. Populated lazily on first use and reused for the lifetime of
/// the process; safe because table schema is immutable after
/// initialization. Reads never block each other, and racing first-touch
/// writes are idempotent: both threads compute equivalent values and the
/// first insert wins. The key set is bounded by schema size, so there is
/// no eviction.
#[derive(Debug)]
pub struct ShapeCache<T> {
    entries: RwLock<HashMap<TableId, Arc<T>>>,
}

impl<T> Default for ShapeCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShapeCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The cached shape for `table`, computing it on first use.
    pub fn get_or_compute(&self, table: TableId, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some(shape) = self.entries.read().expect("shape cache poisoned").get(&table) {
            return shape.clone();
        }

        debug!(table = table.0, "shape cache miss");

        let shape = Arc::new(compute());

        let mut entries = self.entries.write().expect("shape cache poisoned");
        entries.entry(table).or_insert(shape).clone()
    }

    /// Number of tables with a computed shape.
    pub fn len(&self) -> usize {
        self.entries.read().expect("shape cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
