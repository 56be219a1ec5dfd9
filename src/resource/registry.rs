//! Resource Registry - look up adapters by type name
//!
//! The provider builds one registry of resources and one of data sources per
//! configured client; the host resolves every call through them.

use super::adapter::{DynamicDataSource, DynamicResource};
use std::collections::HashMap;

/// Anything stored in a registry exposes its full type name.
pub trait Named {
    fn name(&self) -> &'static str;
}

impl Named for dyn DynamicResource {
    fn name(&self) -> &'static str {
        self.type_name()
    }
}

impl Named for dyn DynamicDataSource {
    fn name(&self) -> &'static str {
        self.type_name()
    }
}

/// Type-name keyed adapter map
pub struct Registry<T: ?Sized + Named> {
    entries: HashMap<&'static str, Box<T>>,
}

pub type ResourceRegistry = Registry<dyn DynamicResource>;
pub type DataSourceRegistry = Registry<dyn DynamicDataSource>;

impl<T: ?Sized + Named> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: ?Sized + Named> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an adapter; a later registration under the same name replaces
    /// the earlier one.
    pub fn register(&mut self, entry: Box<T>) -> &mut Self {
        self.entries.insert(entry.name(), entry);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&T> {
        self.entries.get(type_name).map(|b| b.as_ref())
    }

    /// All registered type names, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
