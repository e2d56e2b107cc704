//! Name and URI lookup for builtins.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::add_days::AddDays;
use crate::builtin::Builtin;

/// Builtins keyed by name, with a secondary index by URI.
#[derive(Clone, Default)]
pub struct BuiltinRegistry {
    by_name: HashMap<String, Arc<dyn Builtin>>,
    by_uri: HashMap<String, Arc<dyn Builtin>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every date builtin with default options.
    pub fn with_date_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AddDays::new()));
        registry
    }

    /// Register a builtin under its name and URI.
    ///
    /// Returns the builtin previously registered under the same name, if any.
    pub fn register(&mut self, builtin: Arc<dyn Builtin>) -> Option<Arc<dyn Builtin>> {
        let name = builtin.name().to_string();
        let uri = builtin.uri();
        debug!(name = %name, uri = %uri, arity = builtin.arity(), "registering builtin");

        let previous = self.by_name.insert(name, Arc::clone(&builtin));
        if let Some(old) = &previous {
            // Another builtin may have claimed the old URI since
            let old_uri = old.uri();
            if self
                .by_uri
                .get(&old_uri)
                .is_some_and(|current| Arc::ptr_eq(current, old))
            {
                self.by_uri.remove(&old_uri);
            }
        }
        self.by_uri.insert(uri, builtin);
        previous
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Builtin>> {
        self.by_name.get(name).cloned()
    }

    pub fn get_by_uri(&self, uri: &str) -> Option<Arc<dyn Builtin>> {
        self.by_uri.get(uri).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl std::fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinRegistry")
            .field("names", &self.names())
            .finish()
    }
}
