//! # Type Registry
//!
//! String-keyed registry of type-erased, zero-argument factories with
//! thread-safe registration and resolution.
//!
//! ## Overview
//!
//! The registry owns a mapping from type key to factory. Registering a type
//! stores a factory that hydrates a fresh zero value per invocation;
//! resolving a key invokes the stored factory and downcasts its product to
//! the caller's requested type.
//!
//! ## Key Features
//!
//! - **Thread-safe operations** using a read-write lock for concurrent access
//! - **Last-write-wins registration** with replacement logged, never rejected
//! - **Checked downcast at resolution** carrying both type names on mismatch
//! - **Metadata tracking** of registered type name and registration time
//!
//! ## Usage
//!
//! ```rust
//! use hydration::TypeRegistry;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct OrderProcessor {
//!     queue_depth: usize,
//! }
//!
//! let registry = TypeRegistry::new();
//! registry.register::<OrderProcessor>();
//!
//! assert!(registry.knows::<OrderProcessor>());
//! let processor = registry.resolve::<OrderProcessor>();
//! assert_eq!(processor, OrderProcessor::default());
//! ```

use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::registry::type_key::{derived_type_key, hydrate};

/// Zero-argument factory producing a boxed, type-erased instance per call
type Factory = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// A stored factory together with its registration metadata
struct FactoryEntry {
    type_name: &'static str,
    registered_at: DateTime<Utc>,
    factory: Factory,
}

/// Read-only snapshot of a registry entry's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub type_key: String,
    pub type_name: &'static str,
    pub registered_at: DateTime<Utc>,
}

/// Registry statistics
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub registered_types: usize,
    pub type_keys: Vec<String>,
}

/// Registry mapping string type keys to zero-argument factories
pub struct TypeRegistry {
    /// Registered factories keyed by type key
    entries: RwLock<HashMap<String, FactoryEntry>>,
}

impl TypeRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Register `T` under its derived type key.
    ///
    /// Equivalent to `register_with_key::<T>(derived_type_key::<T>())`. If a
    /// registration already exists under that key, it is replaced.
    pub fn register<T: Default + 'static>(&self) {
        self.register_with_key::<T>(derived_type_key::<T>());
    }

    /// Register `T` under the provided type key.
    ///
    /// The stored factory hydrates a fresh zero value of `T` on every
    /// resolution. If a registration already exists under the key, it is
    /// replaced. Registration always succeeds.
    pub fn register_with_key<T: Default + 'static>(&self, type_key: impl Into<String>) {
        let type_key = type_key.into();
        let entry = FactoryEntry {
            type_name: any::type_name::<T>(),
            registered_at: Utc::now(),
            factory: Arc::new(|| Box::new(hydrate::<T>()) as Box<dyn Any>),
        };

        let mut entries = self.entries.write();
        if let Some(previous) = entries.insert(type_key.clone(), entry) {
            warn!(
                type_key = %type_key,
                previous_type = previous.type_name,
                "Factory already registered, replacing"
            );
        } else {
            debug!(type_key = %type_key, "Registered type factory");
        }
    }

    /// Resolve a fresh instance of `T` using its derived type key.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered under the derived key. Resolving
    /// before registering is treated as a programming error, not a
    /// recoverable condition; use [`try_resolve`](Self::try_resolve) for a
    /// `Result` instead.
    pub fn resolve<T: Default + 'static>(&self) -> T {
        let type_key = derived_type_key::<T>();
        self.resolve_with_key::<T>(&type_key)
    }

    /// Resolve a fresh instance of `T` using the provided type key.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered under the key, or if the
    /// registered factory produces a type other than `T`. Use
    /// [`try_resolve_with_key`](Self::try_resolve_with_key) for a `Result`
    /// instead.
    pub fn resolve_with_key<T: 'static>(&self, type_key: &str) -> T {
        match self.try_resolve_with_key::<T>(type_key) {
            Ok(value) => value,
            Err(error) => panic!("failed to resolve type from registry: {error}"),
        }
    }

    /// Resolve a fresh instance of `T` using its derived type key, returning
    /// an error instead of panicking.
    pub fn try_resolve<T: Default + 'static>(&self) -> Result<T> {
        let type_key = derived_type_key::<T>();
        self.try_resolve_with_key::<T>(&type_key)
    }

    /// Resolve a fresh instance of `T` using the provided type key,
    /// returning an error instead of panicking.
    ///
    /// The factory runs after the read lock is released, so a factory may
    /// itself consult the registry.
    pub fn try_resolve_with_key<T: 'static>(&self, type_key: &str) -> Result<T> {
        let (factory, type_name) = {
            let entries = self.entries.read();
            let entry = entries
                .get(type_key)
                .ok_or_else(|| RegistryError::NotFound {
                    type_key: type_key.to_string(),
                })?;
            (Arc::clone(&entry.factory), entry.type_name)
        };

        match factory().downcast::<T>() {
            Ok(value) => {
                debug!(type_key = %type_key, "Resolved instance from registry");
                Ok(*value)
            }
            Err(_) => Err(RegistryError::TypeMismatch {
                type_key: type_key.to_string(),
                registered: type_name,
                requested: any::type_name::<T>(),
            }),
        }
    }

    /// Check whether a factory is registered under the derived type key of
    /// `T`. Never fails, never mutates.
    pub fn knows<T: Default>(&self) -> bool {
        self.knows_type_key(&derived_type_key::<T>())
    }

    /// Check whether a factory is registered under the provided type key.
    /// Never fails, never mutates.
    pub fn knows_type_key(&self, type_key: &str) -> bool {
        self.entries.read().contains_key(type_key)
    }

    /// Number of registered type keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry holds no registrations
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All registered type keys, sorted
    pub fn type_keys(&self) -> Vec<String> {
        let mut type_keys: Vec<String> = self.entries.read().keys().cloned().collect();
        type_keys.sort();
        type_keys
    }

    /// Metadata for the entry under the provided type key, if registered
    pub fn entry_metadata(&self, type_key: &str) -> Option<EntryMetadata> {
        self.entries.read().get(type_key).map(|entry| EntryMetadata {
            type_key: type_key.to_string(),
            type_name: entry.type_name,
            registered_at: entry.registered_at,
        })
    }

    /// Get registry statistics
    pub fn stats(&self) -> RegistryStats {
        let entries = self.entries.read();
        let mut type_keys: Vec<String> = entries.keys().cloned().collect();
        type_keys.sort();

        RegistryStats {
            registered_types: entries.len(),
            type_keys,
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("registered_types", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Widget {
        label: String,
        tags: Vec<String>,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Gadget {
        serial: u64,
    }

    #[test]
    fn test_register_and_resolve_roundtrip() {
        let registry = TypeRegistry::new();
        registry.register::<Widget>();

        assert!(registry.knows::<Widget>());
        let widget = registry.resolve::<Widget>();
        assert_eq!(widget, Widget::default());
        assert!(widget.label.is_empty());
    }

    #[test]
    fn test_explicit_key_roundtrip() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("app.widget");

        assert!(registry.knows_type_key("app.widget"));
        assert!(!registry.knows::<Widget>());
        assert_eq!(
            registry.resolve_with_key::<Widget>("app.widget"),
            Widget::default()
        );
    }

    #[test]
    fn test_resolve_produces_independent_instances() {
        let registry = TypeRegistry::new();
        registry.register::<Widget>();

        let mut first = registry.resolve::<Widget>();
        let second = registry.resolve::<Widget>();
        first.tags.push("mutated".to_string());

        assert!(second.tags.is_empty());
    }

    #[test]
    fn test_registering_same_key_replaces_factory() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("shared.key");
        registry.register_with_key::<Gadget>("shared.key");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve_with_key::<Gadget>("shared.key").serial, 0);
    }

    #[test]
    fn test_try_resolve_unknown_key_is_not_found() {
        let registry = TypeRegistry::new();

        let error = registry.try_resolve::<Widget>().unwrap_err();
        assert!(matches!(error, RegistryError::NotFound { .. }));
    }

    #[test]
    fn test_try_resolve_wrong_type_is_mismatch() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("shared.key");

        let error = registry
            .try_resolve_with_key::<Gadget>("shared.key")
            .unwrap_err();
        match error {
            RegistryError::TypeMismatch {
                type_key,
                registered,
                requested,
            } => {
                assert_eq!(type_key, "shared.key");
                assert!(registered.ends_with("Widget"));
                assert!(requested.ends_with("Gadget"));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "no factory registered for type key")]
    fn test_resolve_unknown_key_panics() {
        let registry = TypeRegistry::new();
        registry.resolve::<Widget>();
    }

    #[test]
    #[should_panic(expected = "type mismatch for type key")]
    fn test_resolve_wrong_type_panics() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("shared.key");
        registry.resolve_with_key::<Gadget>("shared.key");
    }

    #[test]
    fn test_knows_does_not_mutate() {
        let registry = TypeRegistry::new();

        assert!(!registry.knows::<Widget>());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_entry_metadata_tracks_registration() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("app.widget");

        let metadata = registry.entry_metadata("app.widget").unwrap();
        assert_eq!(metadata.type_key, "app.widget");
        assert!(metadata.type_name.ends_with("Widget"));
        assert!(registry.entry_metadata("app.gadget").is_none());
    }

    #[test]
    fn test_stats_reflect_registrations() {
        let registry = TypeRegistry::new();
        registry.register_with_key::<Widget>("b.widget");
        registry.register_with_key::<Gadget>("a.gadget");

        let stats = registry.stats();
        assert_eq!(stats.registered_types, 2);
        assert_eq!(stats.type_keys, vec!["a.gadget", "b.widget"]);

        assert_eq!(registry.type_keys(), stats.type_keys);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
