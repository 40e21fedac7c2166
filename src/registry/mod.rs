//! # Registry Infrastructure
//!
//! The type registry core, derived type keys, and the process-wide default
//! registry.
//!
//! ## Overview
//!
//! A [`TypeRegistry`] maps string type keys to zero-argument factories. Each
//! of the three operations (register, resolve, knows) exists in four call
//! shapes, one per combination of explicit/derived key and explicit/default
//! registry:
//!
//! ```text
//!                      derived key              explicit key
//! explicit registry    registry.register()      registry.register_with_key()
//! default registry     hydration::register()    hydration::register_with_key()
//! ```
//!
//! The explicit-key methods on [`TypeRegistry`] are the primitives; every
//! other shape is pure composition over them, substituting the derived key
//! and/or the default registry.
//!
//! ## Usage
//!
//! ```rust
//! use hydration::registry::type_registry::TypeRegistry;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Widget {
//!     id: u64,
//! }
//!
//! let registry = TypeRegistry::new();
//! registry.register_with_key::<Widget>("app.widget");
//!
//! assert!(registry.knows_type_key("app.widget"));
//! let widget: Widget = registry.resolve_with_key("app.widget");
//! assert_eq!(widget, Widget::default());
//! ```

pub mod global;
pub mod type_key;
pub mod type_registry;

// Re-export main types for easy access
pub use global::{
    default_registry, knows, knows_type_key, register, register_with_key, resolve,
    resolve_with_key, try_resolve, try_resolve_with_key,
};
pub use type_key::{derived_type_key, hydrate};
pub use type_registry::{EntryMetadata, RegistryStats, TypeRegistry};
