//! # Default Registry
//!
//! The process-wide default registry and its free-function call shapes.
//!
//! ## Overview
//!
//! One shared [`TypeRegistry`] is created empty on first access and lives for
//! the process lifetime; it is never re-initialized or destroyed. Every free
//! function here is a thin delegation to the matching method on that
//! instance, so the default shapes and the explicit-registry shapes are fully
//! interchangeable. Tests and libraries wanting isolation should construct
//! their own [`TypeRegistry`] instead of mutating the shared one.
//!
//! ## Usage
//!
//! ```rust
//! use hydration::{knows, register, resolve};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Widget {
//!     label: String,
//! }
//!
//! register::<Widget>();
//! assert!(knows::<Widget>());
//! assert_eq!(resolve::<Widget>(), Widget::default());
//! ```

use std::sync::OnceLock;

use crate::error::Result;
use crate::registry::type_registry::TypeRegistry;

static DEFAULT_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// The default registry used when a specific registry is not supplied.
///
/// Created empty on first access; lives for the process lifetime.
pub fn default_registry() -> &'static TypeRegistry {
    DEFAULT_REGISTRY.get_or_init(TypeRegistry::new)
}

/// Register `T` under its derived type key into the default registry.
/// An existing registration under that key is replaced.
pub fn register<T: Default + 'static>() {
    default_registry().register::<T>();
}

/// Register `T` under the provided type key into the default registry.
/// An existing registration under that key is replaced.
pub fn register_with_key<T: Default + 'static>(type_key: impl Into<String>) {
    default_registry().register_with_key::<T>(type_key);
}

/// Resolve a fresh instance of `T` from the default registry using its
/// derived type key.
///
/// # Panics
///
/// Panics if no factory is registered under the derived key.
pub fn resolve<T: Default + 'static>() -> T {
    default_registry().resolve::<T>()
}

/// Resolve a fresh instance of `T` from the default registry using the
/// provided type key.
///
/// # Panics
///
/// Panics if no factory is registered under the key, or if the registered
/// factory produces a type other than `T`.
pub fn resolve_with_key<T: 'static>(type_key: &str) -> T {
    default_registry().resolve_with_key::<T>(type_key)
}

/// Resolve `T` from the default registry using its derived type key,
/// returning an error instead of panicking.
pub fn try_resolve<T: Default + 'static>() -> Result<T> {
    default_registry().try_resolve::<T>()
}

/// Resolve `T` from the default registry using the provided type key,
/// returning an error instead of panicking.
pub fn try_resolve_with_key<T: 'static>(type_key: &str) -> Result<T> {
    default_registry().try_resolve_with_key::<T>(type_key)
}

/// Check whether the default registry has a registration for the derived
/// type key of `T`.
pub fn knows<T: Default>() -> bool {
    default_registry().knows::<T>()
}

/// Check whether the default registry has a registration for the provided
/// type key.
pub fn knows_type_key(type_key: &str) -> bool {
    default_registry().knows_type_key(type_key)
}
