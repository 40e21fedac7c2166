#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Hydration
//!
//! A process-wide type registry: a catalog mapping a string type key to a
//! zero-argument factory that produces a fresh zero-value instance of the
//! registered type on every resolution.
//!
//! ## Overview
//!
//! Callers register a type once, then later resolve the key back into a
//! freshly constructed value of that type, knowing nothing at the call site
//! beyond a type parameter. Keys are either supplied explicitly or derived
//! from the type itself, and every operation exists both on caller-owned
//! [`TypeRegistry`] instances and as free functions targeting the shared
//! [`default_registry`].
//!
//! ## Key Features
//!
//! - **Derived type keys**: [`derived_type_key`] formats the fully-qualified
//!   runtime type name of a hydrated zero value, so the common case needs no
//!   explicit key at all
//! - **Type-erased factories**: heterogeneous constructors live in one map;
//!   resolution re-asserts the concrete type through a checked downcast
//! - **Process-wide default registry**: free-function shapes delegate to one
//!   shared instance with process lifetime
//! - **Last-write-wins registration**: re-registering a key replaces the
//!   prior factory, logged rather than rejected
//!
//! ## Module Organization
//!
//! - [`registry`] - The registry core, key derivation, and the default
//!   registry
//! - [`error`] - Structured error handling for the recoverable resolution
//!   variants
//! - [`logging`] - Environment-aware tracing initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use hydration::TypeRegistry;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Widget {
//!     label: String,
//! }
//!
//! let registry = TypeRegistry::new();
//! registry.register::<Widget>();
//!
//! assert!(registry.knows::<Widget>());
//! assert_eq!(registry.resolve::<Widget>(), Widget::default());
//! ```
//!
//! ## Concurrency
//!
//! Each registry guards its mapping with a read-write lock: concurrent
//! resolution and existence checks take read locks, registration takes the
//! write lock. Factories are invoked outside the lock, so a factory may
//! itself consult a registry without deadlocking.

pub mod error;
pub mod logging;
pub mod registry;

pub use error::{RegistryError, Result};
pub use logging::init_logging;
pub use registry::global::{
    default_registry, knows, knows_type_key, register, register_with_key, resolve,
    resolve_with_key, try_resolve, try_resolve_with_key,
};
pub use registry::type_key::{derived_type_key, hydrate};
pub use registry::type_registry::{EntryMetadata, RegistryStats, TypeRegistry};
