//! Error types for registry resolution.
//!
//! Only resolution can fail, and only through the `try_` variants;
//! construction, registration, and existence checks are total.

use thiserror::Error;

/// Registry error types
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No factory registered under the type key
    #[error("no factory registered for type key: {type_key}")]
    NotFound { type_key: String },

    /// The registered factory produces a different type than requested
    #[error("type mismatch for type key {type_key}: registered {registered}, requested {requested}")]
    TypeMismatch {
        type_key: String,
        registered: &'static str,
        requested: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
