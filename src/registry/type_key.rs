//! Derived type keys and zero-value hydration.

use std::any;

/// Create a new zero-value instance of `T`.
///
/// Registered factories call this on every invocation, so each resolution
/// yields an independent instance.
pub fn hydrate<T: Default>() -> T {
    T::default()
}

/// Derive the type key for `T`: the fully-qualified runtime type name of a
/// freshly hydrated zero value.
///
/// For example, a type `Widget` in module `app` of crate `store` derives the
/// key `"store::app::Widget"`. Deriving the key for the same type always
/// yields the identical string. Because a zero value must be constructed,
/// derivation requires `T: Default`; types without a default must be
/// registered under an explicit key instead.
pub fn derived_type_key<T: Default>() -> String {
    let value = hydrate::<T>();
    any::type_name_of_val(&value).to_string()
}
