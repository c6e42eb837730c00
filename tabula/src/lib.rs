//! # Tabula
//!
//! Tabular data processing in pure Rust.
//!
//! One `use tabula::prelude::*;` gives you the dynamically-typed
//! [`Element`](core::Element) cell and its operators.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Elements, kinds, operators |
//! | `serde` | `Serialize` / `Deserialize` for elements, kinds and operators |
//!
//! Frame and column types will be gated behind their own feature flags as
//! development progresses.

#[cfg(feature = "core")]
pub use tabula_core as core;

/// Glob-import convenience: `use tabula::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use tabula_core::prelude::*;
}
