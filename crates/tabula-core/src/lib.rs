//! `tabula-core` — Foundation crate for the Tabula ecosystem.
//!
//! Provides the dynamically-typed [`Element`] that frame columns store,
//! the operators that combine two elements, and the error type they
//! report.
//!
//! # Design
//!
//! - An element is a closed enum; its [`Kind`] tag is derived from the
//!   active variant and cannot drift from it.
//! - Arithmetic and ordering widen both operands to `f64` through the
//!   [`Numeric`] trait and fail on non-numeric kinds.
//! - Equality is a separate entry point ([`equal`]) that never fails and
//!   tolerates float rounding.

pub mod dtype;
pub mod element;
pub mod error;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Integer, Numeric};
pub use element::{
    EQ_TOLERANCE, Element, Kind, Op, add, apply, apply_symbol, diff, equal, equal_within, ge, geq,
    le, leq, modulo, prod, quot,
};
pub use error::{CoreError, Result};

/// Items intended for glob-import: `use tabula_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Integer, Numeric};
    pub use crate::element::{Element, Kind, Op, apply, equal};
    pub use crate::error::{CoreError, Result};
}
