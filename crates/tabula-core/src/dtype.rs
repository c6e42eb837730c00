//! Native numeric types that an [`Element`] can hold.
//!
//! The trait hierarchy is:
//! ```text
//! Numeric
//!   ├── Integer  (i8..i64, u8..u64)
//!   └── Float    (f32, f64)
//! ```
//!
//! Every `Numeric` type widens to `f64`, which is the canonical
//! representation operators work on.

use core::fmt;

use crate::element::{Element, Kind};

// ---------------------------------------------------------------------------
// Numeric — the root trait for every coercible native type
// ---------------------------------------------------------------------------

/// A native numeric type that can be stored in an [`Element`] and coerced
/// to `f64`.
pub trait Numeric:
    Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Send + Sync + Into<Element> + 'static
{
    /// The kind tag of an element holding this type.
    const KIND: Kind;

    /// Widen to `f64`.
    ///
    /// Exact for every type of 32 bits or fewer and for `f32`. 64-bit
    /// integers beyond 2^53 round to the nearest representable `f64`.
    fn widen(self) -> f64;
}

// ---------------------------------------------------------------------------
// Integer
// ---------------------------------------------------------------------------

/// Marker trait for integer element types.
pub trait Integer: Numeric {
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Width in bits.
    const BITS: u32;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Marker trait for floating-point element types (`f32`, `f64`).
pub trait Float: Numeric {}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_numeric_int {
    ($ty:ty, $kind:ident, $signed:expr) => {
        impl Numeric for $ty {
            const KIND: Kind = Kind::$kind;

            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn widen(self) -> f64 {
                self as f64
            }
        }

        impl Integer for $ty {
            const SIGNED: bool = $signed;
            const BITS: u32 = <$ty>::BITS;
        }
    };
}

impl_numeric_int!(i8, I8, true);
impl_numeric_int!(i16, I16, true);
impl_numeric_int!(i32, I32, true);
impl_numeric_int!(i64, I64, true);
impl_numeric_int!(u8, U8, false);
impl_numeric_int!(u16, U16, false);
impl_numeric_int!(u32, U32, false);
impl_numeric_int!(u64, U64, false);

impl Numeric for f32 {
    const KIND: Kind = Kind::F32;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f32 {}

impl Numeric for f64 {
    const KIND: Kind = Kind::F64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

impl Float for f64 {}
