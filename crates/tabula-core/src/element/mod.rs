//! Dynamically-typed scalar cells.
//!
//! An [`Element`] holds one table cell: null, a boolean, an integer of any
//! width, a float, or a string. Operators normalize numeric elements to
//! `f64` before computing, so a `u8` column can be added to an `f64`
//! column without the caller matching on types.
//!
//! ```
//! # use tabula_core::{Element, add, equal};
//! let sum = add(Element::from(2_i32), Element::from(3_u8)).unwrap();
//! assert_eq!(sum, Element::F64(5.0));
//! assert_eq!(equal(&Element::from(1_i64), &Element::from(1.0)), Element::Bool(true));
//! ```

mod coerce;
mod convert;
mod display;
mod eq;
mod ops;

pub use eq::{EQ_TOLERANCE, equal, equal_within};
pub use ops::{Op, add, apply, apply_symbol, diff, ge, geq, le, leq, modulo, prod, quot};

/// One scalar cell value.
///
/// The kind tag is derived from the active variant, see [`Element::kind`].
/// The derived `PartialEq` is structural: same variant and same payload.
/// Tolerance-aware comparison is [`equal`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Missing value.
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
}

/// Runtime tag naming the active variant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// The no-kind marker of the null element.
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Str,
}

impl Kind {
    /// Whether elements of this kind coerce to `f64`.
    #[inline]
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// `F32` or `F64`.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
                | Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
        )
    }

    /// Lower-case type name, matching the Rust primitive where one exists.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "str",
        }
    }
}

impl Element {
    /// Build an element from any supported native value.
    ///
    /// `None` produces the null element.
    #[inline]
    pub fn new<T: Into<Element>>(value: T) -> Self {
        value.into()
    }

    /// The null element.
    #[inline]
    pub fn null() -> Self {
        Element::Null
    }

    /// The kind tag of the active variant.
    pub fn kind(&self) -> Kind {
        match self {
            Element::Null => Kind::Null,
            Element::Bool(_) => Kind::Bool,
            Element::I8(_) => Kind::I8,
            Element::I16(_) => Kind::I16,
            Element::I32(_) => Kind::I32,
            Element::I64(_) => Kind::I64,
            Element::U8(_) => Kind::U8,
            Element::U16(_) => Kind::U16,
            Element::U32(_) => Kind::U32,
            Element::U64(_) => Kind::U64,
            Element::F32(_) => Kind::F32,
            Element::F64(_) => Kind::F64,
            Element::Str(_) => Kind::Str,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }
}
