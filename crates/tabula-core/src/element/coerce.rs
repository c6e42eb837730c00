//! Normalization of numeric elements to `f64`.

use crate::Numeric;
use crate::error::{CoreError, Result};

use super::Element;

impl Element {
    /// The value widened to `f64`, without touching `self`.
    ///
    /// Fails with [`CoreError::Arithmetic`] for `Bool`, `Str` and `Null`.
    pub fn to_f64(&self) -> Result<f64> {
        match *self {
            Element::I8(v) => Ok(v.widen()),
            Element::I16(v) => Ok(v.widen()),
            Element::I32(v) => Ok(v.widen()),
            Element::I64(v) => Ok(v.widen()),
            Element::U8(v) => Ok(v.widen()),
            Element::U16(v) => Ok(v.widen()),
            Element::U32(v) => Ok(v.widen()),
            Element::U64(v) => Ok(v.widen()),
            Element::F32(v) => Ok(v.widen()),
            Element::F64(v) => Ok(v),
            Element::Null | Element::Bool(_) | Element::Str(_) => {
                Err(CoreError::Arithmetic { kind: self.kind() })
            }
        }
    }

    /// Replace the value with its `f64` widening.
    ///
    /// On error the element is left exactly as it was.
    ///
    /// ```
    /// # use tabula_core::{Element, Kind};
    /// let mut e = Element::from(7_u32);
    /// e.coerce_to_float().unwrap();
    /// assert_eq!(e.kind(), Kind::F64);
    ///
    /// let mut s = Element::from("7");
    /// assert!(s.coerce_to_float().is_err());
    /// assert_eq!(s, Element::from("7"));
    /// ```
    pub fn coerce_to_float(&mut self) -> Result<()> {
        let v = self.to_f64()?;
        *self = Element::F64(v);
        Ok(())
    }

    /// Consuming form of [`coerce_to_float`](Self::coerce_to_float).
    pub fn into_float(mut self) -> Result<Element> {
        self.coerce_to_float()?;
        Ok(self)
    }
}
