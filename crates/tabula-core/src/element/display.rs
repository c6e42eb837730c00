//! `Display` formatting for [`Element`] and [`Kind`].

use core::fmt;

use super::{Element, Kind};

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Null => f.write_str("null"),
            Element::Bool(v) => write!(f, "{v}"),
            Element::I8(v) => write!(f, "{v}"),
            Element::I16(v) => write!(f, "{v}"),
            Element::I32(v) => write!(f, "{v}"),
            Element::I64(v) => write!(f, "{v}"),
            Element::U8(v) => write!(f, "{v}"),
            Element::U16(v) => write!(f, "{v}"),
            Element::U32(v) => write!(f, "{v}"),
            Element::U64(v) => write!(f, "{v}"),
            Element::F32(v) => write!(f, "{v}"),
            Element::F64(v) => write!(f, "{v}"),
            Element::Str(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
