//! Conversions between native values and [`Element`].

use crate::error::CoreError;

use super::Element;

macro_rules! impl_native {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Element {
            #[inline]
            fn from(v: $ty) -> Self {
                Element::$variant(v)
            }
        }

        impl TryFrom<&Element> for $ty {
            type Error = CoreError;

            fn try_from(e: &Element) -> Result<Self, CoreError> {
                match *e {
                    Element::$variant(v) => Ok(v),
                    _ => Err(CoreError::NotRepresentable {
                        from: e.kind(),
                        to: stringify!($ty),
                    }),
                }
            }
        }
    };
}

impl_native!(bool, Bool);
impl_native!(i8, I8);
impl_native!(i16, I16);
impl_native!(i32, I32);
impl_native!(i64, I64);
impl_native!(u8, U8);
impl_native!(u16, U16);
impl_native!(u32, U32);
impl_native!(u64, U64);
impl_native!(f32, F32);
impl_native!(f64, F64);

impl From<String> for Element {
    #[inline]
    fn from(v: String) -> Self {
        Element::Str(v)
    }
}

impl From<&str> for Element {
    #[inline]
    fn from(v: &str) -> Self {
        Element::Str(v.to_owned())
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(v: Option<T>) -> Self {
        v.map_or(Element::Null, Into::into)
    }
}

impl TryFrom<&Element> for String {
    type Error = CoreError;

    fn try_from(e: &Element) -> Result<Self, CoreError> {
        match e {
            Element::Str(s) => Ok(s.clone()),
            _ => Err(CoreError::NotRepresentable {
                from: e.kind(),
                to: "String",
            }),
        }
    }
}

impl Element {
    /// Borrow the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }
}
