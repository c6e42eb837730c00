//! Property-based tests for coercion, dispatch and equality.

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use proptest::prelude::*;

    use crate::{CoreError, Element, Kind, Numeric, Op, add, apply, equal, modulo};

    // Finite floats keep the arithmetic comparisons exact.
    fn finite() -> impl Strategy<Value = f64> {
        -1.0e12f64..1.0e12f64
    }

    fn non_numeric() -> impl Strategy<Value = Element> {
        prop_oneof![
            Just(Element::Null),
            any::<bool>().prop_map(Element::Bool),
            ".{0,8}".prop_map(Element::Str),
        ]
    }

    fn assert_widens<T: Numeric>(v: T) -> Result<(), TestCaseError> {
        let mut e: Element = v.into();
        prop_assert_eq!(e.kind(), T::KIND);
        e.coerce_to_float().unwrap();
        prop_assert_eq!(e, Element::F64(v.widen()));
        Ok(())
    }

    proptest! {
        // Widening is exact for every numeric kind

        #[test]
        fn coerce_i8(v in any::<i8>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::I8(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_i16(v in any::<i16>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::I16(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_i32(v in any::<i32>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::I32(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_u8(v in any::<u8>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::U8(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_u16(v in any::<u16>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::U16(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_u32(v in any::<u32>()) {
            assert_widens(v)?;
            prop_assert_eq!(Element::U32(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_small_64_bit(v in -(1i64 << 53)..(1i64 << 53)) {
            assert_widens(v)?;
            // Below 2^53 the round trip is lossless.
            #[allow(clippy::cast_possible_truncation)]
            let back = Element::I64(v).to_f64().unwrap() as i64;
            prop_assert_eq!(back, v);
            assert_widens(v.unsigned_abs())?;
        }

        #[test]
        fn coerce_f32(v in any::<f32>().prop_filter("not NaN", |v| !v.is_nan())) {
            assert_widens(v)?;
            prop_assert_eq!(Element::F32(v).to_f64().unwrap(), f64::from(v));
        }

        #[test]
        fn coerce_non_numeric_is_untouched(e in non_numeric()) {
            let mut c = e.clone();
            let err = c.coerce_to_float().unwrap_err();
            prop_assert_eq!(err, CoreError::Arithmetic { kind: e.kind() });
            prop_assert_eq!(c, e);
        }

        // Dispatch matches native f64 arithmetic

        #[test]
        fn add_matches_f64(a in finite(), b in finite()) {
            prop_assert_eq!(add(Element::F64(a), Element::F64(b)).unwrap(), Element::F64(a + b));
        }

        #[test]
        fn modulo_sign_follows_dividend(a in finite(), b in finite().prop_filter("non-zero", |b| *b != 0.0)) {
            let Element::F64(r) = modulo(Element::F64(a), Element::F64(b)).unwrap() else {
                return Err(TestCaseError::fail("expected F64"));
            };
            prop_assert!(r == 0.0 || r.signum() == a.signum());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn comparisons_are_bool(a in finite(), b in finite()) {
            for op in [Op::Lt, Op::Le, Op::Gt, Op::Ge] {
                let r = apply(Element::F64(a), Element::F64(b), op).unwrap();
                prop_assert_eq!(r.kind(), Kind::Bool);
            }
        }

        #[test]
        fn non_numeric_never_dispatches(e in non_numeric(), b in finite()) {
            for op in Op::ALL.into_iter().filter(|op| *op != Op::Eq) {
                prop_assert!(apply(e.clone(), Element::F64(b), op).is_err());
                prop_assert!(apply(Element::F64(b), e.clone(), op).is_err());
            }
        }

        // Equality

        #[test]
        fn equal_is_reflexive_for_finite(a in finite()) {
            prop_assert_eq!(equal(&Element::F64(a), &Element::F64(a)), Element::Bool(true));
        }

        #[test]
        fn equal_is_symmetric(a in any::<i32>(), b in finite()) {
            let x = Element::I32(a);
            let y = Element::F64(b);
            prop_assert_eq!(equal(&x, &y), equal(&y, &x));
        }

        #[test]
        fn null_equals_only_null(e in non_numeric()) {
            let expected = Element::Bool(e.is_null());
            prop_assert_eq!(equal(&Element::Null, &e), expected.clone());
            prop_assert_eq!(equal(&e, &Element::Null), expected);
        }
    }
}
