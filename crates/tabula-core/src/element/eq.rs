//! Tolerance-aware equality.

use super::Element;

/// Absolute difference under which two float-involving elements are equal.
pub const EQ_TOLERANCE: f64 = 1e-10;

/// Compare two elements, returning a `Bool` element. Never fails.
///
/// - null equals only null
/// - structurally identical elements are equal
/// - if either side is `F32`/`F64`, both are widened and compared within
///   [`EQ_TOLERANCE`]; a side that cannot be widened makes them unequal
/// - anything else is unequal, including `I8(5)` against `I32(5)`
///
/// ```
/// # use tabula_core::{Element, equal};
/// assert_eq!(equal(&Element::from(1_i32), &Element::from(1.0)), Element::Bool(true));
/// assert_eq!(equal(&Element::from("a"), &Element::from(1.0)), Element::Bool(false));
/// ```
pub fn equal(left: &Element, right: &Element) -> Element {
    equal_within(left, right, EQ_TOLERANCE)
}

/// [`equal`] with a caller-chosen tolerance.
pub fn equal_within(left: &Element, right: &Element, tolerance: f64) -> Element {
    Element::Bool(is_equal(left, right, tolerance))
}

fn is_equal(left: &Element, right: &Element, tolerance: f64) -> bool {
    if left.is_null() != right.is_null() {
        return false;
    }
    if left == right {
        return true;
    }
    if !(left.kind().is_float() || right.kind().is_float()) {
        return false;
    }
    match (left.to_f64(), right.to_f64()) {
        // NaN is never within tolerance of anything.
        (Ok(a), Ok(b)) => (a - b).abs() <= tolerance,
        _ => false,
    }
}
