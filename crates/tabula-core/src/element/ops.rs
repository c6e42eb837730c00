//! Binary operators over [`Element`]s.
//!
//! Every operator except `==` coerces both operands to `f64` first and
//! fails if either is not numeric. Results are `F64` for arithmetic and
//! `Bool` for comparisons. Division and modulo by zero follow IEEE 754
//! (infinities and NaN), they are not errors.

use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, Result};

use super::Element;
use super::eq::equal;

/// An operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, floating modulo with the sign of the dividend.
    Rem,
    /// `==`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Op {
    /// Every operator, in symbol-table order.
    pub const ALL: [Op; 10] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Rem,
        Op::Eq,
        Op::Lt,
        Op::Le,
        Op::Gt,
        Op::Ge,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::Eq => "==",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }

    #[inline]
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Rem)
    }

    /// Whether the result is a `Bool` element (includes `==`).
    #[inline]
    pub fn is_comparison(self) -> bool {
        !self.is_arithmetic()
    }

    /// Evaluate on two already-coerced operands.
    fn eval(self, a: f64, b: f64) -> Element {
        match self {
            Op::Add => Element::F64(a + b),
            Op::Sub => Element::F64(a - b),
            Op::Mul => Element::F64(a * b),
            Op::Div => Element::F64(a / b),
            Op::Rem => Element::F64(a % b),
            Op::Eq => equal(&Element::F64(a), &Element::F64(b)),
            Op::Lt => Element::Bool(a < b),
            Op::Le => Element::Bool(a <= b),
            Op::Gt => Element::Bool(a > b),
            Op::Ge => Element::Bool(a >= b),
        }
    }
}

impl FromStr for Op {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Op::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CoreError::UnknownOperator {
                symbol: s.to_owned(),
            })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ======================================================================
// Dispatcher
// ======================================================================

/// Apply `op` to two elements.
///
/// The left operand is coerced first, so when both are non-numeric the
/// error names the left kind. `Op::Eq` ignores coercion failures and
/// defers to [`equal`].
pub fn apply(mut left: Element, mut right: Element, op: Op) -> Result<Element> {
    log::trace!("apply: {} {op} {}", left.kind(), right.kind());

    if op == Op::Eq {
        // Strings and bools are comparable without being numeric.
        let _ = left.coerce_to_float();
        let _ = right.coerce_to_float();
        return Ok(equal(&left, &right));
    }

    let a = left.to_f64().inspect_err(|err| {
        log::trace!("left operand of {op} rejected: {err}");
    })?;
    let b = right.to_f64().inspect_err(|err| {
        log::trace!("right operand of {op} rejected: {err}");
    })?;
    Ok(op.eval(a, b))
}

/// Parse `symbol` and [`apply`] it.
///
/// ```
/// # use tabula_core::{Element, apply_symbol};
/// let r = apply_symbol(Element::from(5.5), Element::from(2.0), "%").unwrap();
/// assert_eq!(r, Element::F64(1.5));
/// ```
pub fn apply_symbol(left: Element, right: Element, symbol: &str) -> Result<Element> {
    apply(left, right, symbol.parse()?)
}

// ======================================================================
// Named entry points
// ======================================================================

macro_rules! impl_op_alias {
    ($name:ident, $op:ident, $sym:literal) => {
        #[doc = concat!("`left ", $sym, " right`, see [`apply`].")]
        #[inline]
        pub fn $name(left: Element, right: Element) -> Result<Element> {
            apply(left, right, Op::$op)
        }
    };
}

impl_op_alias!(add, Add, "+");
impl_op_alias!(diff, Sub, "-");
impl_op_alias!(prod, Mul, "*");
impl_op_alias!(quot, Div, "/");
impl_op_alias!(modulo, Rem, "%");
impl_op_alias!(le, Lt, "<");
impl_op_alias!(leq, Le, "<=");
impl_op_alias!(ge, Gt, ">");
impl_op_alias!(geq, Ge, ">=");
