use thiserror::Error;

use crate::element::Kind;

/// All errors returned by `tabula-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An arithmetic or ordering operator met an operand that cannot be
    /// coerced to `f64` (a boolean, a string or the null element).
    #[error("ArithmeticError: can only operate on numeric types (got {kind})")]
    Arithmetic { kind: Kind },

    /// The symbol is not one of `+ - * / % == < <= > >=`.
    #[error("unknown operator {symbol:?}")]
    UnknownOperator { symbol: String },

    /// A native value was requested from an element of another kind.
    #[error("cannot represent {from} element as {to}")]
    NotRepresentable { from: Kind, to: &'static str },
}

/// Convenience alias used throughout `tabula-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
