//! Text forms for decoded Solidity values.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::hex;
use std::fmt;

/// Recursively formats a [`DynSolValue`].
fn fmt_value(value: &DynSolValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        DynSolValue::Address(inner) => write!(f, "{inner}"),
        DynSolValue::Function(inner) => write!(f, "{inner}"),
        DynSolValue::Bytes(inner) => f.write_str(&hex::encode_prefixed(inner)),
        DynSolValue::FixedBytes(word, size) => f.write_str(&hex::encode_prefixed(&word[..*size])),
        DynSolValue::Uint(inner, _) => write!(f, "{inner}"),
        DynSolValue::Int(inner, _) => write!(f, "{inner}"),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            f.write_str("[")?;
            fmt_list(values, f)?;
            f.write_str("]")
        }
        DynSolValue::Tuple(values) => fmt_tuple(values, f),
        DynSolValue::String(inner) => write!(f, "{inner:?}"), // escape strings
        DynSolValue::Bool(inner) => write!(f, "{inner}"),
        DynSolValue::CustomStruct { name, tuple, .. } => {
            f.write_str(name)?;
            fmt_tuple(tuple, f)
        }
    }
}

/// Formats a comma-separated list of values, no space after the comma.
fn fmt_list(values: &[DynSolValue], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        fmt_value(value, f)?;
    }
    Ok(())
}

/// Formats the given values as a tuple.
pub(crate) fn fmt_tuple(values: &[DynSolValue], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;
    fmt_list(values, f)?;
    f.write_str(")")
}

/// Wrapper that implements [`Display`](fmt::Display) for a [`DynSolValue`].
pub struct SolValueDisplay<'a>(&'a DynSolValue);

impl<'a> SolValueDisplay<'a> {
    /// Creates a new [`Display`](fmt::Display) wrapper for the given value.
    pub fn new(value: &'a DynSolValue) -> Self {
        Self(value)
    }
}

impl fmt::Display for SolValueDisplay<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(self.0, f)
    }
}

/// Pretty-prints the given value into the form used inside rendered calls.
pub fn format_value(value: &DynSolValue) -> String {
    SolValueDisplay::new(value).to_string()
}
