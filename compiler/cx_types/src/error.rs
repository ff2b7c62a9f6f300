//! Errors raised by type queries.

use thiserror::Error;

use crate::TypeKind;

/// Misuse of a type query.
///
/// Every variant describes a caller mistake; none is transient, so nothing
/// in this crate retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The operation is not defined for this kind of type.
    #[error("`{operation}` is not valid for a type of kind {kind}")]
    InvalidUse {
        operation: &'static str,
        kind: TypeKind,
    },

    /// An argument index fell outside `[0, len)`.
    #[error("argument index {index} out of range for {len} argument(s)")]
    OutOfBounds { index: i64, len: usize },

    /// An argument list was indexed with something other than an integer.
    #[error("argument index must be an integer, found {found}")]
    InvalidKey { found: String },
}

impl TypeError {
    /// Check if this is a contract violation.
    pub fn is_invalid_use(&self) -> bool {
        matches!(self, Self::InvalidUse { .. })
    }

    /// Check if this is a bounds violation.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if this is a key-type violation.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

/// Result of a type query.
pub type TypeResult<T> = Result<T, TypeError>;
