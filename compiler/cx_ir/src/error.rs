//! Errors raised while assembling a translation unit.

use thiserror::Error;

/// Builder misuse or capacity exhaustion.
///
/// A finished `TranslationUnit` never produces these; they only come from
/// `TranslationUnitBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A tag or typedef name was declared twice.
    #[error("`{name}` is already defined")]
    Redefinition { name: String },

    /// The code passed to `builtin` is not a builtin kind.
    #[error("kind code {code} is not a builtin type")]
    NotBuiltin { code: u32 },

    /// `define_record` was given a cursor that is not a struct or union.
    #[error("cursor {cursor} is not a record declaration")]
    NotRecord { cursor: u32 },

    /// A table exceeded `u32::MAX` entries.
    #[error("{table} table exceeded u32::MAX entries")]
    TableOverflow { table: &'static str },
}
