//! Compact type record storage.
//!
//! Each type in the table is stored as an `Item`: a kind code, local
//! qualifiers, and a data field whose meaning depends on the code.

use crate::{code, Qualifiers, RawCursor, RawType};

/// A single type record.
///
/// - `code`: kind code (see [`crate::code`])
/// - `quals`: local qualifiers
/// - `data`: child handle, declaring cursor, or extra index
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Kind code.
    pub code: u32,
    /// Local qualifiers.
    pub quals: Qualifiers,
    /// Code-dependent data field.
    pub data: u32,
}

impl Item {
    /// The record returned for handles that are not in the table.
    pub const INVALID: Self = Self::builtin(code::INVALID);

    /// Create a new item.
    #[inline]
    pub const fn new(code: u32, quals: Qualifiers, data: u32) -> Self {
        Self { code, quals, data }
    }

    /// Create an unqualified builtin item.
    #[inline]
    pub const fn builtin(code: u32) -> Self {
        Self {
            code,
            quals: Qualifiers::empty(),
            data: 0,
        }
    }

    /// Get the child type.
    ///
    /// Only meaningful when [`code::has_child`] holds for the code.
    #[inline]
    pub const fn child(self) -> RawType {
        RawType::from_raw(self.data)
    }

    /// Get the declaring cursor.
    ///
    /// Only meaningful when [`code::has_declaration`] holds for the code.
    #[inline]
    pub const fn declaration(self) -> RawCursor {
        RawCursor::from_raw(self.data)
    }

    /// Get the extra array index.
    ///
    /// Only meaningful when [`code::uses_extra`] holds for the code.
    #[inline]
    pub const fn extra_idx(self) -> usize {
        self.data as usize
    }
}
