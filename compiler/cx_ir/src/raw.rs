//! Raw record handles.
//!
//! `RawType` and `RawCursor` are 32-bit indices into a translation unit's
//! type and cursor tables. They carry no reference to the unit; pairing a
//! handle with its unit is the job of the introspection layer.
//!
//! # Design
//!
//! - Builtin types are pre-interned at indices equal to their kind code
//! - Type equality is O(1) index comparison (the type table is interned)
//! - Copy, lightweight passing

use std::fmt;

use crate::code;

/// A 32-bit index into a translation unit's type table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct RawType(u32);

impl RawType {
    // === Pre-interned Types ===
    // Indices match the kind code of the builtin.

    /// The invalid type (no type, or a failed lookup).
    pub const INVALID: Self = Self(code::INVALID);
    /// A type the front end does not expose.
    pub const UNEXPOSED: Self = Self(code::UNEXPOSED);
    /// `void`.
    pub const VOID: Self = Self(code::VOID);
    /// `bool` / `_Bool`.
    pub const BOOL: Self = Self(code::BOOL);
    /// Plain `char` on targets where it is signed.
    pub const CHAR_S: Self = Self(code::CHAR_S);
    /// `unsigned char`.
    pub const UCHAR: Self = Self(code::UCHAR);
    /// `short`.
    pub const SHORT: Self = Self(code::SHORT);
    /// `unsigned short`.
    pub const USHORT: Self = Self(code::USHORT);
    /// `int`.
    pub const INT: Self = Self(code::INT);
    /// `unsigned int`.
    pub const UINT: Self = Self(code::UINT);
    /// `long`.
    pub const LONG: Self = Self(code::LONG);
    /// `unsigned long`.
    pub const ULONG: Self = Self(code::ULONG);
    /// `long long`.
    pub const LONGLONG: Self = Self(code::LONGLONG);
    /// `unsigned long long`.
    pub const ULONGLONG: Self = Self(code::ULONGLONG);
    /// `float`.
    pub const FLOAT: Self = Self(code::FLOAT);
    /// `double`.
    pub const DOUBLE: Self = Self(code::DOUBLE);
    /// `long double`.
    pub const LONGDOUBLE: Self = Self(code::LONGDOUBLE);

    /// First index for types allocated while building a unit.
    pub const FIRST_DYNAMIC: u32 = 32;

    /// Create a handle from a raw u32 value.
    ///
    /// The handle is only meaningful for the unit it was taken from.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the pre-interned handle for a builtin kind code.
    #[inline]
    pub const fn builtin(code: u32) -> Option<Self> {
        if code::is_builtin(code) {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Check if this is one of the pre-interned slots.
    #[inline]
    pub const fn is_pre_interned(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the INVALID sentinel.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == code::INVALID
    }
}

impl fmt::Debug for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INVALID => write!(f, "RawType::INVALID"),
            _ => write!(f, "RawType({})", self.0),
        }
    }
}

/// A 32-bit index into a translation unit's cursor table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct RawCursor(u32);

impl RawCursor {
    /// The translation unit cursor. Always present.
    pub const ROOT: Self = Self(0);

    /// Create a handle from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RawCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ROOT => write!(f, "RawCursor::ROOT"),
            _ => write!(f, "RawCursor({})", self.0),
        }
    }
}

// Compile-time size assertions: handles must stay 4 bytes
const _: () = assert!(std::mem::size_of::<RawType>() == 4);
const _: () = assert!(std::mem::size_of::<RawCursor>() == 4);
