//! Handle registry.
//!
//! Binds raw handles from a [`TranslationUnit`] to the unit they came from.
//! The registry owns no compiler data; a wrapped handle is two words (the
//! raw index and a borrow of the unit) and forwards every query to the unit.
//!
//! Identity is bit identity of the raw index plus pointer identity of the
//! unit. Two handles from different units never compare equal, even when
//! their raw indices collide.

use std::hash::{Hash, Hasher};
use std::ptr;

use cx_ir::{RawCursor, RawType, TranslationUnit};

use crate::{Cursor, Type};

/// A raw handle bound to its translation unit.
pub trait Handle<'tu>: Copy {
    /// The raw index, as stored in the unit.
    fn raw_bits(&self) -> u32;

    /// The unit the handle belongs to.
    fn unit(&self) -> &'tu TranslationUnit;
}

/// Wrap a raw type handle.
#[inline]
pub fn wrap(raw: RawType, tu: &TranslationUnit) -> Type<'_> {
    Type::new(raw, tu)
}

/// Wrap a raw cursor handle.
#[inline]
pub fn wrap_cursor(raw: RawCursor, tu: &TranslationUnit) -> Cursor<'_> {
    Cursor::new(raw, tu)
}

/// Check if two handles name the same record of the same unit.
#[inline]
pub fn identity_equal<'tu, H: Handle<'tu>>(a: &H, b: &H) -> bool {
    a.raw_bits() == b.raw_bits() && ptr::eq(a.unit(), b.unit())
}

/// Hash a handle consistently with [`identity_equal`].
#[inline]
pub(crate) fn identity_hash<'tu, H: Handle<'tu>, S: Hasher>(handle: &H, state: &mut S) {
    handle.raw_bits().hash(state);
    ptr::hash(handle.unit(), state);
}
