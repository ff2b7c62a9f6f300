//! Interned spellings.
//!
//! Cursor spellings are interned once while the unit is built and looked up
//! by 32-bit `Name` afterwards.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::BuildError;

/// Interned string identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// String interner owned by a translation unit.
///
/// Append-only; the unit is immutable once built, so lookups need no
/// locking.
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents, indexed by name.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert(Box::from(""), Name::EMPTY);
        Self {
            map,
            strings: vec![Box::from("")],
        }
    }

    /// Intern a string, returning its existing name if already present.
    pub fn intern(&mut self, s: &str) -> Result<Name, BuildError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let local = u32::try_from(self.strings.len())
            .map_err(|_| BuildError::TableOverflow { table: "spelling" })?;
        let name = Name(local);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        Ok(name)
    }

    /// Look up the string for a name.
    ///
    /// Names from another interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| &**s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
