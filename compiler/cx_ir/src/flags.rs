//! Qualifier and metadata bits attached to type records.

use bitflags::bitflags;

bitflags! {
    /// Local qualifiers on a type as written.
    ///
    /// Part of a record's identity: `const int` and `int` are distinct
    /// records. Qualifiers hidden behind a typedef are not local to the
    /// typedef record; they surface on its canonical form.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

impl Qualifiers {
    /// Render the qualifiers in declaration order (`const volatile restrict`).
    pub fn spelling(self) -> String {
        let mut parts = Vec::with_capacity(3);
        if self.contains(Self::CONST) {
            parts.push("const");
        }
        if self.contains(Self::VOLATILE) {
            parts.push("volatile");
        }
        if self.contains(Self::RESTRICT) {
            parts.push("restrict");
        }
        parts.join(" ")
    }
}

bitflags! {
    /// Pre-computed type properties.
    ///
    /// Computed once when a record is interned, never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// Plain old data, as classified by the front end.
        const IS_POD = 1 << 0;
        /// The record is its own canonical form.
        const IS_CANONICAL = 1 << 1;
    }
}

impl TypeFlags {
    /// Check if the front end classified the type as POD.
    #[inline]
    pub const fn is_pod(self) -> bool {
        self.contains(Self::IS_POD)
    }

    /// Check if the record is canonical.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        self.contains(Self::IS_CANONICAL)
    }
}
