//! The translation unit: owner of every type and cursor record.

use crate::{CursorKind, CursorRecord, Name, RawCursor, RawType, StringInterner, TypeTable};

/// Compiled representation of one source input.
///
/// Immutable once built; every raw handle taken from it stays valid for as
/// long as the unit is alive.
pub struct TranslationUnit {
    pub(crate) spelling: Name,
    pub(crate) types: TypeTable,
    pub(crate) cursors: Vec<CursorRecord>,
    pub(crate) names: StringInterner,
}

impl TranslationUnit {
    /// Source name the unit was built from.
    pub fn spelling(&self) -> &str {
        self.names.lookup(self.spelling)
    }

    /// The type table.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// The translation unit cursor.
    pub fn root(&self) -> RawCursor {
        RawCursor::ROOT
    }

    /// Number of cursors, including the root.
    pub fn cursor_count(&self) -> usize {
        self.cursors.len()
    }

    /// Get a cursor record, or `None` for a handle from another unit.
    pub fn cursor(&self, raw: RawCursor) -> Option<&CursorRecord> {
        self.cursors.get(raw.index())
    }

    /// Get a cursor's kind.
    pub fn cursor_kind(&self, raw: RawCursor) -> Option<CursorKind> {
        self.cursor(raw).map(|c| c.kind)
    }

    /// Get a cursor's spelling (empty for unknown handles).
    pub fn cursor_spelling(&self, raw: RawCursor) -> &str {
        self.cursor(raw).map_or("", |c| self.names.lookup(c.spelling))
    }

    /// Get a cursor's declared type.
    pub fn cursor_type(&self, raw: RawCursor) -> RawType {
        self.cursor(raw).map_or(RawType::INVALID, |c| c.ty)
    }

    /// Get a cursor's children in declaration order.
    pub fn children(&self, raw: RawCursor) -> &[RawCursor] {
        self.cursor(raw).map_or(&[], |c| c.children.as_slice())
    }

    /// Find a direct child of `parent` by spelling.
    pub fn find_child(&self, parent: RawCursor, spelling: &str) -> Option<RawCursor> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.cursor_spelling(child) == spelling)
    }
}
