//! Cursor handles and the cursor-to-type bridge.

use std::fmt;
use std::hash::{Hash, Hasher};

use cx_ir::{CursorKind, RawCursor, TranslationUnit};

use crate::handle::{identity_equal, identity_hash, wrap, wrap_cursor, Handle};
use crate::{Type, TypeResult};

/// One AST node of a translation unit.
#[derive(Copy, Clone)]
pub struct Cursor<'tu> {
    raw: RawCursor,
    tu: &'tu TranslationUnit,
}

impl<'tu> Cursor<'tu> {
    #[inline]
    pub(crate) fn new(raw: RawCursor, tu: &'tu TranslationUnit) -> Self {
        Self { raw, tu }
    }

    /// The translation unit cursor.
    pub fn root(tu: &'tu TranslationUnit) -> Self {
        wrap_cursor(tu.root(), tu)
    }

    /// The raw handle.
    #[inline]
    pub fn raw(self) -> RawCursor {
        self.raw
    }

    /// The owning translation unit.
    #[inline]
    pub fn translation_unit(self) -> &'tu TranslationUnit {
        self.tu
    }

    /// Node kind, or `None` for a handle the unit does not know.
    pub fn kind(self) -> Option<CursorKind> {
        self.tu.cursor_kind(self.raw)
    }

    /// Declared name (empty for unnamed nodes).
    pub fn spelling(self) -> &'tu str {
        self.tu.cursor_spelling(self.raw)
    }

    /// Declared type of the node.
    pub fn ty(self) -> Type<'tu> {
        type_of(self)
    }

    /// Children in declaration order.
    pub fn children(self) -> impl ExactSizeIterator<Item = Cursor<'tu>> + 'tu {
        let tu = self.tu;
        tu.children(self.raw)
            .iter()
            .map(move |&child| wrap_cursor(child, tu))
    }

    /// First direct child spelled `spelling`.
    pub fn child(self, spelling: &str) -> Option<Cursor<'tu>> {
        self.tu
            .find_child(self.raw, spelling)
            .map(|child| wrap_cursor(child, self.tu))
    }

    /// Enclosing node; `None` for the root.
    pub fn parent(self) -> Option<Cursor<'tu>> {
        self.tu
            .cursor(self.raw)
            .and_then(|record| record.parent)
            .map(|parent| wrap_cursor(parent, self.tu))
    }

    /// Result type of a function declaration.
    pub fn result_type(self) -> TypeResult<Type<'tu>> {
        self.ty().get_result()
    }

    /// Aliased type of a typedef declaration.
    pub fn underlying_typedef_type(self) -> Option<Type<'tu>> {
        self.tu
            .cursor(self.raw)
            .and_then(|record| record.underlying)
            .map(|raw| wrap(raw, self.tu))
    }
}

/// Get the declared type of a node.
///
/// Nodes without a type (the translation unit, namespaces) report a type of
/// kind `Invalid`.
#[tracing::instrument(level = "trace", skip_all, fields(cursor = cursor.raw.raw()))]
pub fn type_of(cursor: Cursor<'_>) -> Type<'_> {
    wrap(cursor.tu.cursor_type(cursor.raw), cursor.tu)
}

/// Get the declaring node of a record, enum or typedef type.
#[tracing::instrument(level = "trace", skip_all, fields(ty = ty.raw().raw()))]
pub fn declaration_of(ty: Type<'_>) -> Option<Cursor<'_>> {
    ty.get_declaration()
}

impl<'tu> Handle<'tu> for Cursor<'tu> {
    #[inline]
    fn raw_bits(&self) -> u32 {
        self.raw.raw()
    }

    #[inline]
    fn unit(&self) -> &'tu TranslationUnit {
        self.tu
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        identity_equal(self, other)
    }
}

impl Eq for Cursor<'_> {}

impl Hash for Cursor<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        identity_hash(self, state);
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.kind())
            .field("raw", &self.raw)
            .field("spelling", &self.spelling())
            .finish()
    }
}

#[cfg(test)]
mod tests;
