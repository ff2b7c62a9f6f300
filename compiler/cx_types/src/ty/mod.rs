//! The queryable type value.
//!
//! A [`Type`] is a raw type handle bound to its translation unit. It is
//! `Copy`, holds no data of its own, and answers every query by reading the
//! unit's type table. Decomposition accessors check the kind first and fail
//! with [`TypeError::InvalidUse`] on a mismatch; they never coerce.

mod format;

use std::fmt;
use std::hash::{Hash, Hasher};

use cx_ir::{Qualifiers, RawType, TranslationUnit};

use crate::handle::{identity_equal, identity_hash, wrap, wrap_cursor, Handle};
use crate::{ArgumentsList, Cursor, TypeError, TypeKind, TypeResult};

/// One type record of a translation unit.
///
/// Equality and hashing are by identity: two `Type`s are equal iff they
/// name the same record of the same unit, however they were reached.
#[derive(Copy, Clone)]
pub struct Type<'tu> {
    raw: RawType,
    tu: &'tu TranslationUnit,
}

impl<'tu> Type<'tu> {
    #[inline]
    pub(crate) fn new(raw: RawType, tu: &'tu TranslationUnit) -> Self {
        Self { raw, tu }
    }

    /// The raw handle.
    #[inline]
    pub fn raw(self) -> RawType {
        self.raw
    }

    /// The owning translation unit.
    #[inline]
    pub fn translation_unit(self) -> &'tu TranslationUnit {
        self.tu
    }

    /// Kind of this exact record. Typedef sugar is not looked through.
    pub fn kind(self) -> TypeKind {
        TypeKind::from_code(self.tu.types().code(self.raw))
    }

    /// The type with all typedef sugar stripped.
    ///
    /// Local qualifiers are kept, so `const I` (with `typedef int I`)
    /// canonicalizes to `const int`. Idempotent.
    pub fn get_canonical(self) -> Type<'tu> {
        wrap(self.tu.types().canonical(self.raw), self.tu)
    }

    /// Local qualifiers of the type as written.
    pub fn qualifiers(self) -> Qualifiers {
        self.tu.types().qualifiers(self.raw)
    }

    pub fn is_const_qualified(self) -> bool {
        self.qualifiers().contains(Qualifiers::CONST)
    }

    pub fn is_volatile_qualified(self) -> bool {
        self.qualifiers().contains(Qualifiers::VOLATILE)
    }

    pub fn is_restrict_qualified(self) -> bool {
        self.qualifiers().contains(Qualifiers::RESTRICT)
    }

    /// The pointee of a pointer, block pointer, reference, Objective-C
    /// object pointer or member pointer.
    pub fn get_pointee(self) -> TypeResult<Type<'tu>> {
        const OP: &str = "get_pointee";
        self.require(OP, self.kind().is_pointer_like())?;
        self.wrap_child(OP, self.tu.types().child(self.raw))
    }

    /// The element type of an array.
    pub fn get_array_element_type(self) -> TypeResult<Type<'tu>> {
        const OP: &str = "get_array_element_type";
        self.require(OP, self.kind().is_array())?;
        self.wrap_child(OP, self.tu.types().element(self.raw))
    }

    /// The declared size of a constant array.
    pub fn get_array_size(self) -> TypeResult<u64> {
        const OP: &str = "get_array_size";
        self.require(OP, self.kind() == TypeKind::ConstantArray)?;
        self.tu
            .types()
            .element_count(self.raw)
            .ok_or_else(|| self.invalid_use(OP))
    }

    /// The element type of an array, vector or complex type.
    pub fn element_type(self) -> TypeResult<Type<'tu>> {
        const OP: &str = "element_type";
        self.require(OP, self.kind().has_elements())?;
        self.wrap_child(OP, self.tu.types().element(self.raw))
    }

    /// The element count of a constant array or vector.
    pub fn element_count(self) -> TypeResult<u64> {
        const OP: &str = "element_count";
        self.require(OP, self.kind().has_element_count())?;
        self.tu
            .types()
            .element_count(self.raw)
            .ok_or_else(|| self.invalid_use(OP))
    }

    /// The declaring node of a record, enum or typedef type.
    pub fn get_declaration(self) -> Option<Cursor<'tu>> {
        self.tu
            .types()
            .declaration(self.raw)
            .map(|decl| wrap_cursor(decl, self.tu))
    }

    /// The result type of a function type.
    pub fn get_result(self) -> TypeResult<Type<'tu>> {
        const OP: &str = "get_result";
        self.require(OP, self.kind().is_function())?;
        self.wrap_child(OP, self.tu.types().result(self.raw))
    }

    /// The parameter types of a prototyped function type.
    pub fn argument_types(self) -> TypeResult<ArgumentsList<'tu>> {
        ArgumentsList::new(self)
    }

    /// Check if a function type ends in an ellipsis.
    ///
    /// Functions without a prototype report `false`.
    pub fn is_function_variadic(self) -> TypeResult<bool> {
        const OP: &str = "is_function_variadic";
        self.require(OP, self.kind().is_function())?;
        self.tu
            .types()
            .is_variadic(self.raw)
            .ok_or_else(|| self.invalid_use(OP))
    }

    /// Check if the front end classified the type as plain old data.
    pub fn is_pod(self) -> bool {
        self.tu.types().flags(self.raw).is_pod()
    }

    /// Compare against something that may not be a type at all.
    ///
    /// `None` is never the same record.
    pub fn same_record(self, other: Option<&Type<'tu>>) -> bool {
        other.is_some_and(|other| self == *other)
    }

    /// C-like spelling of the type (`const int`, `void *[2]`, ...).
    pub fn spelling(self) -> String {
        format::spell(self)
    }

    /// Fail with `InvalidUse` unless `ok` holds.
    fn require(self, operation: &'static str, ok: bool) -> TypeResult<()> {
        if ok {
            Ok(())
        } else {
            Err(self.invalid_use(operation))
        }
    }

    fn invalid_use(self, operation: &'static str) -> TypeError {
        let kind = self.kind();
        tracing::debug!(operation, %kind, "type query rejected");
        TypeError::InvalidUse { operation, kind }
    }

    fn wrap_child(self, operation: &'static str, child: Option<RawType>) -> TypeResult<Type<'tu>> {
        child
            .map(|raw| wrap(raw, self.tu))
            .ok_or_else(|| self.invalid_use(operation))
    }
}

impl<'tu> Handle<'tu> for Type<'tu> {
    #[inline]
    fn raw_bits(&self) -> u32 {
        self.raw.raw()
    }

    #[inline]
    fn unit(&self) -> &'tu TranslationUnit {
        self.tu
    }
}

impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        identity_equal(self, other)
    }
}

impl Eq for Type<'_> {}

impl Hash for Type<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        identity_hash(self, state);
    }
}

impl fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("kind", &self.kind())
            .field("raw", &self.raw)
            .field("spelling", &self.spelling())
            .finish()
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}
