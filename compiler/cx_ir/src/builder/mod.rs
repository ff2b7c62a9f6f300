//! Translation unit construction.
//!
//! The builder records declarations and types the way a front end hands
//! them over after semantic analysis: types are already resolved, canonical
//! forms and POD classification are computed at interning time, and the
//! finished unit is immutable.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::table::Payload;
use crate::{
    code, BuildError, CursorKind, CursorRecord, Name, Qualifiers, RawCursor, RawType,
    StringInterner, TranslationUnit, TypeFlags, TypeTable,
};

/// Tag kind of a record declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RecordTag {
    Struct,
    Union,
}

/// Assembles a [`TranslationUnit`].
pub struct TranslationUnitBuilder {
    spelling: Name,
    types: TypeTable,
    cursors: Vec<CursorRecord>,
    names: StringInterner,
    /// Tag names (`struct`, `union`, `enum`) already defined.
    tags: FxHashSet<Name>,
    /// Typedef names already defined.
    typedefs: FxHashSet<Name>,
    /// Named records, declared or defined.
    records: FxHashMap<Name, RawCursor>,
    /// Records whose fields have been given.
    defined: FxHashSet<RawCursor>,
}

impl TranslationUnitBuilder {
    /// Start a unit for the given source name.
    pub fn new(spelling: &str) -> Self {
        let mut names = StringInterner::new();
        // A fresh interner holds one string; this cannot overflow.
        let spelling = names.intern(spelling).unwrap_or(Name::EMPTY);
        let root = CursorRecord::new(CursorKind::TranslationUnit, spelling, RawType::INVALID, None);
        Self {
            spelling,
            types: TypeTable::new(),
            cursors: vec![root],
            names,
            tags: FxHashSet::default(),
            typedefs: FxHashSet::default(),
            records: FxHashMap::default(),
            defined: FxHashSet::default(),
        }
    }

    // === Types ===

    /// Get the pre-interned handle of a builtin kind code.
    pub fn builtin(&self, code: u32) -> Result<RawType, BuildError> {
        RawType::builtin(code).ok_or(BuildError::NotBuiltin { code })
    }

    /// Add local qualifiers to a type.
    ///
    /// Qualifiers accumulate; re-qualifying with bits already present
    /// returns the same handle. Qualifying an array qualifies its element
    /// type instead, and qualifiers on a function type are dropped.
    pub fn qualified(&mut self, ty: RawType, quals: Qualifiers) -> Result<RawType, BuildError> {
        let item = self.types.item(ty);
        match item.code {
            code::CONSTANT_ARRAY => {
                if let (Some(elem), Some(size)) = (self.types.element(ty), self.types.element_count(ty)) {
                    let elem = self.qualified(elem, quals)?;
                    let pod = self.types.flags(elem) & TypeFlags::IS_POD;
                    return self.sized_type(code::CONSTANT_ARRAY, elem, size, pod);
                }
            }
            code::INCOMPLETE_ARRAY | code::VARIABLE_ARRAY | code::DEPENDENT_SIZED_ARRAY => {
                if let Some(elem) = self.types.child(ty) {
                    let elem = self.qualified(elem, quals)?;
                    let flags = self.types.flags(ty) & TypeFlags::IS_POD;
                    return self.child_type(item.code, elem, flags);
                }
            }
            code::FUNCTION_PROTO | code::FUNCTION_NO_PROTO => {
                tracing::debug!(?quals, "qualifiers on a function type ignored");
                return Ok(ty);
            }
            _ => {}
        }

        let merged = item.quals | quals;
        if merged == item.quals {
            return Ok(ty);
        }

        let canon = self.types.canonical(ty);
        let canonical = if canon == ty {
            None
        } else {
            Some(self.qualified(canon, quals)?)
        };
        let payload = self.types.payload(ty);
        let flags = self.types.flags(ty);
        self.types
            .intern(item.code, merged, payload, flags, canonical)
    }

    /// `const`-qualify a type.
    pub fn const_qualified(&mut self, ty: RawType) -> Result<RawType, BuildError> {
        self.qualified(ty, Qualifiers::CONST)
    }

    /// Create a pointer type `pointee *`.
    pub fn pointer(&mut self, pointee: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::POINTER, pointee, TypeFlags::IS_POD)
    }

    /// Create a block pointer type `pointee (^)`.
    pub fn block_pointer(&mut self, pointee: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::BLOCK_POINTER, pointee, TypeFlags::IS_POD)
    }

    /// Create an lvalue reference type `pointee &`.
    pub fn lvalue_reference(&mut self, pointee: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::LVALUE_REFERENCE, pointee, TypeFlags::empty())
    }

    /// Create an rvalue reference type `pointee &&`.
    pub fn rvalue_reference(&mut self, pointee: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::RVALUE_REFERENCE, pointee, TypeFlags::empty())
    }

    /// Create a fixed-size array type `elem [size]`.
    pub fn constant_array(&mut self, elem: RawType, size: u64) -> Result<RawType, BuildError> {
        let pod = self.types.flags(elem) & TypeFlags::IS_POD;
        self.sized_type(code::CONSTANT_ARRAY, elem, size, pod)
    }

    /// Create a vector type of `count` lanes.
    pub fn vector(&mut self, elem: RawType, count: u64) -> Result<RawType, BuildError> {
        self.sized_type(code::VECTOR, elem, count, TypeFlags::IS_POD)
    }

    /// Create an array type of unknown bound `elem []`.
    pub fn incomplete_array(&mut self, elem: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::INCOMPLETE_ARRAY, elem, TypeFlags::empty())
    }

    /// Create a variable-length array type `elem [n]`.
    pub fn variable_array(&mut self, elem: RawType) -> Result<RawType, BuildError> {
        let pod = self.types.flags(elem) & TypeFlags::IS_POD;
        self.child_type(code::VARIABLE_ARRAY, elem, pod)
    }

    /// Create a complex type `_Complex elem`.
    pub fn complex(&mut self, elem: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::COMPLEX, elem, TypeFlags::IS_POD)
    }

    /// Create a prototyped function type `result (params...)`.
    pub fn function_proto(
        &mut self,
        result: RawType,
        params: &[RawType],
        variadic: bool,
    ) -> Result<RawType, BuildError> {
        let canon_result = self.types.canonical(result);
        let canon_params: Vec<RawType> = params.iter().map(|&p| self.types.canonical(p)).collect();
        let canonical = if canon_result == result && canon_params == params {
            None
        } else {
            Some(self.function_proto(canon_result, &canon_params, variadic)?)
        };

        // Layout: [param_count, param0, param1, ..., result, is_variadic]
        let count = u32::try_from(params.len())
            .map_err(|_| BuildError::TableOverflow { table: "parameter" })?;
        let mut extra = Vec::with_capacity(params.len() + 3);
        extra.push(count);
        extra.extend(params.iter().map(|p| p.raw()));
        extra.push(result.raw());
        extra.push(u32::from(variadic));

        self.types.intern(
            code::FUNCTION_PROTO,
            Qualifiers::empty(),
            Payload::Extra(extra.into()),
            TypeFlags::empty(),
            canonical,
        )
    }

    /// Create a function type without a prototype `result ()`.
    pub fn function_no_proto(&mut self, result: RawType) -> Result<RawType, BuildError> {
        self.child_type(code::FUNCTION_NO_PROTO, result, TypeFlags::empty())
    }

    // === Declarations ===

    /// Declare `typedef underlying name;` at file scope.
    pub fn typedef_decl(&mut self, name: &str, underlying: RawType) -> Result<RawCursor, BuildError> {
        let spelling = self.claim(name, false)?;
        let mut record =
            CursorRecord::new(CursorKind::TypedefDecl, spelling, RawType::INVALID, Some(RawCursor::ROOT));
        record.underlying = Some(underlying);
        let cursor = self.push_cursor(record)?;

        let flags = self.types.flags(underlying) & TypeFlags::IS_POD;
        let canonical = self.types.canonical(underlying);
        let ty = self.types.intern(
            code::TYPEDEF,
            Qualifiers::empty(),
            Payload::Data(cursor.raw()),
            flags,
            Some(canonical),
        )?;
        self.set_type(cursor, ty);
        Ok(cursor)
    }

    /// Declare a `struct` with the given fields at file scope.
    pub fn struct_decl(&mut self, name: &str, fields: &[(&str, RawType)]) -> Result<RawCursor, BuildError> {
        self.record_decl(RecordTag::Struct, name, fields)
    }

    /// Declare a `union` with the given fields at file scope.
    pub fn union_decl(&mut self, name: &str, fields: &[(&str, RawType)]) -> Result<RawCursor, BuildError> {
        self.record_decl(RecordTag::Union, name, fields)
    }

    /// Declare and define a record with the given fields at file scope.
    ///
    /// The record is POD when every field is.
    pub fn record_decl(
        &mut self,
        tag: RecordTag,
        name: &str,
        fields: &[(&str, RawType)],
    ) -> Result<RawCursor, BuildError> {
        let cursor = self.record_forward_decl(tag, name)?;
        self.define_record(cursor, fields)?;
        Ok(cursor)
    }

    /// Declare a record without defining it (`struct node;`).
    ///
    /// Redeclaring a named record returns the existing declaration, so
    /// its type can be used in fields before [`define_record`] is called:
    ///
    /// ```text
    /// struct node { struct node *next; };
    /// ```
    ///
    /// The record is incomplete, and not POD, until it is defined.
    ///
    /// [`define_record`]: Self::define_record
    pub fn record_forward_decl(&mut self, tag: RecordTag, name: &str) -> Result<RawCursor, BuildError> {
        let kind = match tag {
            RecordTag::Struct => CursorKind::StructDecl,
            RecordTag::Union => CursorKind::UnionDecl,
        };
        let spelling = self.names.intern(name)?;
        if let Some(&existing) = self.records.get(&spelling) {
            if self.cursors.get(existing.index()).map(|c| c.kind) == Some(kind) {
                return Ok(existing);
            }
            tracing::debug!(name, "record redeclared with another tag");
            return Err(BuildError::Redefinition {
                name: name.to_owned(),
            });
        }

        let spelling = self.claim(name, true)?;
        let cursor =
            self.push_cursor(CursorRecord::new(kind, spelling, RawType::INVALID, Some(RawCursor::ROOT)))?;
        let ty = self.types.intern(
            code::RECORD,
            Qualifiers::empty(),
            Payload::Data(cursor.raw()),
            TypeFlags::empty(),
            None,
        )?;
        self.set_type(cursor, ty);
        if spelling != Name::EMPTY {
            self.records.insert(spelling, cursor);
        }
        Ok(cursor)
    }

    /// Give a declared record its fields.
    ///
    /// The record, and every type whose canonical form is the record, is
    /// POD when every field is.
    pub fn define_record(&mut self, cursor: RawCursor, fields: &[(&str, RawType)]) -> Result<(), BuildError> {
        let Some(record) = self.cursors.get(cursor.index()) else {
            return Err(BuildError::NotRecord { cursor: cursor.raw() });
        };
        if !matches!(record.kind, CursorKind::StructDecl | CursorKind::UnionDecl) {
            return Err(BuildError::NotRecord { cursor: cursor.raw() });
        }
        if !self.defined.insert(cursor) {
            let name = self.names.lookup(record.spelling).to_owned();
            tracing::debug!(name = %name, "record redefinition rejected");
            return Err(BuildError::Redefinition { name });
        }

        let mut pod = true;
        for &(field, ty) in fields {
            let field = self.names.intern(field)?;
            self.push_cursor(CursorRecord::new(CursorKind::FieldDecl, field, ty, Some(cursor)))?;
            pod &= self.types.flags(ty).is_pod();
        }
        self.types.complete_record(cursor, pod);
        Ok(())
    }

    /// Declare an `enum` with the given enumerators at file scope.
    pub fn enum_decl(&mut self, name: &str, enumerators: &[&str]) -> Result<RawCursor, BuildError> {
        let spelling = self.claim(name, true)?;
        let cursor = self.push_cursor(CursorRecord::new(
            CursorKind::EnumDecl,
            spelling,
            RawType::INVALID,
            Some(RawCursor::ROOT),
        ))?;
        let ty = self.types.intern(
            code::ENUM,
            Qualifiers::empty(),
            Payload::Data(cursor.raw()),
            TypeFlags::IS_POD,
            None,
        )?;
        self.set_type(cursor, ty);

        for &enumerator in enumerators {
            let enumerator = self.names.intern(enumerator)?;
            self.push_cursor(CursorRecord::new(CursorKind::EnumConstantDecl, enumerator, ty, Some(cursor)))?;
        }
        Ok(cursor)
    }

    /// Declare a variable at file scope.
    pub fn var_decl(&mut self, name: &str, ty: RawType) -> Result<RawCursor, BuildError> {
        let spelling = self.names.intern(name)?;
        self.push_cursor(CursorRecord::new(CursorKind::VarDecl, spelling, ty, Some(RawCursor::ROOT)))
    }

    /// Declare a prototyped function at file scope.
    ///
    /// Parameters become `ParmDecl` children; unnamed parameters use `""`.
    pub fn function_decl(
        &mut self,
        name: &str,
        result: RawType,
        params: &[(&str, RawType)],
        variadic: bool,
    ) -> Result<RawCursor, BuildError> {
        let param_types: Vec<RawType> = params.iter().map(|&(_, ty)| ty).collect();
        let ty = self.function_proto(result, &param_types, variadic)?;
        let spelling = self.names.intern(name)?;
        let cursor = self.push_cursor(CursorRecord::new(CursorKind::FunctionDecl, spelling, ty, Some(RawCursor::ROOT)))?;
        for &(param, ty) in params {
            let param = self.names.intern(param)?;
            self.push_cursor(CursorRecord::new(CursorKind::ParmDecl, param, ty, Some(cursor)))?;
        }
        Ok(cursor)
    }

    /// Declare a function without a prototype (`int f();` in C).
    pub fn function_decl_no_proto(&mut self, name: &str, result: RawType) -> Result<RawCursor, BuildError> {
        let ty = self.function_no_proto(result)?;
        let spelling = self.names.intern(name)?;
        self.push_cursor(CursorRecord::new(CursorKind::FunctionDecl, spelling, ty, Some(RawCursor::ROOT)))
    }

    /// Declare a namespace at file scope. Namespaces have no type.
    pub fn namespace_decl(&mut self, name: &str) -> Result<RawCursor, BuildError> {
        let spelling = self.names.intern(name)?;
        self.push_cursor(CursorRecord::new(
            CursorKind::Namespace,
            spelling,
            RawType::INVALID,
            Some(RawCursor::ROOT),
        ))
    }

    /// Get the type recorded for a declaration made by this builder.
    pub fn declared_type(&self, cursor: RawCursor) -> RawType {
        self.cursors
            .get(cursor.index())
            .map_or(RawType::INVALID, |c| c.ty)
    }

    /// Freeze the unit.
    #[tracing::instrument(level = "debug", skip_all, fields(unit = self.names.lookup(self.spelling)))]
    pub fn finish(self) -> TranslationUnit {
        tracing::debug!(
            types = self.types.len(),
            cursors = self.cursors.len(),
            "translation unit built"
        );
        TranslationUnit {
            spelling: self.spelling,
            types: self.types,
            cursors: self.cursors,
            names: self.names,
        }
    }

    // === Internals ===

    /// Intern a single-child record, canonicalizing the child.
    fn child_type(&mut self, code: u32, child: RawType, flags: TypeFlags) -> Result<RawType, BuildError> {
        let canon_child = self.types.canonical(child);
        let canonical = if canon_child == child {
            None
        } else {
            Some(self.child_type(code, canon_child, flags)?)
        };
        self.types.intern(
            code,
            Qualifiers::empty(),
            Payload::Data(child.raw()),
            flags,
            canonical,
        )
    }

    /// Intern an element-and-size record.
    ///
    /// Layout: `[element, size_lo, size_hi]`.
    fn sized_type(
        &mut self,
        code: u32,
        elem: RawType,
        size: u64,
        flags: TypeFlags,
    ) -> Result<RawType, BuildError> {
        let canon_elem = self.types.canonical(elem);
        let canonical = if canon_elem == elem {
            None
        } else {
            Some(self.sized_type(code, canon_elem, size, flags)?)
        };

        #[expect(
            clippy::cast_possible_truncation,
            reason = "the size is split into its low and high words"
        )]
        let extra = [elem.raw(), size as u32, (size >> 32) as u32];
        self.types.intern(
            code,
            Qualifiers::empty(),
            Payload::Extra(extra.into()),
            flags,
            canonical,
        )
    }

    /// Reserve a tag or typedef name, rejecting redefinitions.
    ///
    /// Unnamed declarations never conflict.
    fn claim(&mut self, name: &str, tag: bool) -> Result<Name, BuildError> {
        let spelling = self.names.intern(name)?;
        if spelling == Name::EMPTY {
            return Ok(spelling);
        }
        let fresh = if tag {
            self.tags.insert(spelling)
        } else {
            self.typedefs.insert(spelling)
        };
        if !fresh {
            tracing::debug!(name, "redefinition rejected");
            return Err(BuildError::Redefinition {
                name: name.to_owned(),
            });
        }
        Ok(spelling)
    }

    /// Append a cursor and link it into its parent.
    fn push_cursor(&mut self, record: CursorRecord) -> Result<RawCursor, BuildError> {
        let raw = u32::try_from(self.cursors.len())
            .map_err(|_| BuildError::TableOverflow { table: "cursor" })?;
        let cursor = RawCursor::from_raw(raw);
        if let Some(parent) = record.parent.and_then(|p| self.cursors.get_mut(p.index())) {
            parent.children.push(cursor);
        }
        self.cursors.push(record);
        Ok(cursor)
    }

    fn set_type(&mut self, cursor: RawCursor, ty: RawType) {
        if let Some(record) = self.cursors.get_mut(cursor.index()) {
            record.ty = ty;
        }
    }
}

#[cfg(test)]
mod tests;
