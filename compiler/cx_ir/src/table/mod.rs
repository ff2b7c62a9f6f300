//! Interned type table.
//!
//! All type records of a translation unit live here and are referenced by
//! [`RawType`]. Records are hash-consed, so two structurally identical
//! records (same code, qualifiers and payload) share one handle. Each record
//! also stores its canonical form and pre-computed [`TypeFlags`].
//!
//! Readers never panic: a handle that is not in the table reads as the
//! invalid record, and layout accessors return `None` when the record's
//! code does not carry the requested component.

use rustc_hash::FxHashMap;

use crate::{code, BuildError, Item, Qualifiers, RawCursor, RawType, TypeFlags};

/// Record payload: either the inline data field or an extra-array slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Payload {
    Data(u32),
    Extra(Box<[u32]>),
}

/// Hash-consing key.
#[derive(Debug, PartialEq, Eq, Hash)]
struct InternKey {
    code: u32,
    quals: Qualifiers,
    payload: Payload,
}

/// The type records of one translation unit.
pub struct TypeTable {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    canonical: Vec<RawType>,
    /// Out-of-line payloads (arrays with sizes, function signatures).
    extra: Vec<u32>,
    map: FxHashMap<InternKey, RawType>,
}

impl TypeTable {
    /// Create a table with every builtin pre-interned at the index of its code.
    pub(crate) fn new() -> Self {
        let mut table = Self {
            items: Vec::with_capacity(256),
            flags: Vec::with_capacity(256),
            canonical: Vec::with_capacity(256),
            extra: Vec::new(),
            map: FxHashMap::default(),
        };

        for slot in 0..RawType::FIRST_DYNAMIC {
            let item = if slot == code::UNEXPOSED || code::is_builtin(slot) {
                Item::builtin(slot)
            } else {
                Item::INVALID
            };
            // Reserved slots are aliases of the invalid record.
            let reserved = item.code != slot;
            let mut flags = if reserved {
                TypeFlags::empty()
            } else {
                TypeFlags::IS_CANONICAL
            };
            if code::is_builtin(slot)
                && !matches!(slot, code::VOID | code::OVERLOAD | code::DEPENDENT)
            {
                flags |= TypeFlags::IS_POD;
            }
            table.items.push(item);
            table.flags.push(flags);
            table.canonical.push(if reserved {
                RawType::INVALID
            } else {
                RawType::from_raw(slot)
            });
            if !reserved {
                table.map.insert(
                    InternKey {
                        code: slot,
                        quals: Qualifiers::empty(),
                        payload: Payload::Data(0),
                    },
                    RawType::from_raw(slot),
                );
            }
        }

        table
    }

    /// Intern a record, returning the existing handle if already present.
    ///
    /// `canonical` is `None` when the record is its own canonical form.
    pub(crate) fn intern(
        &mut self,
        code: u32,
        quals: Qualifiers,
        payload: Payload,
        flags: TypeFlags,
        canonical: Option<RawType>,
    ) -> Result<RawType, BuildError> {
        let key = InternKey {
            code,
            quals,
            payload,
        };
        if let Some(&existing) = self.map.get(&key) {
            return Ok(existing);
        }

        let overflow = |_| BuildError::TableOverflow { table: "type" };
        let raw = RawType::from_raw(u32::try_from(self.items.len()).map_err(overflow)?);
        let data = match &key.payload {
            Payload::Data(data) => *data,
            Payload::Extra(extra) => {
                let start = u32::try_from(self.extra.len()).map_err(overflow)?;
                self.extra.extend_from_slice(extra);
                start
            }
        };

        let (flags, canonical) = match canonical {
            Some(canonical) if canonical != raw => (flags - TypeFlags::IS_CANONICAL, canonical),
            _ => (flags | TypeFlags::IS_CANONICAL, raw),
        };

        self.items.push(Item::new(code, quals, data));
        self.flags.push(flags);
        self.canonical.push(canonical);
        self.map.insert(key, raw);
        Ok(raw)
    }

    /// Reconstruct the payload of an existing record.
    pub(crate) fn payload(&self, raw: RawType) -> Payload {
        match self.extra_slice(raw) {
            Some(extra) => Payload::Extra(extra.into()),
            None => Payload::Data(self.item(raw).data),
        }
    }

    /// Set the POD bit of every record whose canonical form is a record
    /// declared by `decl`.
    ///
    /// Forward-declared records are interned before their fields are known;
    /// typedefs and qualified copies taken in between follow the record.
    pub(crate) fn complete_record(&mut self, decl: RawCursor, pod: bool) {
        let items = &self.items;
        for (flags, canonical) in self.flags.iter_mut().zip(&self.canonical) {
            let target = items
                .get(canonical.raw() as usize)
                .copied()
                .unwrap_or(Item::INVALID);
            if target.code == code::RECORD && target.declaration() == decl {
                flags.set(TypeFlags::IS_POD, pod);
            }
        }
    }

    // === Readers ===

    /// Number of records, including the pre-interned slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: builtins are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if `raw` names a record of this table.
    pub fn contains(&self, raw: RawType) -> bool {
        (raw.raw() as usize) < self.items.len()
    }

    /// Get the record for a handle.
    pub fn item(&self, raw: RawType) -> Item {
        self.items
            .get(raw.raw() as usize)
            .copied()
            .unwrap_or(Item::INVALID)
    }

    /// Get the kind code.
    pub fn code(&self, raw: RawType) -> u32 {
        self.item(raw).code
    }

    /// Get the local qualifiers.
    pub fn qualifiers(&self, raw: RawType) -> Qualifiers {
        self.item(raw).quals
    }

    /// Get the pre-computed flags.
    pub fn flags(&self, raw: RawType) -> TypeFlags {
        self.flags
            .get(raw.raw() as usize)
            .copied()
            .unwrap_or(TypeFlags::IS_CANONICAL)
    }

    /// Get the canonical form.
    pub fn canonical(&self, raw: RawType) -> RawType {
        self.canonical
            .get(raw.raw() as usize)
            .copied()
            .unwrap_or(RawType::INVALID)
    }

    /// Get the single child of pointer-like, element-carrying and
    /// prototype-less function records.
    pub fn child(&self, raw: RawType) -> Option<RawType> {
        let item = self.item(raw);
        code::has_child(item.code).then(|| item.child())
    }

    /// Get the declaring cursor of record, enum and typedef records.
    pub fn declaration(&self, raw: RawType) -> Option<RawCursor> {
        let item = self.item(raw);
        code::has_declaration(item.code).then(|| item.declaration())
    }

    /// Get the element type of array, vector and complex records.
    pub fn element(&self, raw: RawType) -> Option<RawType> {
        match self.code(raw) {
            code::CONSTANT_ARRAY | code::VECTOR => self
                .extra_slice(raw)
                .and_then(|extra| extra.first())
                .map(|&elem| RawType::from_raw(elem)),
            code::INCOMPLETE_ARRAY
            | code::VARIABLE_ARRAY
            | code::DEPENDENT_SIZED_ARRAY
            | code::COMPLEX => self.child(raw),
            _ => None,
        }
    }

    /// Get the declared element count of constant array and vector records.
    pub fn element_count(&self, raw: RawType) -> Option<u64> {
        if !matches!(self.code(raw), code::CONSTANT_ARRAY | code::VECTOR) {
            return None;
        }
        match self.extra_slice(raw)? {
            [_, lo, hi] => Some(u64::from(*lo) | (u64::from(*hi) << 32)),
            _ => None,
        }
    }

    /// Get the parameter count of a prototyped function record.
    pub fn param_count(&self, raw: RawType) -> Option<usize> {
        self.signature(raw).map(|(params, _, _)| params.len())
    }

    /// Get the `index`-th parameter of a prototyped function record.
    pub fn param(&self, raw: RawType, index: usize) -> Option<RawType> {
        let (params, _, _) = self.signature(raw)?;
        params.get(index).map(|&p| RawType::from_raw(p))
    }

    /// Get the result type of a function record.
    pub fn result(&self, raw: RawType) -> Option<RawType> {
        match self.code(raw) {
            code::FUNCTION_PROTO => self.signature(raw).map(|(_, result, _)| result),
            code::FUNCTION_NO_PROTO => self.child(raw),
            _ => None,
        }
    }

    /// Check if a function record ends in an ellipsis.
    ///
    /// Functions without a prototype are never variadic.
    pub fn is_variadic(&self, raw: RawType) -> Option<bool> {
        match self.code(raw) {
            code::FUNCTION_PROTO => self.signature(raw).map(|(_, _, variadic)| variadic),
            code::FUNCTION_NO_PROTO => Some(false),
            _ => None,
        }
    }

    /// Split a prototype's extra slice into params, result and variadic bit.
    ///
    /// Layout: `[param_count, param0, ..., result, is_variadic]`.
    fn signature(&self, raw: RawType) -> Option<(&[u32], RawType, bool)> {
        if self.code(raw) != code::FUNCTION_PROTO {
            return None;
        }
        let (_, rest) = self.extra_slice(raw)?.split_first()?;
        let (&variadic, rest) = rest.split_last()?;
        let (&result, params) = rest.split_last()?;
        Some((params, RawType::from_raw(result), variadic != 0))
    }

    /// Get the extra slice of records whose payload is out of line.
    fn extra_slice(&self, raw: RawType) -> Option<&[u32]> {
        let item = self.item(raw);
        if !code::uses_extra(item.code) {
            return None;
        }
        let start = item.extra_idx();
        let len = match item.code {
            code::FUNCTION_PROTO => *self.extra.get(start)? as usize + 3,
            _ => 3,
        };
        self.extra.get(start..start + len)
    }
}
