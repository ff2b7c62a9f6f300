//! Type kind codes.
//!
//! Every type record carries a numeric kind code. The numbering is stable
//! and versioned by [`CODE_TABLE_VERSION`]; consumers map codes to their own
//! symbolic kinds and must treat unknown codes as invalid.
//!
//! # Code Ranges
//!
//! - 0-1: Sentinels (invalid, unexposed)
//! - 2-29: Builtin scalar types (data unused)
//! - 100-117: Composite and sugared types

/// Version of the code table below. Bumped whenever a code is added.
pub const CODE_TABLE_VERSION: u32 = 1;

// === Sentinels ===
pub const INVALID: u32 = 0;
pub const UNEXPOSED: u32 = 1;

// === Builtins (2-29) ===
pub const VOID: u32 = 2;
pub const BOOL: u32 = 3;
pub const CHAR_U: u32 = 4;
pub const UCHAR: u32 = 5;
pub const CHAR16: u32 = 6;
pub const CHAR32: u32 = 7;
pub const USHORT: u32 = 8;
pub const UINT: u32 = 9;
pub const ULONG: u32 = 10;
pub const ULONGLONG: u32 = 11;
pub const UINT128: u32 = 12;
pub const CHAR_S: u32 = 13;
pub const SCHAR: u32 = 14;
pub const WCHAR: u32 = 15;
pub const SHORT: u32 = 16;
pub const INT: u32 = 17;
pub const LONG: u32 = 18;
pub const LONGLONG: u32 = 19;
pub const INT128: u32 = 20;
pub const FLOAT: u32 = 21;
pub const DOUBLE: u32 = 22;
pub const LONGDOUBLE: u32 = 23;
pub const NULLPTR: u32 = 24;
pub const OVERLOAD: u32 = 25;
pub const DEPENDENT: u32 = 26;
pub const OBJC_ID: u32 = 27;
pub const OBJC_CLASS: u32 = 28;
pub const OBJC_SEL: u32 = 29;

/// First builtin code.
pub const FIRST_BUILTIN: u32 = VOID;
/// Last builtin code.
pub const LAST_BUILTIN: u32 = OBJC_SEL;

// === Composite (100-117) ===
pub const COMPLEX: u32 = 100;
pub const POINTER: u32 = 101;
pub const BLOCK_POINTER: u32 = 102;
pub const LVALUE_REFERENCE: u32 = 103;
pub const RVALUE_REFERENCE: u32 = 104;
pub const RECORD: u32 = 105;
pub const ENUM: u32 = 106;
pub const TYPEDEF: u32 = 107;
pub const OBJC_INTERFACE: u32 = 108;
pub const OBJC_OBJECT_POINTER: u32 = 109;
pub const FUNCTION_NO_PROTO: u32 = 110;
pub const FUNCTION_PROTO: u32 = 111;
pub const CONSTANT_ARRAY: u32 = 112;
pub const VECTOR: u32 = 113;
pub const INCOMPLETE_ARRAY: u32 = 114;
pub const VARIABLE_ARRAY: u32 = 115;
pub const DEPENDENT_SIZED_ARRAY: u32 = 116;
pub const MEMBER_POINTER: u32 = 117;

/// Check if `code` names a builtin scalar type.
#[inline]
pub const fn is_builtin(code: u32) -> bool {
    code >= FIRST_BUILTIN && code <= LAST_BUILTIN
}

/// Check if the record's `data` field holds a single child type.
///
/// Pointer-like types store their pointee; incomplete, variable and
/// dependent arrays and complex types store their element; functions
/// without a prototype store their result.
#[inline]
pub const fn has_child(code: u32) -> bool {
    matches!(
        code,
        POINTER
            | BLOCK_POINTER
            | LVALUE_REFERENCE
            | RVALUE_REFERENCE
            | OBJC_OBJECT_POINTER
            | MEMBER_POINTER
            | INCOMPLETE_ARRAY
            | VARIABLE_ARRAY
            | DEPENDENT_SIZED_ARRAY
            | COMPLEX
            | FUNCTION_NO_PROTO
    )
}

/// Check if the record's `data` field is the declaring cursor.
#[inline]
pub const fn has_declaration(code: u32) -> bool {
    matches!(code, RECORD | ENUM | TYPEDEF | OBJC_INTERFACE)
}

/// Check if the record's `data` field indexes the extra array.
///
/// Layouts:
/// - `CONSTANT_ARRAY`, `VECTOR`: `[element, size_lo, size_hi]`
/// - `FUNCTION_PROTO`: `[param_count, param0, ..., result, is_variadic]`
#[inline]
pub const fn uses_extra(code: u32) -> bool {
    matches!(code, CONSTANT_ARRAY | VECTOR | FUNCTION_PROTO)
}
