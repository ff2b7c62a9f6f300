//! Symbolic type kinds.
//!
//! Every kind code a translation unit can report maps to exactly one
//! `TypeKind`. The mapping is a static match over the versioned code table
//! in [`cx_ir::code`]; codes it does not know resolve to
//! [`TypeKind::Invalid`] so callers can always branch on the kind.
//!
//! # Kind Categories
//!
//! - 0-1: Sentinels (`Invalid`, `Unexposed`)
//! - 2-29: Builtin scalars
//! - 100-117: Composite and sugared kinds

use std::fmt;

use cx_ir::code;

/// Classification of a type record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum TypeKind {
    // === Sentinels ===
    /// No type, or a code this layer does not know.
    Invalid = code::INVALID,
    /// A type the front end does not expose.
    Unexposed = code::UNEXPOSED,

    // === Builtins ===
    Void = code::VOID,
    Bool = code::BOOL,
    /// Plain `char` on targets where it is unsigned.
    CharU = code::CHAR_U,
    UChar = code::UCHAR,
    Char16 = code::CHAR16,
    Char32 = code::CHAR32,
    UShort = code::USHORT,
    UInt = code::UINT,
    ULong = code::ULONG,
    ULongLong = code::ULONGLONG,
    UInt128 = code::UINT128,
    /// Plain `char` on targets where it is signed.
    CharS = code::CHAR_S,
    SChar = code::SCHAR,
    WChar = code::WCHAR,
    Short = code::SHORT,
    Int = code::INT,
    Long = code::LONG,
    LongLong = code::LONGLONG,
    Int128 = code::INT128,
    Float = code::FLOAT,
    Double = code::DOUBLE,
    LongDouble = code::LONGDOUBLE,
    NullPtr = code::NULLPTR,
    Overload = code::OVERLOAD,
    Dependent = code::DEPENDENT,
    ObjCId = code::OBJC_ID,
    ObjCClass = code::OBJC_CLASS,
    ObjCSel = code::OBJC_SEL,

    // === Composite ===
    Complex = code::COMPLEX,
    Pointer = code::POINTER,
    BlockPointer = code::BLOCK_POINTER,
    LValueReference = code::LVALUE_REFERENCE,
    RValueReference = code::RVALUE_REFERENCE,
    Record = code::RECORD,
    Enum = code::ENUM,
    Typedef = code::TYPEDEF,
    ObjCInterface = code::OBJC_INTERFACE,
    ObjCObjectPointer = code::OBJC_OBJECT_POINTER,
    /// Function declared without a prototype (`int f();` in C).
    FunctionNoProto = code::FUNCTION_NO_PROTO,
    FunctionProto = code::FUNCTION_PROTO,
    ConstantArray = code::CONSTANT_ARRAY,
    Vector = code::VECTOR,
    IncompleteArray = code::INCOMPLETE_ARRAY,
    VariableArray = code::VARIABLE_ARRAY,
    DependentSizedArray = code::DEPENDENT_SIZED_ARRAY,
    MemberPointer = code::MEMBER_POINTER,
}

impl TypeKind {
    /// Every kind, in code order.
    pub const ALL: [Self; 48] = [
        Self::Invalid,
        Self::Unexposed,
        Self::Void,
        Self::Bool,
        Self::CharU,
        Self::UChar,
        Self::Char16,
        Self::Char32,
        Self::UShort,
        Self::UInt,
        Self::ULong,
        Self::ULongLong,
        Self::UInt128,
        Self::CharS,
        Self::SChar,
        Self::WChar,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::LongLong,
        Self::Int128,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::NullPtr,
        Self::Overload,
        Self::Dependent,
        Self::ObjCId,
        Self::ObjCClass,
        Self::ObjCSel,
        Self::Complex,
        Self::Pointer,
        Self::BlockPointer,
        Self::LValueReference,
        Self::RValueReference,
        Self::Record,
        Self::Enum,
        Self::Typedef,
        Self::ObjCInterface,
        Self::ObjCObjectPointer,
        Self::FunctionNoProto,
        Self::FunctionProto,
        Self::ConstantArray,
        Self::Vector,
        Self::IncompleteArray,
        Self::VariableArray,
        Self::DependentSizedArray,
        Self::MemberPointer,
    ];

    /// Map a kind code to its kind. Unknown codes map to `Invalid`.
    pub fn from_code(code: u32) -> Self {
        match Self::lookup(code) {
            Some(kind) => kind,
            None => {
                tracing::trace!(code, "unknown type kind code, treating as invalid");
                Self::Invalid
            }
        }
    }

    /// Map a kind code to its kind, or `None` if the code is unknown.
    pub const fn lookup(code: u32) -> Option<Self> {
        Some(match code {
            code::INVALID => Self::Invalid,
            code::UNEXPOSED => Self::Unexposed,
            code::VOID => Self::Void,
            code::BOOL => Self::Bool,
            code::CHAR_U => Self::CharU,
            code::UCHAR => Self::UChar,
            code::CHAR16 => Self::Char16,
            code::CHAR32 => Self::Char32,
            code::USHORT => Self::UShort,
            code::UINT => Self::UInt,
            code::ULONG => Self::ULong,
            code::ULONGLONG => Self::ULongLong,
            code::UINT128 => Self::UInt128,
            code::CHAR_S => Self::CharS,
            code::SCHAR => Self::SChar,
            code::WCHAR => Self::WChar,
            code::SHORT => Self::Short,
            code::INT => Self::Int,
            code::LONG => Self::Long,
            code::LONGLONG => Self::LongLong,
            code::INT128 => Self::Int128,
            code::FLOAT => Self::Float,
            code::DOUBLE => Self::Double,
            code::LONGDOUBLE => Self::LongDouble,
            code::NULLPTR => Self::NullPtr,
            code::OVERLOAD => Self::Overload,
            code::DEPENDENT => Self::Dependent,
            code::OBJC_ID => Self::ObjCId,
            code::OBJC_CLASS => Self::ObjCClass,
            code::OBJC_SEL => Self::ObjCSel,
            code::COMPLEX => Self::Complex,
            code::POINTER => Self::Pointer,
            code::BLOCK_POINTER => Self::BlockPointer,
            code::LVALUE_REFERENCE => Self::LValueReference,
            code::RVALUE_REFERENCE => Self::RValueReference,
            code::RECORD => Self::Record,
            code::ENUM => Self::Enum,
            code::TYPEDEF => Self::Typedef,
            code::OBJC_INTERFACE => Self::ObjCInterface,
            code::OBJC_OBJECT_POINTER => Self::ObjCObjectPointer,
            code::FUNCTION_NO_PROTO => Self::FunctionNoProto,
            code::FUNCTION_PROTO => Self::FunctionProto,
            code::CONSTANT_ARRAY => Self::ConstantArray,
            code::VECTOR => Self::Vector,
            code::INCOMPLETE_ARRAY => Self::IncompleteArray,
            code::VARIABLE_ARRAY => Self::VariableArray,
            code::DEPENDENT_SIZED_ARRAY => Self::DependentSizedArray,
            code::MEMBER_POINTER => Self::MemberPointer,
            _ => return None,
        })
    }

    /// Get the kind code.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Check if this is a builtin scalar kind.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        code::is_builtin(self.code())
    }

    /// Check if this kind has a pointee.
    #[inline]
    pub const fn is_pointer_like(self) -> bool {
        matches!(
            self,
            Self::Pointer
                | Self::BlockPointer
                | Self::LValueReference
                | Self::RValueReference
                | Self::ObjCObjectPointer
                | Self::MemberPointer
        )
    }

    /// Check if this is an array kind.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ConstantArray
                | Self::IncompleteArray
                | Self::VariableArray
                | Self::DependentSizedArray
        )
    }

    /// Check if this kind has an element type (arrays, vectors, complex).
    #[inline]
    pub const fn has_elements(self) -> bool {
        self.is_array() || matches!(self, Self::Vector | Self::Complex)
    }

    /// Check if this kind has a declared element count.
    #[inline]
    pub const fn has_element_count(self) -> bool {
        matches!(self, Self::ConstantArray | Self::Vector)
    }

    /// Check if this is a function signature kind.
    #[inline]
    pub const fn is_function(self) -> bool {
        matches!(self, Self::FunctionProto | Self::FunctionNoProto)
    }

    /// Check if types of this kind have a declaring cursor.
    #[inline]
    pub const fn has_declaration(self) -> bool {
        code::has_declaration(self.code())
    }

    /// Get the spelling of this kind.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Unexposed => "Unexposed",
            Self::Void => "Void",
            Self::Bool => "Bool",
            Self::CharU => "Char_U",
            Self::UChar => "UChar",
            Self::Char16 => "Char16",
            Self::Char32 => "Char32",
            Self::UShort => "UShort",
            Self::UInt => "UInt",
            Self::ULong => "ULong",
            Self::ULongLong => "ULongLong",
            Self::UInt128 => "UInt128",
            Self::CharS => "Char_S",
            Self::SChar => "SChar",
            Self::WChar => "WChar",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::LongLong => "LongLong",
            Self::Int128 => "Int128",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::LongDouble => "LongDouble",
            Self::NullPtr => "NullPtr",
            Self::Overload => "Overload",
            Self::Dependent => "Dependent",
            Self::ObjCId => "ObjCId",
            Self::ObjCClass => "ObjCClass",
            Self::ObjCSel => "ObjCSel",
            Self::Complex => "Complex",
            Self::Pointer => "Pointer",
            Self::BlockPointer => "BlockPointer",
            Self::LValueReference => "LValueReference",
            Self::RValueReference => "RValueReference",
            Self::Record => "Record",
            Self::Enum => "Enum",
            Self::Typedef => "Typedef",
            Self::ObjCInterface => "ObjCInterface",
            Self::ObjCObjectPointer => "ObjCObjectPointer",
            Self::FunctionNoProto => "FunctionNoProto",
            Self::FunctionProto => "FunctionProto",
            Self::ConstantArray => "ConstantArray",
            Self::Vector => "Vector",
            Self::IncompleteArray => "IncompleteArray",
            Self::VariableArray => "VariableArray",
            Self::DependentSizedArray => "DependentSizedArray",
            Self::MemberPointer => "MemberPointer",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

#[cfg(test)]
mod tests;
