//! C declarator spelling.
//!
//! Spelling works inside out. Each derived type wraps the declarator built
//! so far (`*`, `[2]`, `(int)`) and passes it down to its child, until a
//! builtin or named type supplies the specifier on the left:
//!
//! ```text
//! void *[2]   array -> "[2]", pointer -> "*[2]", void -> "void *[2]"
//! int (*)[2]  pointer -> "*", array -> "(*)[2]", int -> "int (*)[2]"
//! ```
//!
//! Reads go straight to the type table so spelling a malformed record never
//! logs a rejected query.

use cx_ir::{CursorKind, TypeTable};

use super::Type;
use crate::handle::wrap;
use crate::TypeKind;

pub(super) fn spell(ty: Type<'_>) -> String {
    declare(ty, String::new())
}

fn declare(ty: Type<'_>, declarator: String) -> String {
    let types = ty.tu.types();
    let kind = ty.kind();

    if kind.is_pointer_like() {
        let mut inner = String::from(pointer_sigil(kind));
        let quals = ty.qualifiers();
        if !quals.is_empty() {
            inner.push_str(&quals.spelling());
            if !declarator.is_empty() {
                inner.push(' ');
            }
        }
        inner.push_str(&declarator);
        return match types.child(ty.raw) {
            Some(pointee) => {
                let pointee = wrap(pointee, ty.tu);
                let pointee_kind = pointee.kind();
                if pointee_kind.is_array() || pointee_kind.is_function() {
                    inner = format!("({inner})");
                }
                declare(pointee, inner)
            }
            None => inner,
        };
    }

    if kind.is_array() {
        let suffix = match (kind, types.element_count(ty.raw)) {
            (TypeKind::ConstantArray, Some(size)) => format!("[{size}]"),
            (TypeKind::VariableArray, _) => "[*]".to_owned(),
            _ => "[]".to_owned(),
        };
        let inner = declarator + &suffix;
        return match types.element(ty.raw) {
            Some(elem) => declare(wrap(elem, ty.tu), inner),
            None => inner,
        };
    }

    match kind {
        TypeKind::FunctionProto => {
            let inner = format!("{declarator}({})", parameters(ty, types));
            match types.result(ty.raw) {
                Some(result) => declare(wrap(result, ty.tu), inner),
                None => inner,
            }
        }
        TypeKind::FunctionNoProto => {
            let inner = format!("{declarator}()");
            match types.result(ty.raw) {
                Some(result) => declare(wrap(result, ty.tu), inner),
                None => inner,
            }
        }
        _ => join(&specifier(ty, types), &declarator),
    }
}

/// Qualifiers followed by the base name of a leaf type.
fn specifier(ty: Type<'_>, types: &TypeTable) -> String {
    let kind = ty.kind();
    let base = match kind {
        TypeKind::Vector => {
            let elem = types.element(ty.raw).map(|e| spell(wrap(e, ty.tu)));
            let count = types.element_count(ty.raw).unwrap_or(0);
            format!(
                "{} __attribute__((ext_vector_type({count})))",
                elem.unwrap_or_default()
            )
        }
        TypeKind::Complex => {
            let elem = types.element(ty.raw).map(|e| spell(wrap(e, ty.tu)));
            format!("_Complex {}", elem.unwrap_or_default())
        }
        _ if kind.has_declaration() => declared_name(ty),
        _ => builtin_name(kind).to_owned(),
    };

    let quals = ty.qualifiers();
    if quals.is_empty() {
        base
    } else {
        join(&quals.spelling(), &base)
    }
}

fn parameters(ty: Type<'_>, types: &TypeTable) -> String {
    let count = types.param_count(ty.raw).unwrap_or(0);
    let mut params: Vec<String> = (0..count)
        .filter_map(|i| types.param(ty.raw, i))
        .map(|p| spell(wrap(p, ty.tu)))
        .collect();
    if types.is_variadic(ty.raw) == Some(true) {
        params.push("...".to_owned());
    }
    if params.is_empty() {
        "void".to_owned()
    } else {
        params.join(", ")
    }
}

/// Name of a record, enum, typedef or interface type.
fn declared_name(ty: Type<'_>) -> String {
    let Some(decl) = ty.get_declaration() else {
        return String::new();
    };
    let name = match decl.spelling() {
        "" => "(anonymous)",
        name => name,
    };
    match (ty.kind(), decl.kind()) {
        (TypeKind::Record, Some(CursorKind::UnionDecl)) => format!("union {name}"),
        (TypeKind::Record, _) => format!("struct {name}"),
        (TypeKind::Enum, _) => format!("enum {name}"),
        _ => name.to_owned(),
    }
}

fn builtin_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Void => "void",
        TypeKind::Bool => "_Bool",
        TypeKind::CharU | TypeKind::CharS => "char",
        TypeKind::UChar => "unsigned char",
        TypeKind::Char16 => "char16_t",
        TypeKind::Char32 => "char32_t",
        TypeKind::UShort => "unsigned short",
        TypeKind::UInt => "unsigned int",
        TypeKind::ULong => "unsigned long",
        TypeKind::ULongLong => "unsigned long long",
        TypeKind::UInt128 => "unsigned __int128",
        TypeKind::SChar => "signed char",
        TypeKind::WChar => "wchar_t",
        TypeKind::Short => "short",
        TypeKind::Int => "int",
        TypeKind::Long => "long",
        TypeKind::LongLong => "long long",
        TypeKind::Int128 => "__int128",
        TypeKind::Float => "float",
        TypeKind::Double => "double",
        TypeKind::LongDouble => "long double",
        TypeKind::NullPtr => "std::nullptr_t",
        TypeKind::Overload => "<overloaded function type>",
        TypeKind::Dependent => "<dependent type>",
        TypeKind::ObjCId => "id",
        TypeKind::ObjCClass => "Class",
        TypeKind::ObjCSel => "SEL",
        _ => "",
    }
}

fn pointer_sigil(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::BlockPointer => "^",
        TypeKind::LValueReference => "&",
        TypeKind::RValueReference => "&&",
        TypeKind::MemberPointer => "::*",
        _ => "*",
    }
}

fn join(specifier: &str, declarator: &str) -> String {
    match (specifier.is_empty(), declarator.is_empty()) {
        (_, true) => specifier.to_owned(),
        (true, false) => declarator.to_owned(),
        (false, false) => format!("{specifier} {declarator}"),
    }
}
