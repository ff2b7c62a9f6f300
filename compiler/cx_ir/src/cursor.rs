//! AST node records.
//!
//! Only the declaration nodes needed to locate types are recorded; the
//! cursor table is a flat arena with parent and child links.

use std::fmt;

use crate::{Name, RawCursor, RawType};

/// Kind of an AST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorKind {
    /// The translation unit itself (always [`RawCursor::ROOT`]).
    TranslationUnit,
    /// `struct` declaration.
    StructDecl,
    /// `union` declaration.
    UnionDecl,
    /// `enum` declaration.
    EnumDecl,
    /// Field of a struct or union.
    FieldDecl,
    /// Enumerator of an enum.
    EnumConstantDecl,
    /// Function declaration.
    FunctionDecl,
    /// Variable declaration.
    VarDecl,
    /// Function parameter.
    ParmDecl,
    /// `typedef` declaration.
    TypedefDecl,
    /// C++ namespace.
    Namespace,
}

impl CursorKind {
    /// Check if this is a declaration node.
    #[inline]
    pub const fn is_declaration(self) -> bool {
        !matches!(self, Self::TranslationUnit)
    }

    /// Get the name of this kind as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TranslationUnit => "TranslationUnit",
            Self::StructDecl => "StructDecl",
            Self::UnionDecl => "UnionDecl",
            Self::EnumDecl => "EnumDecl",
            Self::FieldDecl => "FieldDecl",
            Self::EnumConstantDecl => "EnumConstantDecl",
            Self::FunctionDecl => "FunctionDecl",
            Self::VarDecl => "VarDecl",
            Self::ParmDecl => "ParmDecl",
            Self::TypedefDecl => "TypedefDecl",
            Self::Namespace => "Namespace",
        }
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One AST node.
#[derive(Clone, Debug)]
pub struct CursorRecord {
    /// Node kind.
    pub kind: CursorKind,
    /// Declared name (empty for unnamed nodes).
    pub spelling: Name,
    /// Declared type; [`RawType::INVALID`] for nodes without one.
    pub ty: RawType,
    /// Enclosing node (`None` only for the root).
    pub parent: Option<RawCursor>,
    /// Child nodes in declaration order.
    pub children: Vec<RawCursor>,
    /// Aliased type of a typedef declaration.
    pub underlying: Option<RawType>,
}

impl CursorRecord {
    /// Create a childless record.
    pub fn new(kind: CursorKind, spelling: Name, ty: RawType, parent: Option<RawCursor>) -> Self {
        Self {
            kind,
            spelling,
            ty,
            parent,
            children: Vec::new(),
            underlying: None,
        }
    }
}
