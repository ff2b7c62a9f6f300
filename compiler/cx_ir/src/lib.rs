//! Translation unit records for the type introspection layer.
//!
//! A front end hands over a fully built [`TranslationUnit`]: an interned
//! [`TypeTable`] of type records addressed by [`RawType`], a flat cursor
//! table of AST nodes addressed by [`RawCursor`], and the spellings of those
//! nodes. Records carry numeric kind codes from [`code`]; assigning meaning
//! to the codes is left to the consumer.
//!
//! [`TranslationUnitBuilder`] assembles a unit from already-resolved
//! declarations. It does no parsing and no semantic analysis.

pub mod code;
mod cursor;
mod error;
mod flags;
mod item;
mod name;
mod raw;
mod table;
mod unit;

pub mod builder;

pub use builder::{RecordTag, TranslationUnitBuilder};
pub use cursor::{CursorKind, CursorRecord};
pub use error::BuildError;
pub use flags::{Qualifiers, TypeFlags};
pub use item::Item;
pub use name::{Name, StringInterner};
pub use raw::{RawCursor, RawType};
pub use table::TypeTable;
pub use unit::TranslationUnit;
