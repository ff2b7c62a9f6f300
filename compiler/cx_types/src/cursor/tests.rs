use std::error::Error;

use cx_ir::{RawType, TranslationUnitBuilder};
use pretty_assertions::assert_eq;

use super::*;
use crate::TypeKind;

#[test]
fn root_has_no_type_and_no_parent() {
    let unit = TranslationUnitBuilder::new("t.c").finish();
    let root = Cursor::root(&unit);

    assert_eq!(root.kind(), Some(CursorKind::TranslationUnit));
    assert_eq!(root.spelling(), "t.c");
    assert_eq!(root.ty().kind(), TypeKind::Invalid);
    assert_eq!(root.parent(), None);
    assert_eq!(root.children().len(), 0);
}

#[test]
fn navigates_fields() -> Result<(), Box<dyn Error>> {
    let mut b = TranslationUnitBuilder::new("t.c");
    b.struct_decl("pair", &[("first", RawType::INT), ("second", RawType::LONG)])?;
    let unit = b.finish();

    let root = Cursor::root(&unit);
    let pair = root.child("pair").ok_or("no pair")?;
    assert_eq!(pair.kind(), Some(CursorKind::StructDecl));
    assert_eq!(pair.parent(), Some(root));

    let names: Vec<&str> = pair.children().map(Cursor::spelling).collect();
    assert_eq!(names, vec!["first", "second"]);

    let second = pair.child("second").ok_or("no field")?;
    assert_eq!(second.kind(), Some(CursorKind::FieldDecl));
    assert_eq!(type_of(second).kind(), TypeKind::Long);
    assert_eq!(second.ty(), type_of(second));
    assert_eq!(pair.child("third"), None);
    Ok(())
}

#[test]
fn declaration_round_trips() -> Result<(), Box<dyn Error>> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let decl = b.enum_decl("mode", &["fast", "slow"])?;
    let unit = b.finish();

    let mode = wrap_cursor(decl, &unit);
    let ty = mode.ty();
    assert_eq!(ty.kind(), TypeKind::Enum);
    assert_eq!(declaration_of(ty), Some(mode));
    assert_eq!(declaration_of(wrap(RawType::INT, &unit)), None);
    assert_eq!(mode.children().len(), 2);
    Ok(())
}

#[test]
fn function_declarations() -> Result<(), Box<dyn Error>> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let f = b.function_decl("f", RawType::DOUBLE, &[("x", RawType::INT)], false)?;
    b.var_decl("v", RawType::INT)?;
    let unit = b.finish();

    let f = wrap_cursor(f, &unit);
    assert_eq!(f.result_type().map(|t| t.kind()), Ok(TypeKind::Double));
    let x = f.child("x").ok_or("no parameter")?;
    assert_eq!(x.kind(), Some(CursorKind::ParmDecl));
    assert_eq!(x.ty().kind(), TypeKind::Int);

    let v = Cursor::root(&unit).child("v").ok_or("no variable")?;
    assert!(v.result_type().is_err_and(|e| e.is_invalid_use()));
    Ok(())
}

#[test]
fn typedef_underlying_type() -> Result<(), Box<dyn Error>> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let ptr = b.pointer(RawType::CHAR_S)?;
    let decl = b.typedef_decl("str", ptr)?;
    let unit = b.finish();

    let decl = wrap_cursor(decl, &unit);
    assert_eq!(decl.kind(), Some(CursorKind::TypedefDecl));
    assert_eq!(decl.underlying_typedef_type(), Some(wrap(ptr, &unit)));
    assert_eq!(decl.ty().kind(), TypeKind::Typedef);
    assert_eq!(decl.ty().get_canonical(), wrap(ptr, &unit));
    assert_eq!(Cursor::root(&unit).underlying_typedef_type(), None);
    Ok(())
}

#[test]
fn cursors_hash_by_identity() {
    use std::collections::HashSet;

    let unit = TranslationUnitBuilder::new("t.c").finish();
    let set: HashSet<Cursor<'_>> = [Cursor::root(&unit), wrap_cursor(RawCursor::ROOT, &unit)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}
