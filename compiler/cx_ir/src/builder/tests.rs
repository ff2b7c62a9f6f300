use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtin_rejects_composite_codes() {
    let builder = TranslationUnitBuilder::new("t.c");
    assert_eq!(builder.builtin(code::INT), Ok(RawType::INT));
    assert_eq!(
        builder.builtin(code::POINTER),
        Err(BuildError::NotBuiltin { code: code::POINTER })
    );
}

#[test]
fn pointers_are_interned() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let p1 = b.pointer(RawType::INT)?;
    let p2 = b.pointer(RawType::INT)?;
    let pp = b.pointer(p1)?;
    assert_eq!(p1, p2);
    assert_ne!(p1, pp);

    let unit = b.finish();
    assert_eq!(unit.types().child(pp), Some(p1));
    assert!(unit.types().flags(pp).is_pod());
    Ok(())
}

#[test]
fn typedef_canonicalizes_to_target() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let decl = b.typedef_decl("I", RawType::INT)?;
    let ty = b.declared_type(decl);
    let ptr = b.pointer(ty)?;
    let int_ptr = b.pointer(RawType::INT)?;
    let unit = b.finish();

    let types = unit.types();
    assert_eq!(types.code(ty), code::TYPEDEF);
    assert_eq!(types.canonical(ty), RawType::INT);
    assert_eq!(types.declaration(ty), Some(decl));
    assert_eq!(types.canonical(ptr), int_ptr);
    assert_eq!(unit.cursor_spelling(decl), "I");
    assert_eq!(unit.cursor(decl).and_then(|c| c.underlying), Some(RawType::INT));
    Ok(())
}

#[test]
fn qualifiers_survive_canonicalization() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let decl = b.typedef_decl("I", RawType::INT)?;
    let alias = b.declared_type(decl);
    let const_alias = b.const_qualified(alias)?;
    let const_int = b.const_qualified(RawType::INT)?;
    let again = b.const_qualified(const_int)?;
    let unit = b.finish();

    let types = unit.types();
    assert_eq!(again, const_int);
    assert_eq!(types.code(const_alias), code::TYPEDEF);
    assert_eq!(types.qualifiers(const_alias), Qualifiers::CONST);
    assert_eq!(types.canonical(const_alias), const_int);
    assert_eq!(types.qualifiers(alias), Qualifiers::empty());
    Ok(())
}

#[test]
fn typedef_hides_qualifiers_of_target() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let const_int = b.const_qualified(RawType::INT)?;
    let decl = b.typedef_decl("CI", const_int)?;
    let alias = b.declared_type(decl);
    let unit = b.finish();

    assert!(unit.types().qualifiers(alias).is_empty());
    assert_eq!(unit.types().canonical(alias), const_int);
    Ok(())
}

#[test]
fn struct_fields_and_pod() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let plain = b.struct_decl("plain", &[("a", RawType::INT), ("b", RawType::DOUBLE)])?;
    let int_ref = b.lvalue_reference(RawType::INT)?;
    let holder = b.struct_decl("holder", &[("r", int_ref)])?;
    let unit = b.finish();

    let fields: Vec<&str> = unit
        .children(plain)
        .iter()
        .map(|&c| unit.cursor_spelling(c))
        .collect();
    assert_eq!(fields, vec!["a", "b"]);
    assert_eq!(unit.cursor_kind(plain), Some(CursorKind::StructDecl));

    let plain_ty = unit.cursor_type(plain);
    assert_eq!(unit.types().code(plain_ty), code::RECORD);
    assert_eq!(unit.types().declaration(plain_ty), Some(plain));
    assert!(unit.types().flags(plain_ty).is_pod());
    assert!(!unit.types().flags(unit.cursor_type(holder)).is_pod());
    Ok(())
}

#[test]
fn tag_redefinition_is_rejected() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    b.struct_decl("s", &[])?;
    assert_eq!(
        b.union_decl("s", &[]).map(|_| ()),
        Err(BuildError::Redefinition { name: "s".to_owned() })
    );
    // Typedef names live in a separate namespace.
    b.typedef_decl("s", RawType::INT)?;
    // Unnamed records never conflict.
    b.struct_decl("", &[])?;
    b.struct_decl("", &[])?;
    Ok(())
}

#[test]
fn function_signature_layout() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let foo = b.function_decl("foo", RawType::VOID, &[("a", RawType::INT)], true)?;
    let bar = b.function_decl("bar", RawType::VOID, &[("a", RawType::INT), ("b", RawType::INT)], false)?;
    let baz = b.function_decl_no_proto("baz", RawType::INT)?;
    let unit = b.finish();

    let types = unit.types();
    let foo_ty = unit.cursor_type(foo);
    let bar_ty = unit.cursor_type(bar);
    assert_eq!(types.code(foo_ty), code::FUNCTION_PROTO);
    assert_eq!(types.param_count(foo_ty), Some(1));
    assert_eq!(types.is_variadic(foo_ty), Some(true));
    assert_eq!(types.param_count(bar_ty), Some(2));
    assert_eq!(types.is_variadic(bar_ty), Some(false));
    assert_eq!(types.code(unit.cursor_type(baz)), code::FUNCTION_NO_PROTO);
    assert_eq!(unit.children(bar).len(), 2);
    assert_eq!(unit.cursor_kind(unit.children(bar)[0]), Some(CursorKind::ParmDecl));
    Ok(())
}

#[test]
fn arrays_record_sizes() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let void_ptr = b.pointer(RawType::VOID)?;
    let array = b.constant_array(void_ptr, 2)?;
    let big = b.constant_array(RawType::INT, u64::from(u32::MAX) + 10)?;
    let unit = b.finish();

    assert_eq!(unit.types().element(array), Some(void_ptr));
    assert_eq!(unit.types().element_count(array), Some(2));
    assert_eq!(unit.types().element_count(big), Some(u64::from(u32::MAX) + 10));
    Ok(())
}

#[test]
fn root_lists_top_level_declarations() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    b.var_decl("a", RawType::INT)?;
    b.namespace_decl("ns")?;
    let unit = b.finish();

    assert_eq!(unit.spelling(), "t.c");
    assert_eq!(unit.cursor_count(), 3);
    let ns = unit.find_child(unit.root(), "ns");
    assert!(ns.is_some());
    assert_eq!(ns.map(|c| unit.cursor_type(c)), Some(RawType::INVALID));
    assert_eq!(unit.find_child(unit.root(), "missing"), None);
    Ok(())
}

#[test]
fn qualifying_an_array_qualifies_its_element() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let array = b.constant_array(RawType::INT, 2)?;
    let const_array = b.const_qualified(array)?;
    let const_int = b.const_qualified(RawType::INT)?;
    let expected = b.constant_array(const_int, 2)?;
    let open = b.incomplete_array(RawType::INT)?;
    let volatile_open = b.qualified(open, Qualifiers::VOLATILE)?;
    let unit = b.finish();

    let types = unit.types();
    assert_eq!(const_array, expected);
    assert!(types.qualifiers(const_array).is_empty());
    assert_eq!(types.element(const_array), Some(const_int));
    assert_eq!(types.element_count(const_array), Some(2));
    assert_eq!(types.code(volatile_open), code::INCOMPLETE_ARRAY);
    assert_eq!(
        types.element(volatile_open).map(|e| types.qualifiers(e)),
        Some(Qualifiers::VOLATILE)
    );
    Ok(())
}

#[test]
fn qualifiers_on_functions_are_dropped() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let func = b.function_proto(RawType::VOID, &[RawType::INT], false)?;
    assert_eq!(b.const_qualified(func)?, func);
    let no_proto = b.function_no_proto(RawType::INT)?;
    assert_eq!(b.qualified(no_proto, Qualifiers::VOLATILE)?, no_proto);
    Ok(())
}

#[test]
fn self_referential_record() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let node = b.record_forward_decl(RecordTag::Struct, "node")?;
    let node_ty = b.declared_type(node);
    let next = b.pointer(node_ty)?;
    let alias = b.typedef_decl("node_t", node_ty)?;
    b.define_record(node, &[("value", RawType::INT), ("next", next)])?;
    let unit = b.finish();

    let types = unit.types();
    assert_eq!(unit.cursor_type(node), node_ty);
    assert_eq!(unit.children(node).len(), 2);
    let next_field = unit.find_child(node, "next").map(|c| unit.cursor_type(c));
    assert_eq!(next_field, Some(next));
    assert_eq!(types.child(next), Some(node_ty));
    assert!(types.flags(node_ty).is_pod());
    assert!(types.flags(unit.cursor_type(alias)).is_pod());
    Ok(())
}

#[test]
fn forward_declarations_resolve_to_one_record() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let first = b.record_forward_decl(RecordTag::Struct, "s")?;
    let incomplete = b.declared_type(first);
    let again = b.record_forward_decl(RecordTag::Struct, "s")?;
    assert_eq!(first, again);
    assert_eq!(
        b.record_forward_decl(RecordTag::Union, "s").map(|_| ()),
        Err(BuildError::Redefinition { name: "s".to_owned() })
    );

    // A full declaration completes the forward one.
    let defined = b.struct_decl("s", &[("a", RawType::INT)])?;
    assert_eq!(defined, first);
    assert_eq!(
        b.define_record(first, &[]),
        Err(BuildError::Redefinition { name: "s".to_owned() })
    );
    assert_eq!(
        b.struct_decl("s", &[]).map(|_| ()),
        Err(BuildError::Redefinition { name: "s".to_owned() })
    );

    let var = b.var_decl("v", RawType::INT)?;
    assert_eq!(
        b.define_record(var, &[]),
        Err(BuildError::NotRecord { cursor: var.raw() })
    );

    let unit = b.finish();
    assert_eq!(unit.children(first).len(), 1);
    assert!(unit.types().flags(incomplete).is_pod());
    Ok(())
}
