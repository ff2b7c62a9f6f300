use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn codes_match_code_table() {
    assert_eq!(TypeKind::Invalid.code(), 0);
    assert_eq!(TypeKind::Int.code(), 17);
    assert_eq!(TypeKind::ObjCSel.code(), 29);
    assert_eq!(TypeKind::Complex.code(), 100);
    assert_eq!(TypeKind::ConstantArray.code(), 112);
    assert_eq!(TypeKind::MemberPointer.code(), 117);
}

#[test]
fn all_is_in_code_order_and_complete() {
    let codes: Vec<u32> = TypeKind::ALL.iter().map(|k| k.code()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);

    for code in 0..200 {
        if let Some(kind) = TypeKind::lookup(code) {
            assert!(TypeKind::ALL.contains(&kind), "{kind} missing from ALL");
        }
    }
}

#[test]
fn unknown_codes_are_invalid() {
    assert_eq!(TypeKind::from_code(30), TypeKind::Invalid);
    assert_eq!(TypeKind::from_code(99), TypeKind::Invalid);
    assert_eq!(TypeKind::from_code(118), TypeKind::Invalid);
    assert_eq!(TypeKind::from_code(u32::MAX), TypeKind::Invalid);
    assert_eq!(TypeKind::lookup(u32::MAX), None);
}

#[test]
fn spellings() {
    assert_eq!(TypeKind::ConstantArray.to_string(), "ConstantArray");
    assert_eq!(TypeKind::CharS.spelling(), "Char_S");
    assert_eq!(TypeKind::LValueReference.spelling(), "LValueReference");
}

#[test]
fn classifiers() {
    assert!(TypeKind::Int.is_builtin());
    assert!(TypeKind::ObjCSel.is_builtin());
    assert!(!TypeKind::Unexposed.is_builtin());
    assert!(!TypeKind::Pointer.is_builtin());

    assert!(TypeKind::MemberPointer.is_pointer_like());
    assert!(!TypeKind::ConstantArray.is_pointer_like());

    assert!(TypeKind::DependentSizedArray.is_array());
    assert!(!TypeKind::Vector.is_array());
    assert!(TypeKind::Vector.has_elements());
    assert!(TypeKind::Complex.has_elements());
    assert!(TypeKind::Vector.has_element_count());
    assert!(!TypeKind::IncompleteArray.has_element_count());

    assert!(TypeKind::FunctionNoProto.is_function());
    assert!(TypeKind::Typedef.has_declaration());
    assert!(!TypeKind::Pointer.has_declaration());
}

proptest! {
    #[test]
    fn from_code_is_total(code in any::<u32>()) {
        let kind = TypeKind::from_code(code);
        if kind != TypeKind::Invalid {
            prop_assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn code_round_trips(idx in 0..TypeKind::ALL.len()) {
        let kind = TypeKind::ALL[idx];
        prop_assert_eq!(TypeKind::from_code(kind.code()), kind);
    }
}
