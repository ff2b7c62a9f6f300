use std::error::Error;

use cx_ir::{BuildError, RawType, TranslationUnit, TranslationUnitBuilder};
use pretty_assertions::assert_eq;

use super::*;

fn unit_with_function(params: &[RawType], variadic: bool) -> Result<(TranslationUnit, RawType), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let func = b.function_proto(RawType::VOID, params, variadic)?;
    Ok((b.finish(), func))
}

#[test]
fn length_excludes_variadic_tail() -> Result<(), BuildError> {
    let (unit, func) = unit_with_function(&[RawType::INT], true)?;
    let args = ArgumentsList::new(wrap(func, &unit));

    assert_eq!(args.map(|a| a.len()), Ok(1));
    Ok(())
}

#[test]
fn get_and_lookup_agree() -> Result<(), Box<dyn Error>> {
    let (unit, func) = unit_with_function(&[RawType::INT, RawType::LONG], false)?;
    let args = ArgumentsList::new(wrap(func, &unit))?;

    assert_eq!(args.get(1).map(Type::kind), Ok(TypeKind::Long));
    assert_eq!(args.lookup(1_i64), args.get(1));
    assert_eq!(args.lookup(0_usize), args.get(0));
    assert_eq!(args.function_type(), wrap(func, &unit));
    Ok(())
}

#[test]
fn bounds_and_key_errors() -> Result<(), Box<dyn Error>> {
    let (unit, func) = unit_with_function(&[RawType::INT], false)?;
    let args = ArgumentsList::new(wrap(func, &unit))?;

    assert_eq!(args.get(1), Err(TypeError::OutOfBounds { index: 1, len: 1 }));
    assert_eq!(args.lookup(-1_i64), Err(TypeError::OutOfBounds { index: -1, len: 1 }));
    assert_eq!(
        args.lookup(i64::MIN),
        Err(TypeError::OutOfBounds { index: i64::MIN, len: 1 })
    );
    assert!(args.lookup("foo").is_err_and(|e| e.is_invalid_key()));
    assert!(!args.lookup("0").is_err_and(|e| e.is_out_of_bounds()));
    Ok(())
}

#[test]
fn empty_prototype() -> Result<(), Box<dyn Error>> {
    let (unit, func) = unit_with_function(&[], false)?;
    let args = ArgumentsList::new(wrap(func, &unit))?;

    assert!(args.is_empty());
    assert_eq!(args.iter().next(), None);
    assert!(args.get(0).is_err_and(|e| e.is_out_of_bounds()));
    Ok(())
}

#[test]
fn iteration_is_exact_and_restartable() -> Result<(), Box<dyn Error>> {
    let (unit, func) = unit_with_function(&[RawType::INT, RawType::DOUBLE, RawType::CHAR_S], false)?;
    let args = ArgumentsList::new(wrap(func, &unit))?;

    let mut iter = args.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);

    let kinds: Vec<TypeKind> = args.iter().map(Type::kind).collect();
    assert_eq!(kinds, vec![TypeKind::Int, TypeKind::Double, TypeKind::CharS]);

    let by_index: Vec<Type<'_>> = (0..args.len()).filter_map(|i| args.get(i).ok()).collect();
    let by_iter: Vec<Type<'_>> = args.into_iter().collect();
    assert_eq!(by_iter, by_index);
    Ok(())
}

#[test]
fn rejects_non_prototypes() -> Result<(), BuildError> {
    let mut b = TranslationUnitBuilder::new("t.c");
    let no_proto = b.function_no_proto(RawType::INT)?;
    let unit = b.finish();

    assert_eq!(
        ArgumentsList::new(wrap(no_proto, &unit)),
        Err(TypeError::InvalidUse {
            operation: "argument_types",
            kind: TypeKind::FunctionNoProto,
        })
    );
    assert!(ArgumentsList::new(wrap(RawType::INT, &unit)).is_err_and(|e| e.is_invalid_use()));
    Ok(())
}
