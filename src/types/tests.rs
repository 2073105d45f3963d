//! Unit tests for the type system.
//!
//! This module contains tests for type construction, interning, the kind
//! predicates, and structural equality.

use super::types::{is_same, FunctionType, PrimitiveType, Type, TypeContext, TypeKind};

#[test]
fn test_primitive_predicates() {
    let types = TypeContext::new();

    let b = types.get_bool_type();
    assert!(b.is_bool());
    assert!(b.is_object());
    assert!(!b.is_arithmetic());

    let i = types.get_int_type();
    assert!(i.is_int());
    assert!(i.is_arithmetic());
    assert!(!i.is_reference());

    let f = types.get_float_type();
    assert!(f.is_float());
    assert!(f.is_arithmetic());
    assert!(!f.is_function());
}

#[test]
fn test_reference_predicates() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let r = types.get_reference_type(&int);

    assert!(r.is_reference());
    assert!(!r.is_object());
    assert!(!r.is_arithmetic());
    assert!(r.is_reference_to(&int));
    assert!(!r.is_reference_to(&types.get_float_type()));
    assert!(!int.is_reference_to(&int));
    assert_eq!(r.get_object_type(), Some(&int));
}

#[test]
fn test_is_same_is_reflexive() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let float = types.get_float_type();
    let r = types.get_reference_type(&int);
    let f = types.get_function_type(vec![int.clone(), r.clone()], float.clone());

    for t in [types.get_bool_type(), int, float, r, f] {
        assert!(is_same(&t, &t));
    }
}

#[test]
fn test_reference_equality() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let r1 = types.get_reference_type(&int);
    let r2 = types.get_reference_type(&int);

    assert!(is_same(&r1, &r2));
    assert!(!is_same(&r1, &int));
    assert!(!is_same(&int, &r1));
}

#[test]
fn test_reference_to_reference_is_not_formed() {
    let mut types = TypeContext::new();
    let float = types.get_float_type();
    let r = types.get_reference_type(&float);
    let before = types.len();

    let rr = types.get_reference_type(&r);
    assert!(is_same(&rr, &r));
    assert!(rr.is_reference_to(&float));
    assert_eq!(types.len(), before);
    assert_eq!(rr.to_string(), "ref float");
}

#[test]
fn test_interning_shares_handles() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let before = types.len();

    let f1 = types.get_function_type(vec![int.clone()], types.get_bool_type());
    let f2 = types.get_function_type(vec![int.clone()], types.get_bool_type());

    assert_eq!(types.len(), before + 1);
    assert!(f1.is_same_as(&f2));
}

#[test]
fn test_structural_equality_without_interning() {
    // Handles built outside a context still compare structurally.
    let a = Type::new(TypeKind::Reference(Type::new(TypeKind::Int)));
    let b = Type::new(TypeKind::Reference(Type::new(TypeKind::Int)));
    let c = Type::new(TypeKind::Reference(Type::new(TypeKind::Float)));

    assert!(is_same(&a, &b));
    assert!(!is_same(&a, &c));
}

#[test]
fn test_function_type_equality() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let float = types.get_float_type();
    let b = types.get_bool_type();

    let f = types.get_function_type(vec![int.clone(), float.clone()], b.clone());
    let same = Type::new(TypeKind::Function(FunctionType {
        parameters: vec![int.clone(), float.clone()],
        return_type: b.clone(),
    }));
    let swapped = types.get_function_type(vec![float.clone(), int.clone()], b.clone());
    let shorter = types.get_function_type(vec![int.clone()], b.clone());
    let other_return = types.get_function_type(vec![int.clone(), float.clone()], int.clone());

    assert!(is_same(&f, &same));
    assert!(!is_same(&f, &swapped));
    assert!(!is_same(&f, &shorter));
    assert!(!is_same(&f, &other_return));
    assert_eq!(f.as_function().map(|f| f.get_num_parameters()), Some(2));
}

#[test]
fn test_named_types() {
    let types = TypeContext::new();

    assert_eq!(types.get_named_type("int"), Some(types.get_int_type()));
    assert_eq!(types.get_named_type("bool"), Some(types.get_bool_type()));
    assert_eq!(
        types.get_named_type("float"),
        Some(types.get_primitive_type(PrimitiveType::Float))
    );
    assert_eq!(types.get_named_type("string"), None);
}

#[test]
fn test_display() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let r = types.get_reference_type(&int);
    let f = types.get_function_type(vec![int.clone(), r.clone()], types.get_bool_type());

    assert_eq!(int.to_string(), "int");
    assert_eq!(r.to_string(), "ref int");
    assert_eq!(f.to_string(), "(int,ref int)->bool");
    assert_eq!(f.get_kind_name(), "fn_type");
}

#[test]
fn test_children() {
    let mut types = TypeContext::new();
    let int = types.get_int_type();
    let b = types.get_bool_type();
    let f = types.get_function_type(vec![int.clone()], b.clone());

    assert!(int.get_children().is_empty());
    assert_eq!(f.get_children(), vec![int.clone(), b]);
}
