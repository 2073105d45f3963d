//! Unit tests for values and objects.

use crate::{
    ast::ast::DeclId,
    errors::errors::ValueError,
    types::types::TypeContext,
    values::{
        object::Object,
        value::{Address, Value, ValueKind},
    },
};

#[test]
fn test_default_is_indeterminate() {
    assert!(Value::default().is_indeterminate());
    assert_eq!(Value::default().get_kind(), ValueKind::Indeterminate);
}

#[test]
fn test_booleans_are_integers() {
    assert_eq!(Value::from(true), Value::Int(1));
    assert_eq!(Value::from(false).get_int(), Ok(0));
}

#[test]
fn test_read_active_variant() {
    assert_eq!(Value::from(42i64).get_int(), Ok(42));
    assert_eq!(Value::from(0.5f64).get_float(), Ok(0.5));
    assert_eq!(Value::Function(DeclId(2)).get_function(), Ok(DeclId(2)));

    let address = Address::new_automatic(1, DeclId(4));
    assert_eq!(Value::from(address).get_address(), Ok(&address));
}

#[test]
fn test_read_wrong_variant() {
    assert_eq!(
        Value::Int(1).get_float(),
        Err(ValueError::ReadWrongVariant {
            expected: ValueKind::Float,
            found: ValueKind::Int,
        })
    );
    assert_eq!(
        Value::Indeterminate.get_int(),
        Err(ValueError::ReadWrongVariant {
            expected: ValueKind::Int,
            found: ValueKind::Indeterminate,
        })
    );
}

#[test]
fn test_address_identity() {
    let a = Address::new_automatic(2, DeclId(1));
    let b = Address::new_automatic(2, DeclId(3));
    assert_ne!(a, b);
    assert_eq!(a, Address::new_automatic(2, DeclId(1)));
    assert!(Address::new_static(DeclId(1)).is_static());
    assert!(!a.is_static());
}

#[test]
fn test_display() {
    assert_eq!(Value::Indeterminate.to_string(), "<indeterminate>");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Function(DeclId(3)).to_string(), "<function d3>");
    assert_eq!(Value::from(Address::new_static(DeclId(1))).to_string(), "<static d1>");
    assert_eq!(
        Value::from(Address::new_automatic(2, DeclId(1))).to_string(),
        "<auto(2) d1>"
    );
}

#[test]
fn test_object_initialize_once() {
    let types = TypeContext::new();
    let mut object = Object::new(types.get_int_type());
    assert!(object.is_uninitialized());
    assert!(object.load().is_indeterminate());

    object.initialize(Value::Int(1)).unwrap();
    assert!(object.is_initialized());
    assert_eq!(
        object.initialize(Value::Int(2)),
        Err(ValueError::DoubleInitialize {
            found: ValueKind::Int,
        })
    );
    assert_eq!(object.load(), &Value::Int(1));
}

#[test]
fn test_object_store_after_initialize() {
    let types = TypeContext::new();
    let mut object = Object::new(types.get_float_type());
    assert_eq!(
        object.store(Value::Float(1.0)),
        Err(ValueError::StoreBeforeInitialize)
    );

    object.initialize(Value::Float(1.0)).unwrap();
    object.store(Value::Float(2.0)).unwrap();
    assert_eq!(object.load(), &Value::Float(2.0));
}

#[test]
fn test_object_with_value() {
    let types = TypeContext::new();
    let object = Object::with_value(types.get_bool_type(), Value::from(true));
    assert!(object.is_initialized());
    assert!(object.get_type().is_bool());
}

#[test]
fn test_object_rejects_indeterminate_initializer() {
    let types = TypeContext::new();
    let mut object = Object::new(types.get_int_type());

    assert_eq!(
        object.initialize(Value::Indeterminate),
        Err(ValueError::IndeterminateInitializer)
    );
    assert!(object.is_uninitialized());

    object.initialize(Value::Int(7)).unwrap();
    assert_eq!(
        object.initialize(Value::Int(8)),
        Err(ValueError::DoubleInitialize {
            found: ValueKind::Int,
        })
    );
    assert_eq!(object.load(), &Value::Int(7));
}
