//! Unit tests for stores, frames and the call stack.

use crate::{
    ast::ast::DeclId,
    builder::builder::Builder,
    errors::errors::{BindingError, Error, TypeError, ValueError},
    storage::{
        frame::{Argument, CallStack},
        store::{MonotonicStore, StoreId},
    },
    types::types::TypeContext,
    values::value::{Address, Value},
};

fn decl(n: usize) -> DeclId {
    DeclId(n)
}

fn local_store() -> MonotonicStore {
    MonotonicStore::new(StoreId {
        depth: Some(0),
        serial: 1,
    })
}

#[test]
fn test_allocate_and_locate() {
    let types = TypeContext::new();
    let mut store = local_store();

    let handle = store.allocate(decl(0), types.get_int_type()).unwrap();
    assert_eq!(store.locate(decl(0)), Ok(handle));
    assert!(store.object(handle).unwrap().is_uninitialized());
    assert!(store.object(handle).unwrap().get_type().is_int());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_duplicate_allocation() {
    let types = TypeContext::new();
    let mut store = local_store();

    store.allocate(decl(0), types.get_int_type()).unwrap();
    assert_eq!(
        store.allocate(decl(0), types.get_int_type()),
        Err(BindingError::DuplicateAllocation { decl: decl(0) })
    );
}

#[test]
fn test_locate_unbound() {
    let store = local_store();
    assert_eq!(
        store.locate(decl(3)),
        Err(BindingError::UnboundDeclaration { decl: decl(3) })
    );
}

#[test]
fn test_alias_names_same_object() {
    let types = TypeContext::new();
    let mut store = local_store();

    let handle = store.allocate(decl(0), types.get_int_type()).unwrap();
    store.alias(decl(1), handle).unwrap();

    assert_eq!(store.locate(decl(1)), Ok(handle));
    assert_eq!(store.len(), 1);
    assert_eq!(store.owner(handle), Ok(decl(0)));

    store.object_mut(handle).unwrap().initialize(Value::Int(7)).unwrap();
    let alias = store.locate(decl(1)).unwrap();
    assert_eq!(store.object(alias).unwrap().load(), &Value::Int(7));
}

#[test]
fn test_alias_rejects_foreign_object() {
    let types = TypeContext::new();
    let mut other = MonotonicStore::new(StoreId::STATIC);
    let mut store = local_store();

    let foreign = other.allocate(decl(0), types.get_int_type()).unwrap();
    assert_eq!(
        store.alias(decl(1), foreign),
        Err(BindingError::InvalidAlias {
            decl: decl(1),
            target: foreign,
        })
    );
    assert!(!store.contains(decl(1)));
}

#[test]
fn test_push_pop_restores_depth() {
    let mut stack = CallStack::new();
    assert!(stack.is_empty());

    stack.push(decl(0));
    stack.push(decl(1));
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.get_top().unwrap().get_depth(), 1);
    assert_eq!(stack.get_top().unwrap().get_caller(), Some(0));
    assert_eq!(stack.get_frame(0).unwrap().get_caller(), None);

    stack.pop().unwrap();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.get_top().unwrap().get_function(), decl(0));
    stack.pop().unwrap();
    assert_eq!(stack.pop(), Err(BindingError::StackUnderflow));
}

#[test]
fn test_popped_handle_is_dangling() {
    let types = TypeContext::new();
    let mut stack = CallStack::new();

    stack.push(decl(0));
    let handle = stack
        .get_top_mut()
        .unwrap()
        .allocate_local(decl(1), types.get_int_type())
        .unwrap();
    assert!(stack.is_live(handle));
    stack.pop().unwrap();

    // A new activation at the same depth must not revive the handle.
    stack.push(decl(0));
    stack
        .get_top_mut()
        .unwrap()
        .allocate_local(decl(1), types.get_int_type())
        .unwrap();
    assert!(!stack.is_live(handle));
    assert_eq!(
        stack.object(handle).map(|_| ()),
        Err(BindingError::DanglingObject { handle })
    );
}

#[test]
fn test_statics_and_addresses() {
    let types = TypeContext::new();
    let mut stack = CallStack::new();

    let global = stack.allocate_static(decl(0), types.get_int_type()).unwrap();
    stack.push(decl(5));
    let local = stack
        .get_top_mut()
        .unwrap()
        .allocate_local(decl(1), types.get_float_type())
        .unwrap();

    let global_address = stack.address_of(decl(0)).unwrap();
    let local_address = stack.address_of(decl(1)).unwrap();
    assert_eq!(global_address, Address::new_static(decl(0)));
    assert_eq!(local_address, Address::new_automatic(0, decl(1)));

    assert_eq!(stack.resolve(&global_address), Ok(global));
    assert_eq!(stack.resolve(&local_address), Ok(local));
}

#[test]
fn test_bind_reference_across_frames() {
    let types = TypeContext::new();
    let mut stack = CallStack::new();

    stack.push(decl(0));
    let outer = stack
        .get_top_mut()
        .unwrap()
        .allocate_local(decl(1), types.get_int_type())
        .unwrap();
    stack.object_mut(outer).unwrap().initialize(Value::Int(1)).unwrap();

    stack.push(decl(2));
    stack.bind_reference(decl(3), outer).unwrap();
    let inner = stack.locate(decl(3)).unwrap();
    assert_eq!(inner, outer);
    assert_eq!(stack.get_top().unwrap().get_locals().len(), 0);

    stack.object_mut(inner).unwrap().store(Value::Int(2)).unwrap();
    stack.pop().unwrap();
    assert_eq!(stack.object(outer).unwrap().load(), &Value::Int(2));
}

#[test]
fn test_bind_reference_to_dead_object() {
    let types = TypeContext::new();
    let mut stack = CallStack::new();

    stack.push(decl(0));
    let dead = stack
        .get_top_mut()
        .unwrap()
        .allocate_local(decl(1), types.get_int_type())
        .unwrap();
    stack.pop().unwrap();
    stack.push(decl(0));

    assert_eq!(
        stack.bind_reference(decl(2), dead),
        Err(BindingError::InvalidAlias {
            decl: decl(2),
            target: dead,
        })
    );
}

#[test]
fn test_invoke_binds_parameters() {
    let mut builder = Builder::new();
    let int = builder.get_int_type();
    let ref_int = builder.get_reference_type(&int);
    let ty = builder.get_function_type(vec![int.clone(), ref_int.clone()], int.clone());
    let f = builder.make_function("f", ty).unwrap();
    let a = builder.make_variable("a", int.clone());
    let r = builder.make_variable("r", ref_int);
    let result = builder.make_variable("result", int.clone());
    builder.set_parameters(f, vec![a, r]).unwrap();
    builder.set_return(f, result).unwrap();
    let g = builder.make_variable("g", int.clone());
    let (_, ast) = builder.finish();

    let mut stack = CallStack::new();
    let global = stack.allocate_static(g, int).unwrap();
    stack.object_mut(global).unwrap().initialize(Value::Int(10)).unwrap();

    let frame = stack
        .invoke(&ast, f, &[Argument::Value(Value::Int(4)), Argument::Object(global)])
        .unwrap();
    assert_eq!(frame.get_function(), f);
    assert_eq!(frame.get_locals().len(), 2);

    let a_object = stack.locate(a).unwrap();
    assert_eq!(stack.object(a_object).unwrap().load(), &Value::Int(4));
    assert_eq!(stack.locate(r), Ok(global));
    let result_object = stack.locate(result).unwrap();
    assert!(stack.object(result_object).unwrap().is_uninitialized());
}

#[test]
fn test_invoke_failure_leaves_stack_unchanged() {
    let mut builder = Builder::new();
    let int = builder.get_int_type();
    let ref_int = builder.get_reference_type(&int);
    let ty = builder.get_function_type(vec![ref_int.clone()], int);
    let f = builder.make_function("f", ty).unwrap();
    let r = builder.make_variable("r", ref_int);
    builder.set_parameters(f, vec![r]).unwrap();
    let (_, ast) = builder.finish();

    let mut stack = CallStack::new();
    assert!(matches!(
        stack.invoke(&ast, f, &[]),
        Err(Error::Type(TypeError::ArityMismatch { expected: 1, received: 0 }))
    ));
    assert!(matches!(
        stack.invoke(&ast, f, &[Argument::Value(Value::Int(1))]),
        Err(Error::Binding(BindingError::ReferenceToValue { .. }))
    ));
    assert!(stack.is_empty());
}

#[test]
fn test_frame_local_alias() {
    let types = TypeContext::new();
    let mut stack = CallStack::with_capacity(4);

    let frame = stack.push(decl(0));
    let handle = frame.allocate_local(decl(1), types.get_bool_type()).unwrap();
    frame.alias_local(decl(2), handle).unwrap();

    assert_eq!(frame.locate_local(decl(2)), Ok(handle));
    assert_eq!(frame.get_locals().len(), 1);
    assert_eq!(
        stack.address_of(decl(2)),
        Ok(Address::new_automatic(0, decl(1)))
    );
}

#[test]
fn test_invoke_rejects_uninitialized_source() {
    let mut builder = Builder::new();
    let int = builder.get_int_type();
    let ty = builder.get_function_type(vec![int.clone()], int.clone());
    let f = builder.make_function("f", ty).unwrap();
    let a = builder.make_variable("a", int.clone());
    builder.set_parameters(f, vec![a]).unwrap();
    let g = builder.make_variable("g", int.clone());
    let (_, ast) = builder.finish();

    let mut stack = CallStack::new();
    let global = stack.allocate_static(g, int).unwrap();

    assert!(matches!(
        stack.invoke(&ast, f, &[Argument::Object(global)]),
        Err(Error::Value(ValueError::UninitializedRead))
    ));
    assert!(matches!(
        stack.invoke(&ast, f, &[Argument::Value(Value::Indeterminate)]),
        Err(Error::Value(ValueError::IndeterminateInitializer))
    ));
    assert!(stack.is_empty());

    stack.object_mut(global).unwrap().initialize(Value::Int(3)).unwrap();
    stack.invoke(&ast, f, &[Argument::Object(global)]).unwrap();
    let parameter = stack.locate(a).unwrap();
    assert_eq!(stack.object(parameter).unwrap().load(), &Value::Int(3));
}

#[test]
fn test_handles_are_distinct_per_allocation() {
    let types = TypeContext::new();
    let mut store = local_store();

    let handles: Vec<_> = (0..64)
        .map(|n| store.allocate(decl(n), types.get_int_type()).unwrap())
        .collect();
    for (n, handle) in handles.iter().enumerate() {
        assert_eq!(store.owner(*handle), Ok(decl(n)));
    }
}
