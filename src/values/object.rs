use crate::{errors::errors::ValueError, types::types::Type};

use super::value::Value;

/// An object occupies a region of storage and holds a value.
///
/// The first write goes through [`Object::initialize`]; every later write is
/// a [`Object::store`]. Neither checks the value against the object's type.
#[derive(Debug, Clone)]
pub struct Object {
    ty: Type,
    value: Value,
}

impl Object {
    /// Constructs the object with indeterminate value.
    pub fn new(ty: Type) -> Self {
        Object {
            ty,
            value: Value::Indeterminate,
        }
    }

    pub fn with_value(ty: Type, value: Value) -> Self {
        Object { ty, value }
    }

    pub fn get_type(&self) -> &Type {
        &self.ty
    }

    pub fn is_initialized(&self) -> bool {
        !self.value.is_indeterminate()
    }

    pub fn is_uninitialized(&self) -> bool {
        self.value.is_indeterminate()
    }

    /// Returns the current value, which may be indeterminate.
    pub fn load(&self) -> &Value {
        &self.value
    }

    /// Performs the initial store of the object. The value must be
    /// determinate.
    pub fn initialize(&mut self, value: Value) -> Result<(), ValueError> {
        if value.is_indeterminate() {
            return Err(ValueError::IndeterminateInitializer);
        }
        if self.is_initialized() {
            return Err(ValueError::DoubleInitialize {
                found: self.value.get_kind(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Replaces the value of an initialized object.
    pub fn store(&mut self, value: Value) -> Result<(), ValueError> {
        if self.is_uninitialized() {
            return Err(ValueError::StoreBeforeInitialize);
        }
        self.value = value;
        Ok(())
    }
}
