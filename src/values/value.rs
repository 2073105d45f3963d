use std::fmt::{self, Display};

use crate::{ast::ast::DeclId, errors::errors::ValueError};

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Indeterminate,
    Int,
    Float,
    Function,
    Address,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Indeterminate => write!(f, "indeterminate"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Function => write!(f, "function"),
            ValueKind::Address => write!(f, "address"),
        }
    }
}

/// The location of an object.
///
/// `frame_depth` selects the automatic store of the frame at that depth, or
/// the static store when `None`. `def` is the declaration that allocated the
/// object and keys it within that store, which keeps objects of different
/// activations at the same depth apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub frame_depth: Option<u32>,
    pub def: DeclId,
}

impl Address {
    pub fn new_static(def: DeclId) -> Self {
        Address {
            frame_depth: None,
            def,
        }
    }

    pub fn new_automatic(frame_depth: u32, def: DeclId) -> Self {
        Address {
            frame_depth: Some(frame_depth),
            def,
        }
    }

    pub fn is_static(&self) -> bool {
        self.frame_depth.is_none()
    }
}

/// A value computed by an expression.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// No value has been written yet.
    #[default]
    Indeterminate,
    /// Integers and booleans.
    Int(i64),
    Float(f64),
    /// A function designated by its declaration.
    Function(DeclId),
    Address(Address),
}

impl Value {
    pub fn get_kind(&self) -> ValueKind {
        match self {
            Value::Indeterminate => ValueKind::Indeterminate,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Function(_) => ValueKind::Function,
            Value::Address(_) => ValueKind::Address,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Value::Indeterminate)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn is_address(&self) -> bool {
        matches!(self, Value::Address(_))
    }

    pub fn get_int(&self) -> Result<i64, ValueError> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(self.wrong_variant(ValueKind::Int)),
        }
    }

    pub fn get_float(&self) -> Result<f64, ValueError> {
        match self {
            Value::Float(n) => Ok(*n),
            _ => Err(self.wrong_variant(ValueKind::Float)),
        }
    }

    pub fn get_function(&self) -> Result<DeclId, ValueError> {
        match self {
            Value::Function(decl) => Ok(*decl),
            _ => Err(self.wrong_variant(ValueKind::Function)),
        }
    }

    pub fn get_address(&self) -> Result<&Address, ValueError> {
        match self {
            Value::Address(address) => Ok(address),
            _ => Err(self.wrong_variant(ValueKind::Address)),
        }
    }

    fn wrong_variant(&self, expected: ValueKind) -> ValueError {
        ValueError::ReadWrongVariant {
            expected,
            found: self.get_kind(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Int(b as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Address> for Value {
    fn from(address: Address) -> Self {
        Value::Address(address)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Indeterminate => write!(f, "<indeterminate>"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Function(decl) => write!(f, "<function {decl}>"),
            Value::Address(address) => match address.frame_depth {
                None => write!(f, "<static {}>", address.def),
                Some(depth) => write!(f, "<auto({}) {}>", depth, address.def),
            },
        }
    }
}
