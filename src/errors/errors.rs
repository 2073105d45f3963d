use std::fmt::{self, Display};

use thiserror::Error;

use crate::{
    ast::ast::DeclId,
    storage::store::ObjectHandle,
    types::types::Type,
    values::value::ValueKind,
};

/// The category a mismatched operand was found to belong to.
///
/// Rules that expect a category report the first match of: reference,
/// boolean, arithmetic, and anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Reference,
    Boolean,
    Arithmetic,
    Other,
}

impl TypeCategory {
    pub fn of(ty: &Type) -> Self {
        if ty.is_reference() {
            TypeCategory::Reference
        } else if ty.is_bool() {
            TypeCategory::Boolean
        } else if ty.is_arithmetic() {
            TypeCategory::Arithmetic
        } else {
            TypeCategory::Other
        }
    }
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Reference => write!(f, "reference"),
            TypeCategory::Boolean => write!(f, "boolean"),
            TypeCategory::Arithmetic => write!(f, "arithmetic"),
            TypeCategory::Other => write!(f, "object"),
        }
    }
}

/// Violations of the typing rules, produced by the builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("operand not boolean: found {category} `{found}`")]
    NotBoolean { found: Type, category: TypeCategory },
    #[error("operand not arithmetic: found {category} `{found}`")]
    NotArithmetic { found: Type, category: TypeCategory },
    #[error("operand not a function: found {category} `{found}`")]
    NotFunction { found: Type, category: TypeCategory },
    #[error("operands have different types: `{left}` and `{right}`")]
    NotSameType { left: Type, right: Type },
    #[error("expected a reference to `{expected}`, found `{found}`")]
    NotReferenceTo { expected: Type, found: Type },
    #[error("expected {expected} arguments, received {received}")]
    ArityMismatch { expected: usize, received: usize },
    #[error("types do not match: expected `{expected}`, found `{found}`")]
    OperandTypeMismatch { expected: Type, found: Type },
}

/// Misuse of declarations and storage. These indicate a defect in an
/// earlier phase rather than an error in the program being checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("declaration {decl} already has storage")]
    DuplicateAllocation { decl: DeclId },
    #[error("declaration {decl} has no storage")]
    UnboundDeclaration { decl: DeclId },
    #[error("cannot alias declaration {decl} to {target:?}")]
    InvalidAlias { decl: DeclId, target: ObjectHandle },
    #[error("reference {decl} cannot be bound to a computed value")]
    ReferenceToValue { decl: DeclId },
    #[error("object {handle:?} belongs to a destroyed activation")]
    DanglingObject { handle: ObjectHandle },
    #[error("pop from an empty call stack")]
    StackUnderflow,
    #[error("declaration {decl} is not {expected}")]
    InvalidDeclaration { decl: DeclId, expected: &'static str },
    #[error("declaration {decl} is already initialized")]
    InitializerAlreadySet { decl: DeclId },
}

/// Misuse of values and objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("read {expected} from a value holding {found}")]
    ReadWrongVariant { expected: ValueKind, found: ValueKind },
    #[error("object already initialized with {found} value")]
    DoubleInitialize { found: ValueKind },
    #[error("store to an uninitialized object")]
    StoreBeforeInitialize,
    #[error("initialize with an indeterminate value")]
    IndeterminateInitializer,
    #[error("read of an uninitialized object")]
    UninitializedRead,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Type(error) => match error {
                TypeError::NotBoolean { .. } => "NotBoolean",
                TypeError::NotArithmetic { .. } => "NotArithmetic",
                TypeError::NotFunction { .. } => "NotFunction",
                TypeError::NotSameType { .. } => "NotSameType",
                TypeError::NotReferenceTo { .. } => "NotReferenceTo",
                TypeError::ArityMismatch { .. } => "ArityMismatch",
                TypeError::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            },
            Error::Binding(error) => match error {
                BindingError::DuplicateAllocation { .. } => "DuplicateAllocation",
                BindingError::UnboundDeclaration { .. } => "UnboundDeclaration",
                BindingError::InvalidAlias { .. } => "InvalidAlias",
                BindingError::ReferenceToValue { .. } => "ReferenceToValue",
                BindingError::DanglingObject { .. } => "DanglingObject",
                BindingError::StackUnderflow => "StackUnderflow",
                BindingError::InvalidDeclaration { .. } => "InvalidDeclaration",
                BindingError::InitializerAlreadySet { .. } => "InitializerAlreadySet",
            },
            Error::Value(error) => match error {
                ValueError::ReadWrongVariant { .. } => "ReadWrongVariant",
                ValueError::DoubleInitialize { .. } => "DoubleInitialize",
                ValueError::StoreBeforeInitialize => "StoreBeforeInitialize",
                ValueError::IndeterminateInitializer => "IndeterminateInitializer",
                ValueError::UninitializedRead => "UninitializedRead",
            },
        }
    }

    /// Type errors are ordinary diagnostics; the rest are defects upstream.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Type(_))
    }
}
