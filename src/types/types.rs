//! Type representation and the interning type context.

use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    rc::Rc,
};

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::trace;

lazy_static! {
    /// Spellings of the primitive types, used by the parser to resolve type names.
    pub static ref PRIMITIVE_LOOKUP: HashMap<&'static str, PrimitiveType> = {
        let mut map = HashMap::new();
        map.insert("bool", PrimitiveType::Bool);
        map.insert("int", PrimitiveType::Int);
        map.insert("float", PrimitiveType::Float);
        map
    };
}

/// The types without substructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int,
    Float,
}

/// The shape of a type.
///
/// Child types are themselves interned handles, so comparing two kinds only
/// walks as deep as the first pair of distinct handles.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    Int,
    Float,
    /// `ref t`, where `t` is always an object type.
    Reference(Type),
    /// `(t1, t2, ..., tn) -> r`
    Function(FunctionType),
}

/// Parameter and return types of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub return_type: Type,
}

impl FunctionType {
    pub fn get_num_parameters(&self) -> usize {
        self.parameters.len()
    }
}

/// A shared handle to an immutable type.
///
/// Handles are minted by [`TypeContext`]; two handles for structurally equal
/// types produced by the same context point at the same allocation.
#[derive(Clone)]
pub struct Type(Rc<TypeKind>);

impl Type {
    pub(crate) fn new(kind: TypeKind) -> Self {
        Type(Rc::new(kind))
    }

    pub fn kind(&self) -> &TypeKind {
        &self.0
    }

    pub fn get_kind_name(&self) -> &'static str {
        match self.kind() {
            TypeKind::Bool => "bool_type",
            TypeKind::Int => "int_type",
            TypeKind::Float => "float_type",
            TypeKind::Reference(_) => "ref_type",
            TypeKind::Function(_) => "fn_type",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.kind(), TypeKind::Bool)
    }

    pub fn is_int(&self) -> bool {
        matches!(self.kind(), TypeKind::Int)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.kind(), TypeKind::Float)
    }

    /// `int` or `float`. `bool` is not arithmetic.
    pub fn is_arithmetic(&self) -> bool {
        self.is_int() || self.is_float()
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.kind(), TypeKind::Reference(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind(), TypeKind::Function(_))
    }

    /// Every type that is not a reference denotes an object.
    pub fn is_object(&self) -> bool {
        !self.is_reference()
    }

    /// Structural equality.
    pub fn is_same_as(&self, that: &Type) -> bool {
        is_same(self, that)
    }

    /// True if this is `ref t` for some `t` that is the same as `that`.
    pub fn is_reference_to(&self, that: &Type) -> bool {
        match self.kind() {
            TypeKind::Reference(object) => is_same(object, that),
            _ => false,
        }
    }

    /// The referenced object type of `ref t`.
    pub fn get_object_type(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::Reference(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self.kind() {
            TypeKind::Function(function) => Some(function),
            _ => None,
        }
    }

    /// The immediate child types, parameters before the return type.
    pub fn get_children(&self) -> Vec<Type> {
        match self.kind() {
            TypeKind::Bool | TypeKind::Int | TypeKind::Float => vec![],
            TypeKind::Reference(object) => vec![object.clone()],
            TypeKind::Function(function) => {
                let mut children = function.parameters.clone();
                children.push(function.return_type.clone());
                children
            }
        }
    }
}

/// Returns true if `a` and `b` are the same type.
pub fn is_same(a: &Type, b: &Type) -> bool {
    if Rc::ptr_eq(&a.0, &b.0) {
        return true;
    }

    match (a.kind(), b.kind()) {
        (TypeKind::Bool, TypeKind::Bool)
        | (TypeKind::Int, TypeKind::Int)
        | (TypeKind::Float, TypeKind::Float) => true,
        (TypeKind::Reference(x), TypeKind::Reference(y)) => is_same(x, y),
        (TypeKind::Function(f), TypeKind::Function(g)) => {
            f.parameters.len() == g.parameters.len()
                && f
                    .parameters
                    .iter()
                    .zip(g.parameters.iter())
                    .all(|(x, y)| is_same(x, y))
                && is_same(&f.return_type, &g.return_type)
        }
        _ => false,
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        is_same(self, other)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Bool => write!(f, "bool"),
            TypeKind::Int => write!(f, "int"),
            TypeKind::Float => write!(f, "float"),
            TypeKind::Reference(object) => write!(f, "ref {}", object),
            TypeKind::Function(function) => {
                write!(f, "(")?;
                for (idx, parameter) in function.parameters.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, ")->{}", function.return_type)
            }
        }
    }
}

impl Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self)
    }
}

/// Owns every type of a compilation unit.
///
/// Structurally equal requests return the same handle, which makes
/// [`is_same`] a pointer comparison for types built here.
#[derive(Debug)]
pub struct TypeContext {
    bool_type: Type,
    int_type: Type,
    float_type: Type,
    interned: FxHashMap<TypeKind, Type>,
}

impl TypeContext {
    pub fn new() -> Self {
        let mut context = TypeContext {
            bool_type: Type::new(TypeKind::Bool),
            int_type: Type::new(TypeKind::Int),
            float_type: Type::new(TypeKind::Float),
            interned: FxHashMap::default(),
        };

        for primitive in [
            context.bool_type.clone(),
            context.int_type.clone(),
            context.float_type.clone(),
        ] {
            context.interned.insert(Self::key_of(&primitive), primitive);
        }

        context
    }

    /// Returns the type `bool`.
    pub fn get_bool_type(&self) -> Type {
        self.bool_type.clone()
    }

    /// Returns the type `int`.
    pub fn get_int_type(&self) -> Type {
        self.int_type.clone()
    }

    /// Returns the type `float`.
    pub fn get_float_type(&self) -> Type {
        self.float_type.clone()
    }

    pub fn get_primitive_type(&self, primitive: PrimitiveType) -> Type {
        match primitive {
            PrimitiveType::Bool => self.get_bool_type(),
            PrimitiveType::Int => self.get_int_type(),
            PrimitiveType::Float => self.get_float_type(),
        }
    }

    /// Resolves a primitive type by its spelling.
    pub fn get_named_type(&self, name: &str) -> Option<Type> {
        PRIMITIVE_LOOKUP
            .get(name)
            .map(|primitive| self.get_primitive_type(*primitive))
    }

    /// Returns the type `ref t`.
    ///
    /// References to references are never formed: when `t` is already a
    /// reference type it is returned unchanged.
    pub fn get_reference_type(&mut self, t: &Type) -> Type {
        if t.is_reference() {
            return t.clone();
        }
        self.intern(TypeKind::Reference(t.clone()))
    }

    /// Returns the type `(t1, t2, ..., tn) -> r`.
    pub fn get_function_type(&mut self, parameters: Vec<Type>, return_type: Type) -> Type {
        self.intern(TypeKind::Function(FunctionType {
            parameters,
            return_type,
        }))
    }

    /// Number of distinct types created so far, primitives included.
    pub fn len(&self) -> usize {
        self.interned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interned.is_empty()
    }

    fn intern(&mut self, kind: TypeKind) -> Type {
        if let Some(existing) = self.interned.get(&kind) {
            return existing.clone();
        }

        let ty = Type::new(kind);
        trace!(ty = %ty, "interned type");
        self.interned.insert(Self::key_of(&ty), ty.clone());
        ty
    }

    fn key_of(ty: &Type) -> TypeKind {
        match ty.kind() {
            TypeKind::Bool => TypeKind::Bool,
            TypeKind::Int => TypeKind::Int,
            TypeKind::Float => TypeKind::Float,
            TypeKind::Reference(object) => TypeKind::Reference(object.clone()),
            TypeKind::Function(function) => TypeKind::Function(function.clone()),
        }
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
