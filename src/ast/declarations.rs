use crate::types::types::{FunctionType, Type};

use super::ast::{DeclId, ExprId, StmtId};

/// How a variable is bound when its activation is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    /// A fresh object initialized with the value of the expression.
    Copy(ExprId),
    /// An alias for the object the expression designates.
    Reference(ExprId),
}

impl Initializer {
    pub fn get_expr(&self) -> ExprId {
        match self {
            Initializer::Copy(expr) | Initializer::Reference(expr) => *expr,
        }
    }
}

/// An object or reference declaration.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: String,
    pub ty: Type,
    pub initializer: Option<Initializer>,
}

/// A declaration of the form `fun x (<decl-seq>) -> t s`.
///
/// Parameters, the return object and every local contribute to the layout of
/// the function's frame.
#[derive(Debug, Clone)]
pub struct FnDecl {
    pub name: String,
    pub ty: Type,
    pub parameters: Vec<DeclId>,
    pub return_decl: Option<DeclId>,
    pub body: Option<StmtId>,
}

impl FnDecl {
    pub fn get_function_type(&self) -> Option<&FunctionType> {
        self.ty.as_function()
    }

    pub fn get_num_parameters(&self) -> usize {
        self.get_function_type()
            .map(|function| function.get_num_parameters())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub enum Decl {
    /// A program is a list of declarations.
    Program(Vec<DeclId>),
    Variable(VarDecl),
    Function(FnDecl),
}

impl Decl {
    pub fn get_kind_name(&self) -> &'static str {
        match self {
            Decl::Program(_) => "prog_decl",
            Decl::Variable(_) => "var_decl",
            Decl::Function(_) => "fn_decl",
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        match self {
            Decl::Program(_) => None,
            Decl::Variable(var) => Some(&var.name),
            Decl::Function(function) => Some(&function.name),
        }
    }

    pub fn get_type(&self) -> Option<&Type> {
        match self {
            Decl::Program(_) => None,
            Decl::Variable(var) => Some(&var.ty),
            Decl::Function(function) => Some(&function.ty),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Decl::Variable(_))
    }

    /// A variable of object type.
    pub fn is_object(&self) -> bool {
        matches!(self, Decl::Variable(var) if var.ty.is_object())
    }

    /// A variable of reference type.
    pub fn is_reference(&self) -> bool {
        matches!(self, Decl::Variable(var) if var.ty.is_reference())
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Decl::Function(_))
    }

    pub fn as_variable(&self) -> Option<&VarDecl> {
        match self {
            Decl::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FnDecl> {
        match self {
            Decl::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Nested declarations: a program's members, or a function's parameters
    /// followed by its return object.
    pub fn get_children(&self) -> Vec<DeclId> {
        match self {
            Decl::Program(decls) => decls.clone(),
            Decl::Variable(_) => vec![],
            Decl::Function(function) => {
                let mut children = function.parameters.clone();
                children.extend(function.return_decl);
                children
            }
        }
    }
}
