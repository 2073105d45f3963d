use crate::{
    ast::{
        ast::{Ast, ExprId},
        expressions::{Expr, ExprKind},
    },
    types::types::{Type, TypeContext},
};

/// Performs semantic analysis while building the tree of one compilation
/// unit.
#[derive(Debug, Default)]
pub struct Builder {
    types: TypeContext,
    ast: Ast,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            types: TypeContext::new(),
            ast: Ast::new(),
        }
    }

    pub fn types(&self) -> &TypeContext {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeContext {
        &mut self.types
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub(crate) fn ast_mut(&mut self) -> &mut Ast {
        &mut self.ast
    }

    /// Finishes building, handing over the tree and its types.
    pub fn finish(self) -> (TypeContext, Ast) {
        (self.types, self.ast)
    }

    /// Returns the type `bool`.
    pub fn get_bool_type(&self) -> Type {
        self.types.get_bool_type()
    }

    /// Returns the type `int`.
    pub fn get_int_type(&self) -> Type {
        self.types.get_int_type()
    }

    /// Returns the type `float`.
    pub fn get_float_type(&self) -> Type {
        self.types.get_float_type()
    }

    /// Returns the type `ref t`, or `t` itself when it is already a
    /// reference type.
    pub fn get_reference_type(&mut self, t: &Type) -> Type {
        self.types.get_reference_type(t)
    }

    /// Returns the type `(t1, t2, ..., tn) -> r`.
    pub fn get_function_type(&mut self, parameters: Vec<Type>, return_type: Type) -> Type {
        self.types.get_function_type(parameters, return_type)
    }

    /// The static type of `e`.
    pub fn get_type(&self, e: ExprId) -> Type {
        self.ast.expr(e).get_type().clone()
    }

    pub(crate) fn push_expr(&mut self, kind: ExprKind, ty: Type) -> ExprId {
        self.ast.push_expr(Expr { kind, ty })
    }
}
