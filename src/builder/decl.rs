use tracing::debug;

use crate::{
    ast::{
        ast::{DeclId, ExprId, StmtId},
        declarations::{Decl, FnDecl, Initializer, VarDecl},
    },
    errors::errors::{BindingError, Error, TypeCategory, TypeError},
    types::types::Type,
};

use super::builder::Builder;

impl Builder {
    /// Returns a new object or reference definition.
    pub fn make_variable(&mut self, name: &str, ty: Type) -> DeclId {
        self.ast_mut().push_decl(Decl::Variable(VarDecl {
            name: name.to_string(),
            ty,
            initializer: None,
        }))
    }

    /// Returns a new function definition. Parameters, the return object and
    /// the body are attached afterwards.
    pub fn make_function(&mut self, name: &str, ty: Type) -> Result<DeclId, Error> {
        if !ty.is_function() {
            return Err(TypeError::NotFunction {
                category: TypeCategory::of(&ty),
                found: ty,
            }
            .into());
        }

        Ok(self.ast_mut().push_decl(Decl::Function(FnDecl {
            name: name.to_string(),
            ty,
            parameters: vec![],
            return_decl: None,
            body: None,
        })))
    }

    /// Attaches the parameter declarations of `function`. There must be one
    /// per parameter type, each declared with that type.
    pub fn set_parameters(&mut self, function: DeclId, parameters: Vec<DeclId>) -> Result<(), Error> {
        let expected = self.function_type(function)?.0;
        if expected.len() != parameters.len() {
            return Err(TypeError::ArityMismatch {
                expected: expected.len(),
                received: parameters.len(),
            }
            .into());
        }

        for (ty, parameter) in expected.iter().zip(parameters.iter()) {
            let found = self.variable_type(*parameter)?;
            if !found.is_same_as(ty) {
                return Err(TypeError::OperandTypeMismatch {
                    expected: ty.clone(),
                    found,
                }
                .into());
            }
        }

        self.function_mut(function)?.parameters = parameters;
        Ok(())
    }

    /// Attaches the return object of `function`, which must be declared with
    /// the function's return type.
    pub fn set_return(&mut self, function: DeclId, decl: DeclId) -> Result<(), Error> {
        let expected = self.function_type(function)?.1;
        let found = self.variable_type(decl)?;
        if !found.is_same_as(&expected) {
            return Err(TypeError::OperandTypeMismatch { expected, found }.into());
        }

        self.function_mut(function)?.return_decl = Some(decl);
        Ok(())
    }

    pub fn set_body(&mut self, function: DeclId, body: StmtId) -> Result<(), Error> {
        self.function_mut(function)?.body = Some(body);
        Ok(())
    }

    /// Returns a program holding `decls`.
    pub fn make_program(&mut self, decls: Vec<DeclId>) -> DeclId {
        self.ast_mut().push_decl(Decl::Program(decls))
    }

    /// Initializes the object `decl` with a copy of the value of `e`.
    /// Returns the converted initializer.
    pub fn copy_initialize(&mut self, decl: DeclId, e: ExprId) -> Result<ExprId, Error> {
        let ty = self.uninitialized_variable_type(decl)?;
        if !ty.is_object() {
            return Err(BindingError::InvalidDeclaration {
                decl,
                expected: "an object",
            }
            .into());
        }

        let e = self.require_value_of(e, &ty)?;
        self.set_initializer(decl, Initializer::Copy(e))?;
        Ok(e)
    }

    /// Binds the reference `decl` to the object designated by `e`.
    pub fn reference_initialize(&mut self, decl: DeclId, e: ExprId) -> Result<ExprId, Error> {
        let ty = self.uninitialized_variable_type(decl)?;
        let Some(object) = ty.get_object_type() else {
            return Err(BindingError::InvalidDeclaration {
                decl,
                expected: "a reference",
            }
            .into());
        };

        let e = self.require_reference_to(e, object)?;
        self.set_initializer(decl, Initializer::Reference(e))?;
        Ok(e)
    }

    /// Initializes `decl` from `e`, by reference or by copy according to the
    /// declared type.
    pub fn initialize(&mut self, decl: DeclId, e: ExprId) -> Result<ExprId, Error> {
        if self.variable_type(decl)?.is_reference() {
            self.reference_initialize(decl, e)
        } else {
            self.copy_initialize(decl, e)
        }
    }

    /// Checks `e` as an initializer for `decl` without recording it.
    pub(crate) fn check_initializer(&mut self, decl: DeclId, e: ExprId) -> Result<Initializer, Error> {
        let ty = self.variable_type(decl)?;
        let e = self.require_type(e, &ty)?;
        if ty.is_reference() {
            Ok(Initializer::Reference(e))
        } else {
            Ok(Initializer::Copy(e))
        }
    }

    fn variable_type(&self, decl: DeclId) -> Result<Type, BindingError> {
        match self.ast().decl(decl) {
            Decl::Variable(var) => Ok(var.ty.clone()),
            _ => Err(BindingError::InvalidDeclaration {
                decl,
                expected: "a variable",
            }),
        }
    }

    fn uninitialized_variable_type(&self, decl: DeclId) -> Result<Type, BindingError> {
        match self.ast().decl(decl) {
            Decl::Variable(var) if var.initializer.is_some() => {
                Err(BindingError::InitializerAlreadySet { decl })
            }
            _ => self.variable_type(decl),
        }
    }

    fn set_initializer(&mut self, decl: DeclId, initializer: Initializer) -> Result<(), BindingError> {
        match self.ast_mut().decl_mut(decl) {
            Decl::Variable(var) => {
                debug!(%decl, ?initializer, "initialize");
                var.initializer = Some(initializer);
                Ok(())
            }
            _ => Err(BindingError::InvalidDeclaration {
                decl,
                expected: "a variable",
            }),
        }
    }

    fn function_type(&self, function: DeclId) -> Result<(Vec<Type>, Type), BindingError> {
        self.ast()
            .decl(function)
            .as_function()
            .and_then(|declaration| declaration.get_function_type())
            .map(|ty| (ty.parameters.clone(), ty.return_type.clone()))
            .ok_or(BindingError::InvalidDeclaration {
                decl: function,
                expected: "a function",
            })
    }

    fn function_mut(&mut self, function: DeclId) -> Result<&mut FnDecl, BindingError> {
        match self.ast_mut().decl_mut(function) {
            Decl::Function(declaration) => Ok(declaration),
            _ => Err(BindingError::InvalidDeclaration {
                decl: function,
                expected: "a function",
            }),
        }
    }
}
