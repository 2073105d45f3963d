use tracing::debug;

use crate::{
    ast::{
        ast::{Ast, DeclId},
        declarations::{Decl, VarDecl},
    },
    errors::errors::{BindingError, Error, TypeError, ValueError},
    types::types::Type,
    values::{
        object::Object,
        value::{Address, Value},
    },
};

use super::store::{MonotonicStore, ObjectHandle, StoreId};

/// A stack frame, or activation record, in the call stack.
///
/// Each frame has a local store containing the automatic variables of its
/// function. The store and every object in it are destroyed with the frame.
#[derive(Debug)]
pub struct Frame {
    caller: Option<u32>,
    function: DeclId,
    depth: u32,
    locals: MonotonicStore,
}

impl Frame {
    fn new(caller: Option<&Frame>, function: DeclId, serial: u64) -> Self {
        let depth = caller.map(|frame| frame.depth + 1).unwrap_or(0);
        Frame {
            caller: caller.map(|frame| frame.depth),
            function,
            depth,
            locals: MonotonicStore::new(StoreId {
                depth: Some(depth),
                serial,
            }),
        }
    }

    /// Depth of the calling frame, or `None` for the entry point.
    pub fn get_caller(&self) -> Option<u32> {
        self.caller
    }

    /// The called function.
    pub fn get_function(&self) -> DeclId {
        self.function
    }

    pub fn get_depth(&self) -> u32 {
        self.depth
    }

    pub fn get_locals(&self) -> &MonotonicStore {
        &self.locals
    }

    pub fn get_locals_mut(&mut self) -> &mut MonotonicStore {
        &mut self.locals
    }

    pub fn allocate_local(&mut self, decl: DeclId, ty: Type) -> Result<ObjectHandle, BindingError> {
        self.locals.allocate(decl, ty)
    }

    pub fn locate_local(&self, decl: DeclId) -> Result<ObjectHandle, BindingError> {
        self.locals.locate(decl)
    }

    pub fn alias_local(&mut self, decl: DeclId, target: ObjectHandle) -> Result<(), BindingError> {
        self.locals.alias(decl, target)
    }
}

/// How an argument reaches a parameter at activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument {
    /// A computed value.
    Value(Value),
    /// An existing object. Reference parameters alias it; object parameters
    /// receive a copy of its current value.
    Object(ObjectHandle),
}

/// The call stack is a vector of frames plus the static store.
///
/// The frame at index `n` has depth `n`, so objects of enclosing activations
/// are found without walking the caller chain.
#[derive(Debug)]
pub struct CallStack {
    frames: Vec<Frame>,
    statics: MonotonicStore,
    next_serial: u64,
}

impl CallStack {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Reserves room for `depth` frames up front.
    pub fn with_capacity(depth: usize) -> Self {
        CallStack {
            frames: Vec::with_capacity(depth),
            statics: MonotonicStore::new(StoreId::STATIC),
            next_serial: StoreId::STATIC.serial + 1,
        }
    }

    /// Pushes a new frame for `function` onto the call stack.
    pub fn push(&mut self, function: DeclId) -> &mut Frame {
        let serial = self.next_serial;
        self.next_serial += 1;

        let frame = Frame::new(self.frames.last(), function, serial);
        debug!(%function, depth = frame.depth, serial, "push frame");
        self.frames.push(frame);

        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    /// Pops the active frame, destroying its objects.
    pub fn pop(&mut self) -> Result<(), BindingError> {
        let frame = self.frames.pop().ok_or(BindingError::StackUnderflow)?;
        debug!(
            function = %frame.function,
            depth = frame.depth,
            objects = frame.locals.len(),
            "pop frame"
        );
        Ok(())
    }

    pub fn get_top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn get_top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Returns the frame at depth `n`.
    pub fn get_frame(&self, n: u32) -> Option<&Frame> {
        self.frames.get(n as usize)
    }

    /// Number of live frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn statics(&self) -> &MonotonicStore {
        &self.statics
    }

    pub fn statics_mut(&mut self) -> &mut MonotonicStore {
        &mut self.statics
    }

    /// Allocates a static object for `decl`.
    pub fn allocate_static(&mut self, decl: DeclId, ty: Type) -> Result<ObjectHandle, BindingError> {
        self.statics.allocate(decl, ty)
    }

    fn store_of(&self, handle: ObjectHandle) -> Result<&MonotonicStore, BindingError> {
        let store = match handle.store.depth {
            None => Some(&self.statics),
            Some(depth) => self.get_frame(depth).map(|frame| &frame.locals),
        };
        store
            .filter(|store| store.get_id() == handle.store)
            .ok_or(BindingError::DanglingObject { handle })
    }

    fn store_of_mut(&mut self, handle: ObjectHandle) -> Result<&mut MonotonicStore, BindingError> {
        let store = match handle.store.depth {
            None => Some(&mut self.statics),
            Some(depth) => self
                .frames
                .get_mut(depth as usize)
                .map(|frame| &mut frame.locals),
        };
        store
            .filter(|store| store.get_id() == handle.store)
            .ok_or(BindingError::DanglingObject { handle })
    }

    /// Resolves a handle from any live store.
    pub fn object(&self, handle: ObjectHandle) -> Result<&Object, BindingError> {
        self.store_of(handle)?.object(handle)
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut Object, BindingError> {
        self.store_of_mut(handle)?.object_mut(handle)
    }

    /// True if `handle` designates an object of a live store.
    pub fn is_live(&self, handle: ObjectHandle) -> bool {
        self.object(handle).is_ok()
    }

    /// Binds `decl` in the top frame as an alias for `target`.
    ///
    /// The target may live in the top frame, in an enclosing frame or in the
    /// static store. All of those outlive the top frame, so the alias never
    /// outlives its object and ownership stays with the allocating store.
    pub fn bind_reference(&mut self, decl: DeclId, target: ObjectHandle) -> Result<(), BindingError> {
        if !self.is_live(target) {
            return Err(BindingError::InvalidAlias { decl, target });
        }

        match self.frames.last_mut() {
            Some(frame) => frame.locals.alias_foreign(decl, target),
            None => self.statics.alias(decl, target),
        }
    }

    /// Finds the object bound to `decl` in the top frame, falling back to the
    /// static store.
    pub fn locate(&self, decl: DeclId) -> Result<ObjectHandle, BindingError> {
        if let Some(frame) = self.get_top() {
            if frame.locals.contains(decl) {
                return frame.locate_local(decl);
            }
        }
        self.statics.locate(decl)
    }

    /// The address of the object `decl` names from the top frame.
    pub fn address_of(&self, decl: DeclId) -> Result<Address, BindingError> {
        let handle = self.locate(decl)?;
        self.store_of(handle)?.address_of(handle)
    }

    /// Finds the object designated by an address.
    pub fn resolve(&self, address: &Address) -> Result<ObjectHandle, BindingError> {
        match address.frame_depth {
            None => self.statics.locate(address.def),
            Some(depth) => self
                .get_frame(depth)
                .ok_or(BindingError::UnboundDeclaration { decl: address.def })?
                .locate_local(address.def),
        }
    }

    /// Activates `function`: pushes its frame, then binds each parameter to
    /// its argument in order and allocates the return object.
    ///
    /// On failure the new frame is popped again, leaving the stack unchanged.
    pub fn invoke(
        &mut self,
        ast: &Ast,
        function: DeclId,
        arguments: &[Argument],
    ) -> Result<&mut Frame, Error> {
        let declaration = ast
            .decl(function)
            .as_function()
            .ok_or(BindingError::InvalidDeclaration {
                decl: function,
                expected: "a function",
            })?;

        if declaration.parameters.len() != arguments.len() {
            return Err(TypeError::ArityMismatch {
                expected: declaration.parameters.len(),
                received: arguments.len(),
            }
            .into());
        }

        self.push(function);
        let bound = self.bind_activation(
            ast,
            &declaration.parameters,
            declaration.return_decl,
            arguments,
        );
        if let Err(error) = bound {
            self.pop()?;
            return Err(error);
        }

        let top = self.frames.len() - 1;
        Ok(&mut self.frames[top])
    }

    fn bind_activation(
        &mut self,
        ast: &Ast,
        parameters: &[DeclId],
        return_decl: Option<DeclId>,
        arguments: &[Argument],
    ) -> Result<(), Error> {
        for (parameter, argument) in parameters.iter().zip(arguments.iter()) {
            self.bind_parameter(ast, *parameter, *argument)?;
        }

        if let Some(decl) = return_decl {
            let var = variable(ast, decl)?;
            if var.ty.is_object() {
                self.top_frame_mut()?.allocate_local(decl, var.ty.clone())?;
            }
        }

        Ok(())
    }

    fn bind_parameter(&mut self, ast: &Ast, decl: DeclId, argument: Argument) -> Result<(), Error> {
        let var = variable(ast, decl)?;

        if var.ty.is_reference() {
            return match argument {
                Argument::Object(target) => Ok(self.bind_reference(decl, target)?),
                Argument::Value(_) => Err(BindingError::ReferenceToValue { decl }.into()),
            };
        }

        let value = match argument {
            Argument::Value(value) => value,
            Argument::Object(source) => {
                let source = self.object(source)?;
                if source.is_uninitialized() {
                    return Err(ValueError::UninitializedRead.into());
                }
                *source.load()
            }
        };
        let handle = self.top_frame_mut()?.allocate_local(decl, var.ty.clone())?;
        self.object_mut(handle)?.initialize(value)?;
        Ok(())
    }

    fn top_frame_mut(&mut self) -> Result<&mut Frame, BindingError> {
        self.frames.last_mut().ok_or(BindingError::StackUnderflow)
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

fn variable(ast: &Ast, decl: DeclId) -> Result<&VarDecl, BindingError> {
    match ast.decl(decl) {
        Decl::Variable(var) => Ok(var),
        _ => Err(BindingError::InvalidDeclaration {
            decl,
            expected: "a variable",
        }),
    }
}
