use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    ast::ast::DeclId,
    errors::errors::BindingError,
    types::types::Type,
    values::{object::Object, value::Address},
};

/// Identity of a store.
///
/// `depth` is the depth of the owning frame (`None` for the static store) and
/// `serial` tells apart successive activations that reuse the same depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId {
    pub depth: Option<u32>,
    pub serial: u64,
}

impl StoreId {
    pub const STATIC: StoreId = StoreId {
        depth: None,
        serial: 0,
    };
}

/// Designates one object in one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    pub(crate) store: StoreId,
    pub(crate) index: usize,
}

impl ObjectHandle {
    pub fn get_store(&self) -> StoreId {
        self.store
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Index into this store's own objects.
    Owned(usize),
    /// An object owned by another, longer-lived store.
    Alias(ObjectHandle),
}

/// A store maintains a set of live objects.
///
/// A monotonic store does not allow storage to be returned incrementally; all
/// storage is released at the same time. This is used to implement the static
/// store and automatic stores.
#[derive(Debug)]
pub struct MonotonicStore {
    id: StoreId,
    storage: Vec<Object>,
    /// The allocating declaration of each object, parallel to `storage`.
    owners: Vec<DeclId>,
    lookup: FxHashMap<DeclId, Slot>,
}

impl MonotonicStore {
    pub fn new(id: StoreId) -> Self {
        MonotonicStore {
            id,
            storage: Vec::new(),
            owners: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    pub fn get_id(&self) -> StoreId {
        self.id
    }

    /// Allocates an indeterminate object of type `ty` for `decl`.
    pub fn allocate(&mut self, decl: DeclId, ty: Type) -> Result<ObjectHandle, BindingError> {
        if self.lookup.contains_key(&decl) {
            return Err(BindingError::DuplicateAllocation { decl });
        }

        let index = self.storage.len();
        trace!(%decl, %ty, index, "allocate object");
        self.storage.push(Object::new(ty));
        self.owners.push(decl);
        self.lookup.insert(decl, Slot::Owned(index));

        Ok(self.handle(index))
    }

    /// Returns the object bound to `decl`, whether allocated here or aliased.
    pub fn locate(&self, decl: DeclId) -> Result<ObjectHandle, BindingError> {
        match self.lookup.get(&decl) {
            Some(Slot::Owned(index)) => Ok(self.handle(*index)),
            Some(Slot::Alias(handle)) => Ok(*handle),
            None => Err(BindingError::UnboundDeclaration { decl }),
        }
    }

    /// Makes `decl` a second name for an object of this store.
    pub fn alias(&mut self, decl: DeclId, target: ObjectHandle) -> Result<(), BindingError> {
        if self.lookup.contains_key(&decl) {
            return Err(BindingError::DuplicateAllocation { decl });
        }
        if !self.owns(target) {
            return Err(BindingError::InvalidAlias { decl, target });
        }

        trace!(%decl, index = target.index, "alias object");
        self.lookup.insert(decl, Slot::Owned(target.index));
        Ok(())
    }

    /// Makes `decl` a name for an object owned by another store. The caller
    /// guarantees that store outlives this one.
    pub(crate) fn alias_foreign(
        &mut self,
        decl: DeclId,
        target: ObjectHandle,
    ) -> Result<(), BindingError> {
        if self.lookup.contains_key(&decl) {
            return Err(BindingError::DuplicateAllocation { decl });
        }
        if target.store == self.id {
            return self.alias(decl, target);
        }

        trace!(%decl, ?target, "alias foreign object");
        self.lookup.insert(decl, Slot::Alias(target));
        Ok(())
    }

    pub fn contains(&self, decl: DeclId) -> bool {
        self.lookup.contains_key(&decl)
    }

    /// True if `handle` designates an object allocated by this store.
    pub fn owns(&self, handle: ObjectHandle) -> bool {
        handle.store == self.id && handle.index < self.storage.len()
    }

    pub fn object(&self, handle: ObjectHandle) -> Result<&Object, BindingError> {
        if !self.owns(handle) {
            return Err(BindingError::DanglingObject { handle });
        }
        Ok(&self.storage[handle.index])
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut Object, BindingError> {
        if !self.owns(handle) {
            return Err(BindingError::DanglingObject { handle });
        }
        Ok(&mut self.storage[handle.index])
    }

    /// The declaration that allocated the object.
    pub fn owner(&self, handle: ObjectHandle) -> Result<DeclId, BindingError> {
        if !self.owns(handle) {
            return Err(BindingError::DanglingObject { handle });
        }
        Ok(self.owners[handle.index])
    }

    /// The address of an object allocated by this store.
    pub fn address_of(&self, handle: ObjectHandle) -> Result<Address, BindingError> {
        let def = self.owner(handle)?;
        Ok(Address {
            frame_depth: self.id.depth,
            def,
        })
    }

    /// Number of objects allocated here; aliases take no storage.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn handle(&self, index: usize) -> ObjectHandle {
        ObjectHandle {
            store: self.id,
            index,
        }
    }
}
