use std::{collections::hash_map, sync::Arc};

use crate::{
    attachment::{attachment_type::AttachmentType, erased::ErasedAttachmentType},
    identifier::Identifier,
};

use super::{attachment_types::AttachmentTypes, syncable_ids::SyncableIds};

/// Immutable snapshot of an AttachmentRegistry, taken when it was frozen.
/// Safe to share between threads for the rest of the process.
pub struct FrozenRegistry {
    types: AttachmentTypes,
}

impl FrozenRegistry {
    pub(crate) fn new(types: AttachmentTypes) -> Self {
        Self { types }
    }

    pub fn get(&self, id: &Identifier) -> Option<&Arc<dyn ErasedAttachmentType>> {
        self.types.get(id)
    }

    pub fn get_typed<A: Send + Sync + 'static>(
        &self,
        id: &Identifier,
    ) -> Option<Arc<AttachmentType<A>>> {
        self.types.get_typed(id)
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.types.contains(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.len() == 0
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Identifier, Arc<dyn ErasedAttachmentType>> {
        self.types.iter()
    }

    pub fn syncable_ids(&self) -> SyncableIds<'_> {
        self.types.syncable_ids()
    }
}
