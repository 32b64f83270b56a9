use std::{
    collections::{hash_map, HashMap, HashSet},
    sync::Arc,
};

use crate::{
    attachment::{attachment_type::AttachmentType, erased::ErasedAttachmentType},
    identifier::Identifier,
};

use super::syncable_ids::SyncableIds;

// AttachmentTypes
#[derive(Clone, Default)]
pub(crate) struct AttachmentTypes {
    pub(crate) entries: HashMap<Identifier, Arc<dyn ErasedAttachmentType>>,
    // always equal to the keys of `entries` whose attachment type is synced
    pub(crate) syncable_ids: HashSet<Identifier>,
}

impl AttachmentTypes {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            syncable_ids: HashSet::new(),
        }
    }

    pub(crate) fn get(&self, id: &Identifier) -> Option<&Arc<dyn ErasedAttachmentType>> {
        self.entries.get(id)
    }

    pub(crate) fn get_typed<A: Send + Sync + 'static>(
        &self,
        id: &Identifier,
    ) -> Option<Arc<AttachmentType<A>>> {
        let attachment = Arc::clone(self.entries.get(id)?);
        attachment.into_any().downcast::<AttachmentType<A>>().ok()
    }

    pub(crate) fn contains(&self, id: &Identifier) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> hash_map::Iter<'_, Identifier, Arc<dyn ErasedAttachmentType>> {
        self.entries.iter()
    }

    pub(crate) fn syncable_ids(&self) -> SyncableIds<'_> {
        SyncableIds::new(&self.syncable_ids)
    }
}
