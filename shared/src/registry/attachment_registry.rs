use std::{collections::hash_map, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    attachment::{
        attachment_type::AttachmentType, builder::AttachmentTypeBuilder,
        erased::ErasedAttachmentType, error::AttachmentError,
    },
    codec::JsonCodec,
    identifier::Identifier,
};

use super::{
    attachment_types::AttachmentTypes,
    config::RegistryConfig,
    error::RegistryError,
    events::{LogObserver, RegistryEvent, RegistryObserver},
    frozen::FrozenRegistry,
    syncable_ids::SyncableIds,
};

/// Maps identifiers to attachment types and keeps track of which of them are
/// synced.
///
/// Registration happens during a single-threaded configuration phase. Once
/// every attachment type is registered, [`freeze`](Self::freeze) ends that
/// phase and hands out a [`FrozenRegistry`] for concurrent reads.
pub struct AttachmentRegistry {
    types: AttachmentTypes,
    observer: Box<dyn RegistryObserver>,
    locked: bool,
}

impl Default for AttachmentRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl AttachmentRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let observer = LogObserver::new(config.log_registrations);
        Self::with_observer(config, observer)
    }

    pub fn with_observer<O: RegistryObserver + 'static>(
        config: RegistryConfig,
        observer: O,
    ) -> Self {
        Self {
            types: AttachmentTypes::with_capacity(config.initial_capacity),
            observer: Box::new(observer),
            locked: false,
        }
    }

    pub fn builder<A: Send + Sync + 'static>() -> AttachmentTypeBuilder<A> {
        AttachmentTypeBuilder::new()
    }

    /// Registers `attachment` under `id`, replacing any earlier registration.
    ///
    /// Replacing is not an error: the newer attachment type wins, a
    /// [`RegistryEvent::DuplicateRegistration`] is reported and the set of
    /// syncable identifiers is updated to follow the newer type.
    pub fn register(
        &mut self,
        id: Identifier,
        attachment: Arc<dyn ErasedAttachmentType>,
    ) -> Result<(), RegistryError> {
        self.try_check_lock()?;

        let synced = attachment.is_synced();

        match self.types.entries.insert(id.clone(), attachment) {
            Some(existing) => {
                let previously_synced = existing.is_synced();

                if previously_synced && !synced {
                    self.types.syncable_ids.remove(&id);
                } else if !previously_synced && synced {
                    self.types.syncable_ids.insert(id.clone());
                }

                self.observer.on_event(&RegistryEvent::DuplicateRegistration {
                    id,
                    previously_synced,
                    now_synced: synced,
                });
            }
            None => {
                if synced {
                    self.types.syncable_ids.insert(id.clone());
                }

                self.observer
                    .on_event(&RegistryEvent::Registered { id, synced });
            }
        }

        Ok(())
    }

    pub fn get(&self, id: &Identifier) -> Option<&Arc<dyn ErasedAttachmentType>> {
        self.types.get(id)
    }

    /// Returns the attachment type registered under `id` if its value type is `A`
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

    // Convenience constructors

    /// Registers an attachment type with no initializer, persistence or sync
    pub fn create<A, I>(&mut self, id: I) -> Result<Arc<AttachmentType<A>>, AttachmentError>
    where
        A: Send + Sync + 'static,
        I: TryInto<Identifier>,
        AttachmentError: From<I::Error>,
    {
        AttachmentTypeBuilder::new().build_and_register(self, id)
    }

    pub fn create_defaulted<A, I, F>(
        &mut self,
        id: I,
        initializer: F,
    ) -> Result<Arc<AttachmentType<A>>, AttachmentError>
    where
        A: Send + Sync + 'static,
        I: TryInto<Identifier>,
        AttachmentError: From<I::Error>,
        F: Fn() -> A + Send + Sync + 'static,
    {
        AttachmentTypeBuilder::new()
            .initializer(initializer)
            .build_and_register(self, id)
    }

    /// Registers an attachment type persisted as JSON
    pub fn create_persistent<A, I>(
        &mut self,
        id: I,
    ) -> Result<Arc<AttachmentType<A>>, AttachmentError>
    where
        A: Serialize + DeserializeOwned + Send + Sync + 'static,
        I: TryInto<Identifier>,
        AttachmentError: From<I::Error>,
    {
        AttachmentTypeBuilder::new()
            .persistent(JsonCodec::new())
            .build_and_register(self, id)
    }

    pub fn create_with<A, I, F>(
        &mut self,
        id: I,
        configure: F,
    ) -> Result<Arc<AttachmentType<A>>, AttachmentError>
    where
        A: Send + Sync + 'static,
        I: TryInto<Identifier>,
        AttachmentError: From<I::Error>,
        F: FnOnce(AttachmentTypeBuilder<A>) -> AttachmentTypeBuilder<A>,
    {
        configure(AttachmentTypeBuilder::new()).build_and_register(self, id)
    }

    // Locking

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns Err if the registry has been frozen
    pub fn try_check_lock(&self) -> Result<(), RegistryError> {
        if self.locked {
            Err(RegistryError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Ends the configuration phase. Further registrations are rejected, and
    /// the returned snapshot can be shared across threads for reads.
    pub fn freeze(&mut self) -> Result<Arc<FrozenRegistry>, RegistryError> {
        self.try_check_lock()?;
        self.locked = true;

        self.observer.on_event(&RegistryEvent::Frozen {
            entries: self.types.len(),
            syncable: self.types.syncable_ids.len(),
        });

        Ok(Arc::new(FrozenRegistry::new(self.types.clone())))
    }
}
