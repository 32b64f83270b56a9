use crate::{
    codec::{NetworkCodec, PersistenceCodec},
    identifier::Identifier,
    sync::{SyncConfig, SyncPredicate},
};

pub(crate) type Initializer<A> = Box<dyn Fn() -> A + Send + Sync>;

/// Describes how values of one attachment type are created, stored and
/// synchronized. Immutable once built.
///
/// Attachment types are produced by [`AttachmentTypeBuilder`] and shared
/// through the registry behind an `Arc`.
///
/// [`AttachmentTypeBuilder`]: crate::AttachmentTypeBuilder
pub struct AttachmentType<A> {
    id: Identifier,
    default_initializer: Option<Initializer<A>>,
    persistence_codec: Option<Box<dyn PersistenceCodec<A>>>,
    sync_config: Option<SyncConfig<A>>,
    copy_on_death: bool,
}

impl<A> AttachmentType<A> {
    pub(crate) fn new(
        id: Identifier,
        default_initializer: Option<Initializer<A>>,
        persistence_codec: Option<Box<dyn PersistenceCodec<A>>>,
        sync_config: Option<SyncConfig<A>>,
        copy_on_death: bool,
    ) -> Self {
        Self {
            id,
            default_initializer,
            persistence_codec,
            sync_config,
            copy_on_death,
        }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn initializer(&self) -> Option<&(dyn Fn() -> A + Send + Sync)> {
        self.default_initializer.as_deref()
    }

    /// Produces a fresh default value, if an initializer was configured
    pub fn create_default(&self) -> Option<A> {
        self.default_initializer.as_ref().map(|initializer| initializer())
    }

    pub fn persistence_codec(&self) -> Option<&dyn PersistenceCodec<A>> {
        self.persistence_codec.as_deref()
    }

    pub fn sync_config(&self) -> Option<&SyncConfig<A>> {
        self.sync_config.as_ref()
    }

    pub fn network_codec(&self) -> Option<&dyn NetworkCodec<A>> {
        self.sync_config.as_ref().map(SyncConfig::network_codec)
    }

    pub fn sync_predicate(&self) -> Option<&SyncPredicate> {
        self.sync_config.as_ref().map(SyncConfig::predicate)
    }

    pub fn copy_on_death(&self) -> bool {
        self.copy_on_death
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence_codec.is_some()
    }

    pub fn is_synced(&self) -> bool {
        self.sync_config.is_some()
    }
}
