use std::sync::Arc;

use crate::{
    codec::{NetworkCodec, PersistenceCodec},
    constants::MAX_IDENTIFIER_SIZE,
    identifier::Identifier,
    registry::AttachmentRegistry,
    sync::{SyncConfig, SyncPredicate},
};

use super::{
    attachment_type::{AttachmentType, Initializer},
    error::AttachmentError,
};

/// Configures a single attachment type with value type `A`, then registers it.
///
/// ```
/// # use attachment_shared::{AttachmentRegistry, AttachmentTypeBuilder, JsonCodec, SyncPredicate, WireCodec};
/// let mut registry = AttachmentRegistry::default();
///
/// let mana = AttachmentTypeBuilder::<f32>::new()
///     .initializer(|| 100.0)
///     .persistent(JsonCodec::new())
///     .sync_with(WireCodec::new(), SyncPredicate::target_only())
///     .copy_on_death()
///     .build_and_register(&mut registry, "mod:mana")
///     .unwrap();
///
/// assert!(mana.is_synced());
/// assert!(registry.syncable_ids().contains(mana.id()));
/// ```
pub struct AttachmentTypeBuilder<A> {
    default_initializer: Option<Initializer<A>>,
    persistence_codec: Option<Box<dyn PersistenceCodec<A>>>,
    sync_config: Option<SyncConfig<A>>,
    copy_on_death: bool,
}

impl<A: Send + Sync + 'static> AttachmentTypeBuilder<A> {
    pub fn new() -> Self {
        Self {
            default_initializer: None,
            persistence_codec: None,
            sync_config: None,
            copy_on_death: false,
        }
    }

    /// Stores values of this attachment type with the given codec
    pub fn persistent<C: PersistenceCodec<A> + 'static>(mut self, codec: C) -> Self {
        self.persistence_codec = Some(Box::new(codec));
        self
    }

    /// Keeps the value when the host object is recreated after death
    pub fn copy_on_death(mut self) -> Self {
        self.copy_on_death = true;
        self
    }

    pub fn initializer<F>(mut self, initializer: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        self.default_initializer = Some(Box::new(initializer));
        self
    }

    /// Synchronizes values of this attachment type with the peers selected by
    /// `predicate`, encoded with `network_codec`
    pub fn sync_with<C: NetworkCodec<A> + 'static>(
        mut self,
        network_codec: C,
        predicate: SyncPredicate,
    ) -> Self {
        self.sync_config = Some(SyncConfig::new(network_codec, predicate));
        self
    }

    /// Validates the configuration and registers the resulting attachment type
    /// under `id`. Nothing is registered if validation fails.
    pub fn build_and_register<I>(
        self,
        registry: &mut AttachmentRegistry,
        id: I,
    ) -> Result<Arc<AttachmentType<A>>, AttachmentError>
    where
        I: TryInto<Identifier>,
        AttachmentError: From<I::Error>,
    {
        let attachment = Arc::new(self.build(id.try_into()?)?);
        registry.register(attachment.id().clone(), attachment.clone())?;
        Ok(attachment)
    }

    pub(crate) fn build(self, id: Identifier) -> Result<AttachmentType<A>, AttachmentError> {
        if self.sync_config.is_some() && id.wire_len() > MAX_IDENTIFIER_SIZE {
            return Err(AttachmentError::IdentifierTooLong {
                length: id.wire_len(),
                max: MAX_IDENTIFIER_SIZE,
                id: id.to_string(),
            });
        }

        Ok(AttachmentType::new(
            id,
            self.default_initializer,
            self.persistence_codec,
            self.sync_config,
            self.copy_on_death,
        ))
    }
}

impl<A: Send + Sync + 'static> Default for AttachmentTypeBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
