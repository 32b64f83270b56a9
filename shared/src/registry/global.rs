//! Process-wide attachment registry.
//!
//! The registry is created empty on first use and lives until the process
//! exits. Register attachment types while the process starts up, then call
//! [`freeze`] once; afterwards readers use the snapshot returned by
//! [`frozen`].
//!
//! A [`with_registry`] closure holds the registry for its whole run. Calls
//! back into this module from inside the closure fail with
//! [`RegistryError::Reentrant`] instead of blocking. Use the registry handed
//! to the closure there.

use std::{
    cell::Cell,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::{
    attachment::{
        attachment_type::AttachmentType, builder::AttachmentTypeBuilder,
        erased::ErasedAttachmentType, error::AttachmentError,
    },
    identifier::Identifier,
};

use super::{
    attachment_registry::AttachmentRegistry, error::RegistryError, frozen::FrozenRegistry,
};

static REGISTRY: Mutex<Option<AttachmentRegistry>> = Mutex::new(None);
static FROZEN: OnceLock<Arc<FrozenRegistry>> = OnceLock::new();

thread_local! {
    static HELD_BY_THIS_THREAD: Cell<bool> = const { Cell::new(false) };
}

// Marks the current thread as holding REGISTRY, cleared on drop (including unwinding)
struct HeldMarker;

impl HeldMarker {
    fn acquire() -> Result<Self, RegistryError> {
        if HELD_BY_THIS_THREAD.with(|held| held.replace(true)) {
            return Err(RegistryError::Reentrant);
        }
        Ok(HeldMarker)
    }
}

impl Drop for HeldMarker {
    fn drop(&mut self) {
        HELD_BY_THIS_THREAD.with(|held| held.set(false));
    }
}

/// Runs `f` against the process-wide registry
pub fn with_registry<R>(
    f: impl FnOnce(&mut AttachmentRegistry) -> R,
) -> Result<R, RegistryError> {
    let _marker = HeldMarker::acquire()?;
    let mut guard = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(f(guard.get_or_insert_with(AttachmentRegistry::default)))
}

pub fn build_and_register<A, I>(
    builder: AttachmentTypeBuilder<A>,
    id: I,
) -> Result<Arc<AttachmentType<A>>, AttachmentError>
where
    A: Send + Sync + 'static,
    I: TryInto<Identifier>,
    AttachmentError: From<I::Error>,
{
    with_registry(|registry| builder.build_and_register(registry, id))?
}

/// Looks up an attachment type. Once frozen, this reads the snapshot without
/// taking the configuration lock.
pub fn get(id: &Identifier) -> Result<Option<Arc<dyn ErasedAttachmentType>>, RegistryError> {
    match FROZEN.get() {
        Some(frozen) => Ok(frozen.get(id).cloned()),
        None => with_registry(|registry| registry.get(id).cloned()),
    }
}

/// Freezes the process-wide registry and publishes its snapshot
pub fn freeze() -> Result<Arc<FrozenRegistry>, RegistryError> {
    with_registry(|registry| {
        let frozen = registry.freeze()?;
        Ok(Arc::clone(FROZEN.get_or_init(|| frozen)))
    })?
}

/// Snapshot of the process-wide registry, once it has been frozen
pub fn frozen() -> Option<Arc<FrozenRegistry>> {
    FROZEN.get().cloned()
}
