use thiserror::Error;

/// Errors that can occur during registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Registry is frozen and cannot be modified
    #[error("Attachment registry is already frozen and cannot be modified. AttachmentRegistry.freeze() has been called and no further registrations are allowed")]
    AlreadyLocked,

    /// Process-wide registry was accessed again from inside a `with_registry` closure
    #[error("Process-wide attachment registry is already held by this thread. Inside global::with_registry(), use the registry passed to the closure instead of calling back into global")]
    Reentrant,
}
