use std::convert::Infallible;

use thiserror::Error;

use crate::{identifier::IdentifierError, registry::RegistryError};

/// Errors that can occur while building and registering an attachment type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// Identifier was absent or malformed
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Synced attachment type's identifier does not fit the wire framing
    #[error("Identifier length is too long for synced attachment type '{id}' (was {length}, maximum is {max})")]
    IdentifierTooLong {
        id: String,
        length: usize,
        max: usize,
    },

    /// Registry rejected the registration
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<Infallible> for AttachmentError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
