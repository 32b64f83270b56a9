//! # Attachment Shared
//! Registry of attachment types: typed data slots that can be attached to
//! host objects, with optional default values, persistence and network
//! synchronization.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use naia_serde::{BitReader, BitWrite, FileBitWriter, Serde, SerdeErr, UnsignedVariableInteger};

mod attachment;
mod codec;
mod constants;
mod identifier;
mod registry;
mod sync;

pub use attachment::{
    attachment_type::AttachmentType,
    builder::AttachmentTypeBuilder,
    erased::{BoxedValue, ErasedAttachmentType},
    error::AttachmentError,
};
pub use codec::{CodecError, JsonCodec, NetworkCodec, PersistenceCodec, WireCodec};
pub use constants::MAX_IDENTIFIER_SIZE;
pub use identifier::{Identifier, IdentifierError};
pub use registry::{
    global, AttachmentRegistry, FrozenRegistry, LogObserver, RegistryConfig, RegistryError,
    RegistryEvent, RegistryObserver, SyncableIds,
};
pub use sync::{PeerKey, SyncConfig, SyncPredicate};
