mod attachment_registry;
mod attachment_types;
mod config;
mod error;
mod events;
mod frozen;
mod syncable_ids;

pub mod global;

pub use attachment_registry::AttachmentRegistry;
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use events::{LogObserver, RegistryEvent, RegistryObserver};
pub use frozen::FrozenRegistry;
pub use syncable_ids::SyncableIds;
