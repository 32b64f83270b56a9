mod config;
mod predicate;

pub use config::SyncConfig;
pub use predicate::{PeerKey, SyncPredicate};
