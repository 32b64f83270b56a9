use log::{debug, warn};

use crate::identifier::Identifier;

/// Diagnostic events emitted by an AttachmentRegistry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    /// An attachment type was registered under a new identifier
    Registered { id: Identifier, synced: bool },
    /// An attachment type replaced an earlier registration with the same identifier
    DuplicateRegistration {
        id: Identifier,
        previously_synced: bool,
        now_synced: bool,
    },
    /// The registry was frozen
    Frozen { entries: usize, syncable: usize },
}

/// Receives the diagnostic events of a registry
pub trait RegistryObserver: Send {
    fn on_event(&mut self, event: &RegistryEvent);
}

impl<F: FnMut(&RegistryEvent) + Send> RegistryObserver for F {
    fn on_event(&mut self, event: &RegistryEvent) {
        (*self)(event)
    }
}

/// Default observer, forwards events to the `log` facade
pub struct LogObserver {
    log_registrations: bool,
}

impl LogObserver {
    pub fn new(log_registrations: bool) -> Self {
        Self { log_registrations }
    }
}

impl RegistryObserver for LogObserver {
    fn on_event(&mut self, event: &RegistryEvent) {
        match event {
            RegistryEvent::Registered { id, synced } => {
                if self.log_registrations {
                    debug!("Registered attachment type {} (synced: {})", id, synced);
                }
            }
            RegistryEvent::DuplicateRegistration {
                id,
                previously_synced,
                now_synced,
            } => {
                warn!(
                    "Encountered duplicate attachment type registration for id {} (synced: {} -> {})",
                    id, previously_synced, now_synced
                );
            }
            RegistryEvent::Frozen { entries, syncable } => {
                debug!(
                    "Attachment registry frozen with {} attachment types, {} syncable",
                    entries, syncable
                );
            }
        }
    }
}
