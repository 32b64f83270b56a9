use std::sync::{Arc, Mutex};

use attachment_shared::{AttachmentRegistry, RegistryConfig, RegistryEvent, RegistryObserver};

/// Observer that keeps every event it receives, shared with the test body
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<RegistryEvent>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn duplicate_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, RegistryEvent::DuplicateRegistration { .. }))
            .count()
    }
}

impl RegistryObserver for RecordingObserver {
    fn on_event(&mut self, event: &RegistryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Builder for creating test registries
pub struct TestRegistry;

impl TestRegistry {
    /// Registry logging through the default observer
    pub fn logging() -> AttachmentRegistry {
        AttachmentRegistry::new(RegistryConfig::default())
    }

    /// Registry whose events can be inspected afterwards
    pub fn recording() -> (AttachmentRegistry, RecordingObserver) {
        let observer = RecordingObserver::default();
        let registry = AttachmentRegistry::with_observer(
            RegistryConfig {
                initial_capacity: 8,
                log_registrations: false,
            },
            observer.clone(),
        );
        (registry, observer)
    }
}
