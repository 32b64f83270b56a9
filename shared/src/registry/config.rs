use std::default::Default;

/// Contains Config properties which will be used by an AttachmentRegistry
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Number of attachment types the registry reserves room for up front
    pub initial_capacity: usize,
    /// Whether the default observer logs every new registration at debug
    /// level. Duplicate registrations are always logged.
    pub log_registrations: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            log_registrations: true,
        }
    }
}
