pub mod assertions;
pub mod test_registry;

pub use test_registry::{RecordingObserver, TestRegistry};
