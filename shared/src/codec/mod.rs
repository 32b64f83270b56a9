mod error;
mod network;
mod persistence;

pub use error::CodecError;
pub use network::{NetworkCodec, WireCodec};
pub use persistence::{JsonCodec, PersistenceCodec};
