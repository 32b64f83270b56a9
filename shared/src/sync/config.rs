use crate::codec::NetworkCodec;

use super::predicate::SyncPredicate;

/// Network codec and sync predicate of a synced attachment type.
/// The two only ever exist together.
pub struct SyncConfig<A> {
    network_codec: Box<dyn NetworkCodec<A>>,
    predicate: SyncPredicate,
}

impl<A> SyncConfig<A> {
    pub fn new<C: NetworkCodec<A> + 'static>(network_codec: C, predicate: SyncPredicate) -> Self {
        Self {
            network_codec: Box::new(network_codec),
            predicate,
        }
    }

    pub fn network_codec(&self) -> &dyn NetworkCodec<A> {
        self.network_codec.as_ref()
    }

    pub fn predicate(&self) -> &SyncPredicate {
        &self.predicate
    }
}
