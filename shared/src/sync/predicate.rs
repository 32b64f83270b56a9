use std::{fmt, sync::Arc};

/// Opaque handle to a connected peer that may observe attachment updates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerKey(u64);

impl PeerKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

type CustomPredicate = dyn Fn(Option<PeerKey>, PeerKey) -> bool + Send + Sync;

/// Decides which peers receive updates of a synced attachment.
///
/// The `target` handed to `should_sync` is the peer owning the host object
/// the attachment lives on, if that host object is itself a peer.
#[derive(Clone)]
pub enum SyncPredicate {
    /// Every peer
    All,
    /// Only the peer that is the host object
    TargetOnly,
    /// Every peer except the one that is the host object
    AllButTarget,
    Custom(Arc<CustomPredicate>),
}

impl SyncPredicate {
    pub fn all() -> Self {
        Self::All
    }

    pub fn target_only() -> Self {
        Self::TargetOnly
    }

    pub fn all_but_target() -> Self {
        Self::AllButTarget
    }

    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(Option<PeerKey>, PeerKey) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    pub fn should_sync(&self, target: Option<PeerKey>, observer: PeerKey) -> bool {
        match self {
            Self::All => true,
            Self::TargetOnly => target == Some(observer),
            Self::AllButTarget => target != Some(observer),
            Self::Custom(predicate) => predicate(target, observer),
        }
    }
}

impl fmt::Debug for SyncPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::TargetOnly => write!(f, "TargetOnly"),
            Self::AllButTarget => write!(f, "AllButTarget"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
