/// PROPERTY-BASED TESTS: Syncable index invariants
///
/// Uses proptest to verify registry properties hold across random
/// registration sequences.
///
/// Key invariants:
/// 1. Syncable identifiers always equal the identifiers of synced attachment types
/// 2. The last registration for an identifier always wins
/// 3. Copy-on-death is set by any number of calls and unset by none
use std::{collections::HashMap, sync::Arc};

use proptest::prelude::*;

use attachment_shared::{
    AttachmentRegistry, AttachmentType, AttachmentTypeBuilder, Identifier, JsonCodec,
    SyncPredicate, WireCodec,
};
use attachment_test::{assert_syncable_consistent, TestRegistry};

#[derive(Clone, Debug)]
struct Registration {
    slot: u8,
    synced: bool,
    persistent: bool,
}

// Strategy drawing identifiers from a small pool so duplicates are common
fn registration_strategy() -> impl Strategy<Value = Registration> {
    (0u8..6u8, any::<bool>(), any::<bool>()).prop_map(|(slot, synced, persistent)| Registration {
        slot,
        synced,
        persistent,
    })
}

fn slot_id(slot: u8) -> Identifier {
    Identifier::parse(&format!("prop:slot_{}", slot)).unwrap()
}

fn register(
    registry: &mut AttachmentRegistry,
    registration: &Registration,
) -> Arc<AttachmentType<u32>> {
    let mut builder = AttachmentTypeBuilder::<u32>::new();
    if registration.synced {
        builder = builder.sync_with(WireCodec::new(), SyncPredicate::all());
    }
    if registration.persistent {
        builder = builder.persistent(JsonCodec::new());
    }
    builder
        .build_and_register(registry, slot_id(registration.slot))
        .unwrap()
}

proptest! {
    /// Test that the syncable index matches a full scan after every registration
    #[test]
    fn prop_syncable_ids_match_full_scan(
        registrations in prop::collection::vec(registration_strategy(), 1..40)
    ) {
        let mut registry = AttachmentRegistry::default();

        for registration in &registrations {
            register(&mut registry, registration);
            assert_syncable_consistent!(registry);
        }
    }

    /// Test that the newest registration per identifier is the one stored
    #[test]
    fn prop_last_registration_wins(
        registrations in prop::collection::vec(registration_strategy(), 1..40)
    ) {
        let (mut registry, observer) = TestRegistry::recording();
        let mut latest: HashMap<u8, Arc<AttachmentType<u32>>> = HashMap::new();
        let mut duplicates = 0;

        for registration in &registrations {
            let attachment = register(&mut registry, registration);
            if latest.insert(registration.slot, attachment).is_some() {
                duplicates += 1;
            }
        }

        prop_assert_eq!(registry.len(), latest.len());
        prop_assert_eq!(observer.duplicate_count(), duplicates);
        for (slot, attachment) in &latest {
            let stored = registry.get_typed::<u32>(&slot_id(*slot)).unwrap();
            prop_assert!(Arc::ptr_eq(&stored, attachment));
            prop_assert_eq!(
                registry.syncable_ids().contains(&slot_id(*slot)),
                attachment.is_synced()
            );
        }
    }

    /// Test that copy-on-death only depends on whether it was ever called
    #[test]
    fn prop_copy_on_death_is_idempotent(calls in 0usize..5) {
        let mut registry = AttachmentRegistry::default();
        let mut builder = AttachmentTypeBuilder::<u8>::new();
        for _ in 0..calls {
            builder = builder.copy_on_death();
        }

        let attachment = builder.build_and_register(&mut registry, "prop:death").unwrap();
        prop_assert_eq!(attachment.copy_on_death(), calls > 0);
    }

    /// Test that the frozen snapshot carries the same syncable index
    #[test]
    fn prop_frozen_snapshot_matches_registry(
        registrations in prop::collection::vec(registration_strategy(), 0..20)
    ) {
        let mut registry = AttachmentRegistry::default();
        for registration in &registrations {
            register(&mut registry, registration);
        }

        let frozen = registry.freeze().unwrap();
        prop_assert_eq!(frozen.syncable_ids().sorted(), registry.syncable_ids().sorted());
        assert_syncable_consistent!(frozen);
    }
}
