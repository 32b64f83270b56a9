/// Assert that the syncable identifiers of a registry are exactly the
/// identifiers of its synced attachment types
#[macro_export]
macro_rules! assert_syncable_consistent {
    ($registry:expr) => {
        let expected: std::collections::HashSet<$crate::attachment_shared::Identifier> = $registry
            .iter()
            .filter(|(_, attachment)| attachment.is_synced())
            .map(|(id, _)| id.clone())
            .collect();
        assert!(
            $registry.syncable_ids() == expected,
            "Syncable identifiers {:?} do not match synced attachment types {:?}",
            $registry.syncable_ids().sorted(),
            expected
        );
    };
}

/// Assert that an identifier is registered and whether it is synced
#[macro_export]
macro_rules! assert_registered {
    ($registry:expr, $id:expr, synced: $synced:expr) => {
        let id = $crate::attachment_shared::Identifier::parse($id).unwrap();
        let attachment = $registry
            .get(&id)
            .unwrap_or_else(|| panic!("Attachment type {} should be registered", id));
        assert_eq!(
            attachment.is_synced(),
            $synced,
            "Attachment type {} has unexpected sync state",
            id
        );
        assert_eq!($registry.syncable_ids().contains(&id), $synced);
    };
}
