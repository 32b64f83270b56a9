/// Integration tests for using attachment types without knowing their value type
use serde_json::json;

use attachment_shared::{
    AttachmentTypeBuilder, CodecError, Identifier, JsonCodec, PeerKey, SyncPredicate, WireCodec,
};
use attachment_test::{Position, Quantized, TestRegistry};

#[test]
fn custom_network_codec_is_used() {
    let mut registry = TestRegistry::logging();
    AttachmentTypeBuilder::<f32>::new()
        .sync_with(Quantized, SyncPredicate::all())
        .build_and_register(&mut registry, "demo:opacity")
        .unwrap();

    let attachment = registry
        .get(&Identifier::parse("demo:opacity").unwrap())
        .unwrap();
    let bytes = attachment.encode_network(&1.0f32).unwrap();

    assert_eq!(bytes, vec![255]);
    let value = attachment.decode_network(&[0]).unwrap();
    assert_eq!(value.downcast_ref::<f32>(), Some(&0.0));
}

#[test]
fn persisted_value_is_stored_as_json() {
    let mut registry = TestRegistry::logging();
    registry
        .create_persistent::<Position, _>("demo:spawn")
        .unwrap();

    let attachment = registry
        .get(&Identifier::parse("demo:spawn").unwrap())
        .unwrap();
    let stored = attachment
        .encode_persistent(&Position::new(4.0, -1.5))
        .unwrap();

    assert_eq!(stored, json!({ "x": 4.0, "y": -1.5 }));
    let value = attachment.decode_persistent(&stored).unwrap();
    assert_eq!(value.downcast_ref::<Position>(), Some(&Position::new(4.0, -1.5)));
}

#[test]
fn default_value_crosses_erasure() {
    let mut registry = TestRegistry::logging();
    registry
        .create_defaulted("demo:inventory", Vec::<String>::new)
        .unwrap();

    let attachment = registry
        .get(&Identifier::parse("demo:inventory").unwrap())
        .unwrap();

    assert!(attachment.has_initializer());
    assert!(attachment.value_type_name().contains("Vec"));
    let value = attachment.create_default().unwrap();
    assert_eq!(value.downcast_ref::<Vec<String>>(), Some(&Vec::new()));
}

#[test]
fn sync_predicate_is_available_to_callers() {
    let mut registry = TestRegistry::logging();
    AttachmentTypeBuilder::<Position>::new()
        .sync_with(WireCodec::new(), SyncPredicate::target_only())
        .build_and_register(&mut registry, "demo:private")
        .unwrap();

    let attachment = registry
        .get(&Identifier::parse("demo:private").unwrap())
        .unwrap();
    let owner = PeerKey::new(7);

    assert_eq!(attachment.should_sync(Some(owner), owner), Some(true));
    assert_eq!(attachment.should_sync(Some(owner), PeerKey::new(8)), Some(false));
}

#[test]
fn unsynced_attachment_refuses_network_encoding() {
    let mut registry = TestRegistry::logging();
    AttachmentTypeBuilder::<Position>::new()
        .persistent(JsonCodec::new())
        .build_and_register(&mut registry, "demo:home")
        .unwrap();

    let attachment = registry
        .get(&Identifier::parse("demo:home").unwrap())
        .unwrap();

    assert_eq!(
        attachment.encode_network(&Position::new(0.0, 0.0)),
        Err(CodecError::NotSynced {
            id: "demo:home".to_string(),
        })
    );
}
