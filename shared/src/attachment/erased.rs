use std::{
    any::{type_name, Any, TypeId},
    sync::Arc,
};

use naia_serde::{BitReader, FileBitWriter};
use serde_json::Value;

use crate::{codec::CodecError, identifier::Identifier, sync::PeerKey};

use super::attachment_type::AttachmentType;

pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// Type-erased view of an [`AttachmentType`], used to store attachment types
/// of different value types in one registry.
///
/// Values cross this boundary as `dyn Any` and are downcast back to the
/// attachment's value type internally.
pub trait ErasedAttachmentType: Send + Sync {
    fn id(&self) -> &Identifier;
    fn value_type_name(&self) -> &'static str;
    fn value_type_id(&self) -> TypeId;
    fn is_synced(&self) -> bool;
    fn is_persistent(&self) -> bool;
    fn has_initializer(&self) -> bool;
    fn copy_on_death(&self) -> bool;

    fn create_default(&self) -> Option<BoxedValue>;

    fn encode_persistent(&self, value: &dyn Any) -> Result<Value, CodecError>;
    fn decode_persistent(&self, stored: &Value) -> Result<BoxedValue, CodecError>;

    fn encode_network(&self, value: &dyn Any) -> Result<Vec<u8>, CodecError>;
    fn decode_network(&self, bytes: &[u8]) -> Result<BoxedValue, CodecError>;

    /// Evaluates the sync predicate. `None` if the attachment type is not synced.
    fn should_sync(&self, target: Option<PeerKey>, observer: PeerKey) -> Option<bool>;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<A: Send + Sync + 'static> AttachmentType<A> {
    fn downcast_value<'v>(&self, value: &'v dyn Any) -> Result<&'v A, CodecError> {
        value
            .downcast_ref::<A>()
            .ok_or_else(|| CodecError::TypeMismatch {
                id: self.id().to_string(),
                expected: type_name::<A>(),
            })
    }
}

impl<A: Send + Sync + 'static> ErasedAttachmentType for AttachmentType<A> {
    fn id(&self) -> &Identifier {
        AttachmentType::id(self)
    }

    fn value_type_name(&self) -> &'static str {
        type_name::<A>()
    }

    fn value_type_id(&self) -> TypeId {
        TypeId::of::<A>()
    }

    fn is_synced(&self) -> bool {
        AttachmentType::is_synced(self)
    }

    fn is_persistent(&self) -> bool {
        AttachmentType::is_persistent(self)
    }

    fn has_initializer(&self) -> bool {
        self.initializer().is_some()
    }

    fn copy_on_death(&self) -> bool {
        AttachmentType::copy_on_death(self)
    }

    fn create_default(&self) -> Option<BoxedValue> {
        AttachmentType::create_default(self).map(|value| Box::new(value) as BoxedValue)
    }

    fn encode_persistent(&self, value: &dyn Any) -> Result<Value, CodecError> {
        let Some(codec) = self.persistence_codec() else {
            return Err(CodecError::NotPersistent {
                id: self.id().to_string(),
            });
        };
        codec.encode(self.downcast_value(value)?)
    }

    fn decode_persistent(&self, stored: &Value) -> Result<BoxedValue, CodecError> {
        let Some(codec) = self.persistence_codec() else {
            return Err(CodecError::NotPersistent {
                id: self.id().to_string(),
            });
        };
        let value: A = codec.decode(stored)?;
        Ok(Box::new(value))
    }

    fn encode_network(&self, value: &dyn Any) -> Result<Vec<u8>, CodecError> {
        let Some(codec) = self.network_codec() else {
            return Err(CodecError::NotSynced {
                id: self.id().to_string(),
            });
        };
        let value = self.downcast_value(value)?;

        let mut writer = FileBitWriter::new();
        codec.write(value, &mut writer);
        Ok(writer.to_bytes().to_vec())
    }

    fn decode_network(&self, bytes: &[u8]) -> Result<BoxedValue, CodecError> {
        let Some(codec) = self.network_codec() else {
            return Err(CodecError::NotSynced {
                id: self.id().to_string(),
            });
        };

        let mut reader = BitReader::new(bytes);
        let value: A = codec
            .read(&mut reader)
            .map_err(|_| CodecError::Malformed {
                id: self.id().to_string(),
            })?;
        Ok(Box::new(value))
    }

    fn should_sync(&self, target: Option<PeerKey>, observer: PeerKey) -> Option<bool> {
        self.sync_predicate()
            .map(|predicate| predicate.should_sync(target, observer))
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
