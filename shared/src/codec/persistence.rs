use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::error::CodecError;

/// Converts attachment values to and from their stored representation
pub trait PersistenceCodec<A>: Send + Sync {
    fn encode(&self, value: &A) -> Result<Value, CodecError>;
    fn decode(&self, stored: &Value) -> Result<A, CodecError>;
}

/// Stores any serde-compatible value as JSON
pub struct JsonCodec<A> {
    phantom_a: PhantomData<fn() -> A>,
}

impl<A> JsonCodec<A> {
    pub fn new() -> Self {
        Self {
            phantom_a: PhantomData,
        }
    }
}

impl<A> Default for JsonCodec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Serialize + DeserializeOwned> PersistenceCodec<A> for JsonCodec<A> {
    fn encode(&self, value: &A) -> Result<Value, CodecError> {
        Ok(serde_json::to_value(value)?)
    }

    fn decode(&self, stored: &Value) -> Result<A, CodecError> {
        Ok(A::deserialize(stored)?)
    }
}
