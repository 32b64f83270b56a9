use std::marker::PhantomData;

use naia_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Converts attachment values to and from wire bits
pub trait NetworkCodec<A>: Send + Sync {
    fn write(&self, value: &A, writer: &mut dyn BitWrite);
    fn read(&self, reader: &mut BitReader) -> Result<A, SerdeErr>;
}

/// Network codec for any value with a naia `Serde` representation
pub struct WireCodec<A> {
    phantom_a: PhantomData<fn() -> A>,
}

impl<A> WireCodec<A> {
    pub fn new() -> Self {
        Self {
            phantom_a: PhantomData,
        }
    }
}

impl<A> Default for WireCodec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Serde> NetworkCodec<A> for WireCodec<A> {
    fn write(&self, value: &A, writer: &mut dyn BitWrite) {
        value.ser(writer);
    }

    fn read(&self, reader: &mut BitReader) -> Result<A, SerdeErr> {
        A::de(reader)
    }
}
