// Wire framing limits

/// Maximum length, in bytes, of the textual form of an Identifier that is
/// allowed to travel on the wire.
///
/// Only synchronized attachment types are checked against this limit, since
/// unsynchronized ones never have their Identifier serialized.
pub const MAX_IDENTIFIER_SIZE: usize = 256;

/// Number of payload bits per group in a variable-length unsigned integer.
pub const VARIABLE_LENGTH_GROUP_BITS: u8 = 7;
