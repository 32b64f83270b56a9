use std::{fmt, str::FromStr};

use naia_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};
use thiserror::Error;

use crate::constants::{MAX_IDENTIFIER_SIZE, VARIABLE_LENGTH_GROUP_BITS};

type IdentifierLength = UnsignedVariableInteger<VARIABLE_LENGTH_GROUP_BITS>;

/// Errors that can occur when constructing an Identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// No identifier was supplied
    #[error("Identifier cannot be empty")]
    Empty,

    /// Textual form did not contain the `namespace:path` separator
    #[error("Identifier '{value}' is missing the ':' separator between namespace and path")]
    MissingSeparator { value: String },

    /// Namespace half was empty
    #[error("Identifier '{value}' has an empty namespace")]
    EmptyNamespace { value: String },

    /// Path half was empty
    #[error("Identifier '{value}' has an empty path")]
    EmptyPath { value: String },

    /// Namespace contained a character outside `[a-z0-9_.-]`
    #[error("Non [a-z0-9_.-] character '{character}' in namespace of identifier '{value}'")]
    InvalidNamespaceCharacter { value: String, character: char },

    /// Path contained a character outside `[a-z0-9/_.-]`
    #[error("Non [a-z0-9/_.-] character '{character}' in path of identifier '{value}'")]
    InvalidPathCharacter { value: String, character: char },
}

/// A globally unique `namespace:path` key.
///
/// Identifiers are validated on construction, so any Identifier value is
/// guaranteed to have a non-empty namespace and path made only of the allowed
/// characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {
        let value = format!("{}:{}", namespace, path);

        if namespace.is_empty() {
            return Err(IdentifierError::EmptyNamespace { value });
        }
        if path.is_empty() {
            return Err(IdentifierError::EmptyPath { value });
        }
        if let Some(character) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(IdentifierError::InvalidNamespaceCharacter { value, character });
        }
        if let Some(character) = path.chars().find(|c| !is_path_char(*c)) {
            return Err(IdentifierError::InvalidPathCharacter { value, character });
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parses the `namespace:path` textual form
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let Some((namespace, path)) = value.split_once(':') else {
            return Err(IdentifierError::MissingSeparator {
                value: value.to_string(),
            });
        };

        Self::new(namespace, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Length in bytes of the textual form as it appears on the wire
    pub fn wire_len(&self) -> usize {
        self.namespace.len() + 1 + self.path.len()
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// Identifiers travel as a variable-length byte count followed by the textual
// form, capped at MAX_IDENTIFIER_SIZE
impl Serde for Identifier {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let text = self.to_string();
        IdentifierLength::new(text.len() as u64).ser(writer);
        for byte in text.bytes() {
            byte.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = usize::try_from(IdentifierLength::de(reader)?.get()).map_err(|_| SerdeErr)?;
        if length > MAX_IDENTIFIER_SIZE {
            return Err(SerdeErr);
        }

        let mut bytes = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(u8::de(reader)?);
        }
        let text = String::from_utf8(bytes).map_err(|_| SerdeErr)?;
        Identifier::parse(&text).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        let length = self.wire_len();
        IdentifierLength::new(length as u64).bit_length() + (length as u32) * 8
    }
}
