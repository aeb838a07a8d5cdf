//! Identifier types for seed records.
//!
//! Most tables are keyed by a short identifier: the first [`SHORT_ID_LEN`] hex
//! characters of a random v4 UUID. Horoscope methods are keyed by a sequential
//! integer.
//!
//! # Macro-based ID Types
//!
//! The `short_id_type!` macro reduces boilerplate for the short identifier types,
//! ensuring consistent implementation of serialization, parsing, and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a generated short identifier.
pub const SHORT_ID_LEN: usize = 16;

/// Longest identifier accepted when parsing (fixture ids are longer than generated ones).
const MAX_ID_LEN: usize = 64;

/// Macro to define a short-string identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as string)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`
/// - `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// short_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::from_random_bytes([7; 16]);
/// let parsed: MyId = id.to_string().parse().unwrap();
/// ```
macro_rules! short_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from a UUID, keeping its first hex characters.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                let mut simple = uuid.simple().to_string();
                simple.truncate(SHORT_ID_LEN);
                Self(simple)
            }

            /// Create an identifier from 16 random bytes (shaped into a v4 UUID first).
            #[must_use]
            pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
                Self::from_uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
            }

            /// Generate a new identifier from the operating system's randomness.
            #[must_use]
            pub fn generate() -> Self {
                Self::from_uuid(uuid::Uuid::new_v4())
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_short_id(s)?;
                Ok(Self(s.to_owned()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate_short_id(&value)?;
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

short_id_type!(AccountId, "An account identifier.");
short_id_type!(CustomerId, "A customer profile identifier.");
short_id_type!(ProphetId, "A prophet profile identifier.");
short_id_type!(AdminId, "An admin profile identifier.");
short_id_type!(CourseId, "A course identifier.");
short_id_type!(BookingId, "A booking identifier.");
short_id_type!(TransactionId, "A payment transaction identifier.\n\nExactly one transaction exists per booking.");
short_id_type!(TransactionAccountId, "A prophet payout bank account identifier.");
short_id_type!(ReviewId, "A review identifier.");
short_id_type!(ReportId, "A customer report identifier.");

fn validate_short_id(s: &str) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.len() > MAX_ID_LEN {
        return Err(IdError::TooLong { len: s.len() });
    }
    if let Some(c) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(IdError::InvalidCharacter(c));
    }
    Ok(())
}

/// A horoscope method identifier (sequential, starting at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(u32);

impl MethodId {
    /// Create a method identifier from its sequence number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Return the sequence number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MethodId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| IdError::InvalidSequence)
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is empty.
    #[error("identifier is empty")]
    Empty,

    /// The input exceeds the maximum identifier length.
    #[error("identifier too long: {len} characters")]
    TooLong {
        /// Length of the rejected input.
        len: usize,
    },

    /// The input contains a character outside `[A-Za-z0-9_]`.
    #[error("invalid character in identifier: {0:?}")]
    InvalidCharacter(char),

    /// The input is not a valid sequence number.
    #[error("invalid sequence number")]
    InvalidSequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_short_lowercase_hex() {
        let id = AccountId::generate();
        assert_eq!(id.as_str().len(), SHORT_ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn random_bytes_are_deterministic() {
        let a = BookingId::from_random_bytes([42; 16]);
        let b = BookingId::from_random_bytes([42; 16]);
        let c = BookingId::from_random_bytes([43; 16]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn fixture_style_ids_parse() {
        let id: CustomerId = "dev_customer_001".parse().unwrap();
        assert_eq!(id.to_string(), "dev_customer_001");
    }

    #[test]
    fn invalid_ids_are_rejected() {
        assert_eq!(ProphetId::from_str(""), Err(IdError::Empty));
        assert_eq!(
            ProphetId::from_str("has space"),
            Err(IdError::InvalidCharacter(' '))
        );
        assert_eq!(
            ProphetId::from_str(&"a".repeat(65)),
            Err(IdError::TooLong { len: 65 })
        );
    }

    #[test]
    fn short_id_serde_json() {
        let id = CourseId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: CourseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn method_id_is_transparent_integer() {
        let id = MethodId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!("7".parse::<MethodId>().unwrap(), id);
        assert_eq!("x".parse::<MethodId>(), Err(IdError::InvalidSequence));
    }
}
