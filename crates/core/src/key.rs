//! Key escaping for Starfire
//!
//! Logical keys are hierarchical strings (`users/42/profile`). The document
//! store wants flat identifiers, so every separator is swapped for a reserved
//! delimiter before a key touches the store (`users:42:profile`).
//!
//! ## Contract
//!
//! - `encode` and `decode` are pure, total and length-preserving
//! - `decode(encode(k)) == k` for every key that does not contain the delimiter
//! - Keys containing the delimiter are rejected by [`KeyCodec::validate`];
//!   they would decode to a different key and break the bijection
//!
//! ## Ordering
//!
//! Range queries compare the *escaped* form. With the default pair
//! (`'/'` = 0x2F, `':'` = 0x3A) the ten ASCII digits sort between the two
//! characters, so `a/b < a0` holds for logical keys while `a:b > a0` holds for
//! their identifiers. Ordering is defined over identifiers.

use thiserror::Error;

/// Default hierarchical separator in logical keys
pub const DEFAULT_SEPARATOR: char = '/';

/// Default reserved delimiter used in storage identifiers
pub const DEFAULT_DELIMITER: char = ':';

/// Bijective mapping between logical keys and storage identifiers
///
/// # Examples
///
/// ```
/// use starfire_core::KeyCodec;
///
/// let codec = KeyCodec::default();
/// assert_eq!(codec.encode("a/b/c"), "a:b:c");
/// assert_eq!(codec.decode("a:b:c"), "a/b/c");
/// assert!(codec.validate("a:b").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCodec {
    separator: char,
    delimiter: char,
}

impl Default for KeyCodec {
    fn default() -> Self {
        KeyCodec {
            separator: DEFAULT_SEPARATOR,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl KeyCodec {
    /// Create a codec for a custom separator/delimiter pair
    ///
    /// The two characters must differ, otherwise encoding is the identity and
    /// validation would reject every hierarchical key.
    pub fn new(separator: char, delimiter: char) -> Result<Self, KeyError> {
        if separator == delimiter {
            return Err(KeyError::IndistinctPair { ch: separator });
        }
        Ok(KeyCodec {
            separator,
            delimiter,
        })
    }

    /// Separator accepted inside logical keys
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Delimiter reserved for storage identifiers
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Escape a logical key into a storage identifier
    pub fn encode(&self, key: &str) -> String {
        swap(key, self.separator, self.delimiter)
    }

    /// Recover the logical key from a storage identifier
    pub fn decode(&self, id: &str) -> String {
        swap(id, self.delimiter, self.separator)
    }

    /// Reject keys that would not survive a round trip
    pub fn validate(&self, key: &str) -> Result<(), KeyError> {
        if key.contains(self.delimiter) {
            return Err(KeyError::ReservedCharacter {
                delimiter: self.delimiter,
            });
        }
        Ok(())
    }
}

fn swap(input: &str, from: char, to: char) -> String {
    input
        .chars()
        .map(|c| if c == from { to } else { c })
        .collect()
}

/// Key validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Logical key contains the reserved delimiter
    #[error("The '{delimiter}' is a reserved character.")]
    ReservedCharacter {
        /// The reserved delimiter that was found
        delimiter: char,
    },

    /// Separator and delimiter are the same character
    #[error("separator and delimiter must differ, both are '{ch}'")]
    IndistinctPair {
        /// The duplicated character
        ch: char,
    },
}

impl KeyError {
    /// Short machine-readable reason
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::ReservedCharacter { .. } => "reserved_character",
            KeyError::IndistinctPair { .. } => "indistinct_pair",
        }
    }
}
