//! Person identifier.
//!
//! Identifiers are 12 bytes rendered as 24 lowercase hex characters:
//!
//! ```text
//! | 4 bytes          | 5 bytes            | 3 bytes         |
//! | unix seconds, BE | per-process random | counter, BE     |
//! ```
//!
//! They sort roughly by creation time and are never reused.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of raw bytes in an identifier.
const ID_BYTES: usize = 12;

/// Counter values wrap at 24 bits.
const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Opaque, store-generated identifier of a person record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Length of the textual form.
    pub const LEN: usize = ID_BYTES * 2;

    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self::generate_at(chrono::Utc::now().timestamp())
    }

    fn generate_at(unix_secs: i64) -> Self {
        let process = PROCESS_UNIQUE.get_or_init(rand::random);
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0u8; ID_BYTES];
        // Truncation to 32 bits is part of the format.
        bytes[..4].copy_from_slice(&(unix_secs as u32).to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        let mut text = String::with_capacity(Self::LEN);
        for b in bytes {
            text.push_str(&format!("{b:02x}"));
        }
        Self(text)
    }

    /// Whether `s` has the shape of an identifier.
    ///
    /// Purely syntactic: says nothing about whether a record with this
    /// identifier exists.
    pub fn is_valid(s: &str) -> bool {
        s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse an identifier, normalizing hex digits to lowercase.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(CoreError::Validation(format!(
                "'{s}' is not a valid person id ({} hex characters expected)",
                Self::LEN
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}
