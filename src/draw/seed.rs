//! Draw seeds
//!
//! A seed is the finalized block hash revealed after the giveaway closed.
//! The draw hashes the UTF-8 bytes of the seed string, so two spellings of
//! the same hash must be normalised first: hex seeds are lower-cased, and
//! raw hash bytes are hex-encoded.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

/// A validated, normalised draw seed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed(String);

impl Seed {
    /// Validates and normalises a seed string.
    ///
    /// - empty strings are rejected with [`DrawError::EmptySeed`]
    /// - whitespace or control characters are rejected with
    ///   [`DrawError::MalformedSeed`]
    /// - strings made only of ASCII hex digits are lower-cased
    /// - anything else is kept verbatim
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(DrawError::EmptySeed);
        }

        if let Some(c) = s.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(DrawError::MalformedSeed(format!(
                "unexpected character {:?} in {:?}",
                c, s
            )));
        }

        if s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(Seed(s.to_ascii_lowercase()));
        }

        Ok(Seed(s.to_owned()))
    }

    /// Builds a seed from raw hash bytes, as if the lower-case hex form
    /// had been supplied.
    pub fn from_hash_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(DrawError::EmptySeed);
        }

        Ok(Seed(hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bytes fed to the bit stream.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Seed {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        Seed::parse(s)
    }
}

impl TryFrom<String> for Seed {
    type Error = DrawError;

    fn try_from(value: String) -> Result<Self> {
        Seed::parse(&value)
    }
}

impl From<Seed> for String {
    fn from(value: Seed) -> Self {
        value.0
    }
}
