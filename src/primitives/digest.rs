//! 256-bit digest value
//!
//! `Digest` is the immutable 32-byte output of the hash engine. It is a
//! plain value type: bytes in, bytes out, with a hexadecimal form for
//! display and publication.
//!
//! The byte order is the one produced by SHA-256 (big-endian words
//! serialized in order), which is also the order of the usual hex form.

use std::fmt::{self, Display, Formatter, LowerHex};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DrawError, Result};

/// Fixed-size 256-bit hash output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Number of bytes in a digest.
    pub const LEN: usize = 32;

    /// Number of bits in a digest.
    pub const BITS: usize = 256;

    /// The all-zero digest.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Parses a digest from 64 hexadecimal characters.
    ///
    /// Upper- and lower-case digits are both accepted.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut out = [0u8; 32];

        hex::decode_to_slice(s, &mut out).map_err(|e| DrawError::InvalidHex(e.to_string()))?;

        Ok(Digest(out))
    }

    /// Returns the lower-case hexadecimal form (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Borrows the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns bit `index` of the digest.
    ///
    /// Bits are numbered byte by byte, least significant bit first:
    /// bit `i` is `(byte[i / 8] >> (i % 8)) & 1`.
    ///
    /// # Panics
    /// Panics if `index >= 256`.
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        (self.0[index >> 3] >> (index & 7)) & 1
    }
}

impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    /// Formats the digest as 64 lower-case hexadecimal characters, the
    /// form block explorers publish.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_is_lowercase() {
        let upper = "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";
        let digest = Digest::from_hex(upper).unwrap();

        assert_eq!(digest.to_hex(), upper.to_lowercase());
        assert_eq!(format!("{}", digest), upper.to_lowercase());
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(Digest::from_hex("abcd"), Err(DrawError::InvalidHex(_))));
        assert!(matches!(Digest::from_hex(""), Err(DrawError::InvalidHex(_))));
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert!(matches!(Digest::from_hex(&bad), Err(DrawError::InvalidHex(_))));
    }

    #[test]
    fn bits_are_lsb_first_within_each_byte() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0b0000_0101;
        bytes[31] = 0b1000_0000;
        let digest = Digest::from(bytes);

        assert_eq!(digest.bit(0), 1);
        assert_eq!(digest.bit(1), 0);
        assert_eq!(digest.bit(2), 1);
        assert_eq!(digest.bit(7), 0);
        assert_eq!(digest.bit(8), 0);
        assert_eq!(digest.bit(255), 1);
        assert_eq!(digest.bit(254), 0);
    }

    #[test]
    fn serde_uses_hex_string() {
        let digest = Digest::from([0xabu8; 32]);
        let json = serde_json::to_string(&digest).unwrap();

        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
