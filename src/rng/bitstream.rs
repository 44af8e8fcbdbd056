//! SHA-256 hash-chain bit stream
//!
//! The stream holds one 256-bit digest and a cursor into it. Bits are read
//! byte by byte, least significant bit first. Once all 256 bits have been
//! consumed, the next read first re-keys the stream:
//!
//! ```text
//! digest' = SHA-256(digest || round mod 256)
//! round   = round + 1
//! ```
//!
//! and then returns bit 0 of the new digest. Re-keying is lazy: a stream
//! that has consumed exactly 256 bits has not hashed anything yet.
//!
//! The nonce is a single byte. The round counter itself is a `u64`, and
//! the byte appended is its value modulo 256, so rounds 0 and 256 use the
//! same nonce over different digests.

use tracing::trace;

use super::BitSource;
use crate::hash::sha256;
use crate::primitives::Digest;

/// Reproducible bit stream derived from a single seed.
///
/// A stream is owned by exactly one draw. It is cheap to create and is
/// never shared or persisted: each giveaway starts from a fresh seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitStream {
    /// Current 256-bit block of output.
    digest: Digest,

    /// Number of re-keys performed so far.
    round: u64,

    /// Next bit to read from `digest`, in `0..=256`. 256 means exhausted.
    index: usize,

    /// Total number of bits handed out.
    consumed: u64,
}

impl BitStream {
    /// Creates a stream seeded with `SHA-256(seed)`.
    pub fn new(seed: &[u8]) -> Self {
        Self::from_digest(sha256(seed))
    }

    /// Creates a stream whose first block is `digest` itself.
    pub fn from_digest(digest: Digest) -> Self {
        Self {
            digest,
            round: 0,
            index: 0,
            consumed: 0,
        }
    }

    /// Number of re-keys performed so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Position of the next bit inside the current block.
    pub fn bit_index(&self) -> usize {
        self.index
    }

    /// Total number of bits drawn from this stream.
    pub fn bits_consumed(&self) -> u64 {
        self.consumed
    }

    /// The block bits are currently read from.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    fn rekey(&mut self) {
        let mut input = [0u8; Digest::LEN + 1];
        input[..Digest::LEN].copy_from_slice(self.digest.as_bytes());
        input[Digest::LEN] = (self.round % 256) as u8;

        self.digest = sha256(&input);
        self.round += 1;
        self.index = 0;

        trace!(round = self.round, digest = %self.digest, "bit stream re-keyed");
    }
}

impl BitSource for BitStream {
    fn next_bit(&mut self) -> u8 {
        if self.index == Digest::BITS {
            self.rekey();
        }

        let bit = self.digest.bit(self.index);
        self.index += 1;
        self.consumed += 1;

        bit
    }
}

impl Iterator for BitStream {
    type Item = u8;

    /// Never returns `None`: the stream is unbounded.
    fn next(&mut self) -> Option<u8> {
        Some(self.next_bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stream_starts_at_round_zero() {
        let stream = BitStream::new(b"seed");

        assert_eq!(stream.round(), 0);
        assert_eq!(stream.bit_index(), 0);
        assert_eq!(stream.bits_consumed(), 0);
        assert_eq!(stream.digest(), sha256(b"seed"));
    }

    #[test]
    fn first_block_reads_digest_lsb_first() {
        let digest = sha256(b"abc");
        let mut stream = BitStream::from_digest(digest);

        for i in 0..256 {
            assert_eq!(stream.next_bit(), digest.bit(i), "bit {}", i);
        }

        assert_eq!(stream.round(), 0);
        assert_eq!(stream.bit_index(), 256);
    }

    #[test]
    fn rekey_is_lazy_and_appends_round_byte() {
        let digest = sha256(b"abc");
        let mut stream = BitStream::from_digest(digest);

        for _ in 0..256 {
            stream.next_bit();
        }
        assert_eq!(stream.digest(), digest);

        let bit = stream.next_bit();

        let mut input = digest.as_bytes().to_vec();
        input.push(0);
        let expected = sha256(&input);

        assert_eq!(stream.digest(), expected);
        assert_eq!(stream.round(), 1);
        assert_eq!(stream.bit_index(), 1);
        assert_eq!(bit, expected.bit(0));
    }

    #[test]
    fn round_byte_wraps_modulo_256() {
        let mut stream = BitStream::new(b"wrap");
        stream.round = 256;
        stream.index = 256;
        let before = stream.digest();

        stream.next_bit();

        let mut input = before.as_bytes().to_vec();
        input.push(0);
        assert_eq!(stream.digest(), sha256(&input));
        assert_eq!(stream.round(), 257);
    }
}
