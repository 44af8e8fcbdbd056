//! Deterministic bit generation
//!
//! This module turns a seed into a reproducible stream of fair coin flips.
//!
//! It is built around SHA-256 used as a hash-chain generator: the seed is
//! hashed once, the 256 bits of the digest are handed out one at a time,
//! and the digest is re-hashed with a round counter whenever it runs dry.
//!
//! Design goals:
//! - Full reproducibility from the seed alone
//! - No hidden entropy and no global state
//! - No heap allocation
//! - Minimal and explicit API surface
mod bitstream;

pub use bitstream::BitStream;

/// A source of fair coin flips.
///
/// The sampler is generic over this trait so that it can run on the hash
/// chain in production and on scripted bit sequences in tests.
pub trait BitSource {
    /// Draws the next bit. The returned value is always `0` or `1`.
    fn next_bit(&mut self) -> u8;
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    fn next_bit(&mut self) -> u8 {
        (**self).next_bit()
    }
}
