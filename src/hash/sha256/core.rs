//! SHA-256 core hashing functions
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input
//!
//! Padding follows the Merkle–Damgård scheme: a single `0x80` byte, zeros,
//! then the message length in bits as a 64-bit big-endian integer, so the
//! padded message is a multiple of 64 bytes.

use super::H256_INIT;
use super::computations::all_rounds;
use crate::primitives::Digest;

/// Compresses a single 512-bit message block into `state`.
///
/// Input words are interpreted as big-endian.
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, w);
}

/// Computes the SHA-256 digest of `input`.
///
/// Total over all inputs, including the empty message. No heap
/// allocation is performed.
pub fn sha256(input: &[u8]) -> Digest {
    let mut state = H256_INIT;

    let mut blocks = input.chunks_exact(64);

    for chunk in blocks.by_ref() {
        let mut block = [0u8; 64];
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    let rem = blocks.remainder();

    let mut block = [0u8; 64];
    block[..rem.len()].copy_from_slice(rem);
    block[rem.len()] = 0x80;

    // No room left for the 8-byte length field.
    if rem.len() > 55 {
        compress(&block, &mut state);
        block = [0; 64];
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    Digest::from(out)
}
