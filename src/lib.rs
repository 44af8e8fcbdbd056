//! Provably fair giveaway draws from public block hashes
//!
//! This crate turns a single piece of public entropy, the hash of a
//! blockchain block announced before the giveaway closes, into a
//! reproducible and unbiased selection of winners. Anyone who knows the
//! revealed block hash and the ordered participant list can recompute the
//! exact same result.
//!
//! The focus is on **auditability and determinism**: every step from seed
//! to winner is a pure function of its explicit inputs, with no global
//! state and no hidden randomness.
//!
//! # Module overview
//!
//! - `primitives`
//!   The fixed-size `Digest` value produced by the hash engine, with its
//!   byte, bit and hexadecimal views.
//!
//! - `hash`
//!   A pure-Rust SHA-256 implementation. The draw depends on this function
//!   only; it is tested against published vectors and the `sha2` crate.
//!
//! - `rng`
//!   The bit-stream generator. It stretches one digest into an unbounded,
//!   deterministic stream of bits by re-hashing itself every 256 bits.
//!
//! - `sample`
//!   The unbiased integer sampler (Lumbroso's fast dice roller). It maps
//!   coin flips to a uniform integer in `[0, max)` with no modulo bias.
//!
//! - `draw`
//!   Seed validation, participant pools and winner selection without
//!   replacement, plus the audit transcript of a draw.
//!
//! - `config`
//!   JSON giveaway descriptions used by the `fairdraw` command-line
//!   auditor.
//!
//! # Trust model
//!
//! The crate does not fetch block hashes and does not check that the seed
//! it receives is the authentic hash of a finalized block. Watching block
//! heights and deciding when a draw may run belongs to the caller.

pub mod config;
pub mod draw;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod rng;
pub mod sample;

pub use draw::{DrawOutcome, ParticipantPool, Seed, draw, select_winners, verify_winners};
pub use error::{DrawError, Result};
pub use primitives::Digest;
