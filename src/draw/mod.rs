//! Winner selection
//!
//! A draw maps `(seed, ordered participants, winner count)` to an ordered
//! list of winners:
//!
//! 1. a [`BitStream`] is seeded with the seed bytes
//! 2. a position is sampled uniformly from the remaining pool
//! 3. that participant is appended to the winners and removed from the
//!    pool, and step 2 repeats until enough winners are drawn
//!
//! Removal preserves the relative order of the remaining participants, so
//! any independent implementation following the same steps reproduces the
//! result bit for bit.

mod pool;
mod seed;

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DrawError, Result};
use crate::primitives::Digest;
use crate::rng::BitStream;
use crate::sample::index_below;

pub use pool::ParticipantPool;
pub use seed::Seed;

/// Full record of a draw, sufficient for a third party to audit it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawOutcome<T> {
    /// Normalised seed the stream was built from.
    pub seed: Seed,

    /// `SHA-256(seed)`, the first block of the bit stream.
    pub digest: Digest,

    /// Sampled position for each pick, relative to the pool as it stood
    /// at that pick.
    pub positions: Vec<usize>,

    /// Winners in the order they were drawn.
    pub winners: Vec<T>,

    /// Bits read from the stream over the whole draw.
    pub bits_consumed: u64,

    /// Number of times the stream re-keyed.
    pub rekeys: u64,
}

/// Selects `winners` distinct participants using `seed` as entropy.
///
/// This is the plain entry point: it validates the raw inputs and returns
/// only the winners. See [`draw`] for the audit transcript.
///
/// # Errors
/// - [`DrawError::EmptySeed`] / [`DrawError::MalformedSeed`] for a bad seed
/// - [`DrawError::EmptyParticipants`] when `participants` is empty
/// - [`DrawError::DuplicateParticipant`] when an entry appears twice
/// - [`DrawError::InvalidWinnerCount`] unless `1 <= winners <= len`
pub fn select_winners<T>(seed: &str, participants: &[T], winners: usize) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    let seed = Seed::parse(seed)?;
    let pool = ParticipantPool::from_slice(participants)?;

    draw(&seed, &pool, winners).map(|outcome| outcome.winners)
}

/// Runs a draw and returns its full transcript.
///
/// Arguments are checked before any hashing happens; on error nothing has
/// been computed.
pub fn draw<T>(seed: &Seed, pool: &ParticipantPool<T>, winners: usize) -> Result<DrawOutcome<T>>
where
    T: Clone + Debug,
{
    if pool.is_empty() {
        return Err(DrawError::EmptyParticipants);
    }

    if winners == 0 || winners > pool.len() {
        return Err(DrawError::InvalidWinnerCount {
            requested: winners,
            available: pool.len(),
        });
    }

    let mut stream = BitStream::new(seed.as_bytes());
    let digest = stream.digest();

    let mut remaining: Vec<T> = pool.as_slice().to_vec();
    let mut positions = Vec::with_capacity(winners);
    let mut chosen = Vec::with_capacity(winners);

    for pick in 0..winners {
        let position = index_below(&mut stream, remaining.len())?;
        let winner = remaining.remove(position);

        debug!(
            pick,
            position,
            remaining = remaining.len(),
            winner = ?winner,
            "winner drawn"
        );

        positions.push(position);
        chosen.push(winner);
    }

    info!(
        seed = %seed,
        participants = pool.len(),
        winners,
        bits = stream.bits_consumed(),
        rekeys = stream.round(),
        "draw complete"
    );

    Ok(DrawOutcome {
        seed: seed.clone(),
        digest,
        positions,
        winners: chosen,
        bits_consumed: stream.bits_consumed(),
        rekeys: stream.round(),
    })
}

/// Recomputes a draw and checks it against a published list of winners.
///
/// Returns `Ok(false)` when the claimed winners differ in identity or
/// order from the recomputed ones.
pub fn verify_winners<T>(seed: &Seed, pool: &ParticipantPool<T>, claimed: &[T]) -> Result<bool>
where
    T: Clone + Debug + PartialEq,
{
    let outcome = draw(seed, pool, claimed.len())?;

    Ok(outcome.winners == claimed)
}
