//! Giveaway descriptions
//!
//! A giveaway is announced with a prize, a target block height and a
//! winner count; participants register until the target block is mined,
//! and its hash becomes the seed. This module reads such a description
//! from JSON so a draw can be re-run and audited offline:
//!
//! ```json
//! {
//!   "prize": "A hug",
//!   "target_block": 840123,
//!   "winners": 2,
//!   "participants": ["alice", "bob", "carol"],
//!   "seed": "00000000000000000002a7c4..."
//! }
//! ```
//!
//! Only `participants` is required. `winners` defaults to 1 and the seed
//! may be supplied separately once the block is known.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draw::{ParticipantPool, Seed};
use crate::error::{DrawError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawayConfig {
    #[serde(default)]
    pub prize: Option<String>,

    /// Block height whose hash seeds the draw.
    #[serde(default)]
    pub target_block: Option<u64>,

    #[serde(default = "default_winners")]
    pub winners: usize,

    /// Entries in registration order.
    pub participants: Vec<String>,

    /// Revealed block hash, once known.
    #[serde(default)]
    pub seed: Option<String>,
}

fn default_winners() -> usize {
    1
}

impl GiveawayConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DrawError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DrawError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&raw)
    }

    /// Checks the participant list and winner count.
    pub fn validate(&self) -> Result<()> {
        let pool = ParticipantPool::from_slice(&self.participants)?;

        if pool.is_empty() {
            return Err(DrawError::EmptyParticipants);
        }

        if self.winners == 0 || self.winners > pool.len() {
            return Err(DrawError::InvalidWinnerCount {
                requested: self.winners,
                available: pool.len(),
            });
        }

        Ok(())
    }

    /// Produces the draw inputs.
    ///
    /// `seed_override` takes precedence over the seed stored in the
    /// config. A config without any seed cannot be drawn yet.
    pub fn resolve(&self, seed_override: Option<&str>) -> Result<(Seed, ParticipantPool<String>)> {
        self.validate()?;

        let raw = seed_override
            .or(self.seed.as_deref())
            .ok_or_else(|| DrawError::Config("no seed: target block not revealed yet".into()))?;

        let seed = Seed::parse(raw)?;
        let pool = ParticipantPool::from_slice(&self.participants)?;

        Ok((seed, pool))
    }
}
