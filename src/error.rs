use thiserror::Error;

/// Errors reported by the draw engine.
///
/// Every variant describes a caller error detected before any work is
/// done. Once inputs are valid, hashing and sampling cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("participant list is empty")]
    EmptyParticipants,

    #[error("winner count {requested} outside 1..={available}")]
    InvalidWinnerCount { requested: usize, available: usize },

    #[error("participant registered twice: {0}")]
    DuplicateParticipant(String),

    #[error("seed is empty")]
    EmptySeed,

    #[error("malformed seed: {0}")]
    MalformedSeed(String),

    #[error("cannot sample from an empty range")]
    EmptyRange,

    #[error("invalid hex digest: {0}")]
    InvalidHex(String),

    #[error("invalid giveaway config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DrawError>;
