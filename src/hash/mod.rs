//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation. It is the
//! only hash the draw depends on: seeding and re-keying both go through it.

pub mod sha256;

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;
