//! Primitive types
//!
//! This module defines the low-level value types shared by the hash
//! engine, the bit stream and the draw transcript.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They intentionally expose only what the draw needs.
//!
//! Current primitives include:
//! - `Digest`: the 256-bit output of SHA-256

mod digest;

pub use digest::Digest;
