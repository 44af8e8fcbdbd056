use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{DrawError, Result};

/// Ordered, duplicate-free list of giveaway entries.
///
/// Order is registration order and is part of the draw's input: the same
/// seed over a reordered pool picks different winners. A pool belongs to
/// one giveaway; nothing is shared between giveaways.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParticipantPool<T> {
    entries: Vec<T>,
}

impl<T> Default for ParticipantPool<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Clone + Eq + Hash + Debug> ParticipantPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pool from an ordered list, rejecting duplicates.
    pub fn from_vec(entries: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if !seen.insert(entry) {
                return Err(DrawError::DuplicateParticipant(format!("{:?}", entry)));
            }
        }

        Ok(Self { entries })
    }

    /// Builds a pool from a borrowed slice, rejecting duplicates.
    pub fn from_slice(entries: &[T]) -> Result<Self> {
        Self::from_vec(entries.to_vec())
    }

    /// Registers a participant at the end of the pool.
    ///
    /// A participant already in the pool is rejected and the pool is left
    /// unchanged.
    pub fn push(&mut self, entry: T) -> Result<()> {
        if self.entries.contains(&entry) {
            return Err(DrawError::DuplicateParticipant(format!("{:?}", entry)));
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }
}

impl<T> ParticipantPool<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Removes every entry, e.g. when a giveaway is reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<'a, T> IntoIterator for &'a ParticipantPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
