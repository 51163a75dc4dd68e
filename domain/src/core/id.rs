//! Identifier types for the question aggregate.
//!
//! - [`QuestionId`] — process-unique identifier for a question
//! - [`ChoiceId`] — identifier unique within one question
//! - [`QuestionIdSource`] / [`SequentialIdSource`] — id allocation

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier for a question.
///
/// Assigned once at creation and never changed. Two questions created in
/// the same process always carry distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a QuestionId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Allocates a fresh id from the shared process-wide source.
    pub(crate) fn fresh() -> Self {
        PROCESS_IDS.next_id()
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a choice within its owning question.
///
/// Assigned sequentially starting at 1 in creation order, and never reused
/// even after the choice is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(u32);

impl ChoiceId {
    /// Creates a ChoiceId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates process-unique question ids.
///
/// Ids handed out by one source never repeat. Implementations must be safe
/// to call from multiple threads.
pub trait QuestionIdSource {
    /// Returns the next unused id.
    fn next_id(&self) -> QuestionId;
}

/// Monotonic id source backed by an atomic counter.
///
/// One fetch-add per id, no locking. Tests that need deterministic ids can
/// hold their own instance via [`SequentialIdSource::starting_at`].
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    /// Creates a source that yields `first`, `first + 1`, and so on.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl QuestionIdSource for SequentialIdSource {
    fn next_id(&self) -> QuestionId {
        QuestionId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

static PROCESS_IDS: SequentialIdSource = SequentialIdSource::starting_at(1);
