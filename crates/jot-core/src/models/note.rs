//! Note model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

use crate::util::unix_timestamp_now_ms;

/// A unique identifier for a note.
///
/// Ids are the note's creation time in Unix milliseconds, made strictly
/// increasing by [`NoteIdGenerator`] so two notes created within the same
/// clock tick still get distinct ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw millisecond timestamp as an id
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The raw millisecond value of this id
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (creation time, Unix ms)
    pub id: NoteId,
    /// Plain text content
    pub text: String,
}

impl Note {
    /// Create a note with an already-issued id
    #[must_use]
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// First `max_chars` characters of the text, for list display
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }

    /// Check if note text is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Issues strictly increasing note ids anchored to the wall clock.
///
/// Each id is `max(now_ms, last_issued + 1)`, so ids stay real creation
/// timestamps under normal pacing and still never collide when notes are
/// added faster than the clock resolution.
#[derive(Debug, Default)]
pub struct NoteIdGenerator {
    last: AtomicI64,
}

impl NoteIdGenerator {
    /// Generator with no history; the first id is the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Generator seeded so new ids sort after every existing note
    #[must_use]
    pub fn seeded(notes: &[Note]) -> Self {
        let last = notes
            .iter()
            .map(|note| note.id.as_millis())
            .max()
            .unwrap_or(0);
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// Issue the next id
    pub fn next_id(&self) -> NoteId {
        let now = unix_timestamp_now_ms();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        NoteId::from_millis(now.max(previous + 1))
    }
}
