//! Data models shared across Jot interfaces.

mod note;

pub use note::{Note, NoteId, NoteIdGenerator};
