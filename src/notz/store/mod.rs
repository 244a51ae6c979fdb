//! # Storage Layer
//!
//! This module defines the storage abstraction for notz. The [`NoteStore`]
//! trait keeps the command layer decoupled from how notes are held.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: the production store. An ordered in-memory
//!   list; notes live for one process and are gone at exit.
//!
//! There is deliberately no persistent backend — the application is
//! session-scoped by design. The trait still returns `Result` everywhere so
//! a fallible backend could be slotted in without touching the commands.
//!
//! ## Ordering Contract
//!
//! `list` returns notes in insertion order, and that order is the display
//! order. Implementations must preserve it across removals.

use crate::error::Result;
use crate::model::Note;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Append a note at the end of the list
    fn insert(&mut self, note: Note) -> Result<()>;

    /// Look up a note by id
    fn get(&self, id: &Uuid) -> Result<Option<Note>>;

    /// All notes, in insertion order
    fn list(&self) -> Result<Vec<Note>>;

    /// Overwrite the stored note with the same id, keeping its position.
    /// Returns `false` when no note has that id.
    fn replace(&mut self, note: &Note) -> Result<bool>;

    /// Remove the note with the given id. Returns `false` when no note has
    /// that id; a missing id is not an error.
    fn remove(&mut self, id: &Uuid) -> Result<bool>;
}
