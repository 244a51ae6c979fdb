//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all notz operations, regardless of the UI on top.
//!
//! It dispatches to command functions and returns structured
//! `Result<CmdResult>` values. No business logic lives here and nothing
//! here writes to stdout or stderr.
//!
//! `NotzApi<S: NoteStore>` is generic over the storage backend, so API-level
//! tests run against [`MemoryStore`](crate::store::memory::MemoryStore)
//! directly — which also happens to be the production store.

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

/// The main API facade for notz operations.
pub struct NotzApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NotzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_note(&mut self, title: String, text: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, text)
    }

    pub fn list_notes(&self, filter: StatusFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_notes(&self, indexes: &[DisplayIndex]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, indexes)
    }

    pub fn edit_notes(&mut self, updates: &[commands::NoteUpdate]) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, updates)
    }

    pub fn toggle_notes(&mut self, indexes: &[DisplayIndex]) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, indexes)
    }

    pub fn delete_notes(&mut self, indexes: &[DisplayIndex]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, indexes)
    }
}

pub use commands::list::StatusFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NoteUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn api() -> NotzApi<MemoryStore> {
        NotzApi::new(MemoryStore::new())
    }

    #[test]
    fn add_then_list_round_trip() {
        let mut api = api();
        api.add_note("abc".into(), "hello".into()).unwrap();

        let result = api.list_notes(StatusFilter::All).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.title, "abc");
    }

    #[test]
    fn full_session_flow() {
        let mut api = api();
        api.add_note("Groceries".into(), "milk".into()).unwrap();
        api.add_note("Laundry".into(), "".into()).unwrap();

        api.toggle_notes(&[DisplayIndex(1)]).unwrap();
        api.edit_notes(&[NoteUpdate::new(
            DisplayIndex(2),
            "Laundry day".into(),
            "whites only".into(),
        )])
        .unwrap();
        api.delete_notes(&[DisplayIndex(1)]).unwrap();

        let result = api.list_notes(StatusFilter::All).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        let remaining = &result.listed_notes[0].note;
        assert_eq!(remaining.title, "Laundry day");
        assert_eq!(remaining.text, "whites only");
        assert!(!remaining.checked);
    }

    #[test]
    fn rejected_add_surfaces_as_message() {
        let mut api = api();
        let result = api.add_note("ab".into(), "".into()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(api.list_notes(StatusFilter::All).unwrap().listed_notes.is_empty());
    }
}
