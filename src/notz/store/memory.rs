use super::NoteStore;
use crate::error::Result;
use crate::model::Note;
use uuid::Uuid;

/// In-memory note storage. Does NOT persist data.
///
/// Backed by a `Vec` so insertion order is the iteration order. Identity is
/// the note id: two notes with equal title and text are still distinct
/// entries, and removal only ever touches the id it was given.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Vec<Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for MemoryStore {
    fn insert(&mut self, note: Note) -> Result<()> {
        self.notes.push(note);
        Ok(())
    }

    fn get(&self, id: &Uuid) -> Result<Option<Note>> {
        Ok(self.notes.iter().find(|n| &n.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn replace(&mut self, note: &Note) -> Result<bool> {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => {
                *slot = note.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&mut self, id: &Uuid) -> Result<bool> {
        match self.notes.iter().position(|n| &n.id == id) {
            Some(pos) => {
                self.notes.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let text = format!("Text for note {}", i + 1);
                self.store.insert(Note::new(title, text)).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, text: &str) -> Self {
            self.store
                .insert(Note::new(title.to_string(), text.to_string()))
                .unwrap();
            self
        }

        pub fn with_checked_note(mut self, title: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Checked text".to_string());
            note.checked = true;
            self.store.insert(note).unwrap();
            self
        }
    }
}
