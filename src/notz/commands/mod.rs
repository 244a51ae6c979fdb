use crate::index::{DisplayIndex, DisplayNote};
use crate::model::Note;

pub mod add;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod toggle;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, consumed by whatever UI sits on top.
///
/// `affected_notes` holds notes a mutation touched; `listed_notes` holds
/// notes a query selected, each with its display index.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// True when the command changed the store.
    pub fn mutated(&self) -> bool {
        !self.affected_notes.is_empty()
    }
}

/// Replacement title and text for the note at a display index.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub index: DisplayIndex,
    pub title: String,
    pub text: String,
}

impl NoteUpdate {
    pub fn new(index: DisplayIndex, title: String, text: String) -> Self {
        Self { index, title, text }
    }
}
