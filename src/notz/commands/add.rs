use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use crate::validate::validate_note_input;

/// Validates the input and appends a new note.
///
/// A rejected input is not an error: the result carries the rejection
/// message and the store is left untouched.
pub fn run<S: NoteStore>(store: &mut S, title: String, text: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Err(reason) = validate_note_input(&title, &text) {
        result.add_message(CmdMessage::error(reason.to_string()));
        return Ok(result);
    }

    let note = Note::new(title, text);
    store.insert(note.clone())?;

    result.add_message(CmdMessage::success(format!("Note added: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}
