use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

use super::helpers::resolve_indexes;

/// Flips the checked flag of the selected notes.
pub fn run<S: NoteStore>(store: &mut S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let selection = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in selection.resolved {
        let Some(mut note) = store.get(&id)? else {
            continue;
        };
        note.checked = !note.checked;
        store.replace(&note)?;

        let verb = if note.checked { "checked" } else { "unchecked" };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb, display_index, note.title
        )));
        result.affected_notes.push(note);
    }

    for missing in selection.missing {
        result.add_message(CmdMessage::warning(format!("No note at index {}", missing)));
    }

    Ok(result)
}
