use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

use super::helpers::resolve_indexes;

pub fn run<S: NoteStore>(store: &mut S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let selection = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in selection.resolved {
        // Resolution happened against a snapshot; a vanished id is tolerated
        // the same way an unknown index is.
        let Some(note) = store.get(&id)? else {
            result.add_message(CmdMessage::warning(format!(
                "No note at index {}",
                display_index
            )));
            continue;
        };
        store.remove(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            display_index, note.title
        )));
        result.affected_notes.push(note);
    }

    for missing in selection.missing {
        result.add_message(CmdMessage::warning(format!("No note at index {}", missing)));
    }

    Ok(result)
}
