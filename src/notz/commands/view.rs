use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::NoteStore;

use super::helpers::resolve_indexes;

pub fn run<S: NoteStore>(store: &S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let selection = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    let mut listed = Vec::with_capacity(selection.resolved.len());
    for (index, id) in selection.resolved {
        if let Some(note) = store.get(&id)? {
            listed.push(DisplayNote { note, index });
        }
    }
    result.listed_notes = listed;

    for missing in selection.missing {
        result.add_message(CmdMessage::warning(format!("No note at index {}", missing)));
    }

    Ok(result)
}
