use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::resolve_indexes;

/// Replaces the title and text of existing notes.
///
/// Edits are applied verbatim: the add-time length checks are not re-run
/// here, matching the behavior this tool replicates. An edited note can
/// therefore exceed the creation-time limits.
pub fn run<S: NoteStore>(store: &mut S, updates: &[NoteUpdate]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Edits keep every note in place, so indexes stay valid across the loop
    // and each update can be resolved on its own.
    for update in updates {
        let selection = resolve_indexes(store, std::slice::from_ref(&update.index))?;
        let Some((display_index, id)) = selection.resolved.into_iter().next() else {
            result.add_message(CmdMessage::warning(format!(
                "No note at index {}",
                update.index
            )));
            continue;
        };

        let Some(mut note) = store.get(&id)? else {
            continue;
        };
        note.title = update.title.clone();
        note.text = update.text.clone();
        store.replace(&note)?;

        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            display_index, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_title_and_text_in_place() {
        let mut fixture = StoreFixture::new().with_note("Old title", "Old text");
        let id = fixture.store.list().unwrap()[0].id;

        let update = NoteUpdate::new(DisplayIndex(1), "New title".into(), "New text".into());
        run(&mut fixture.store, &[update]).unwrap();

        let note = fixture.store.get(&id).unwrap().unwrap();
        assert_eq!(note.title, "New title");
        assert_eq!(note.text, "New text");
        // Identity is unchanged by an edit.
        assert_eq!(note.id, id);
    }

    #[test]
    fn edit_keeps_checked_state() {
        let mut fixture = StoreFixture::new().with_checked_note("Done thing");
        let update = NoteUpdate::new(DisplayIndex(1), "Renamed".into(), "".into());
        run(&mut fixture.store, &[update]).unwrap();

        let notes = fixture.store.list().unwrap();
        assert!(notes[0].checked);
        assert_eq!(notes[0].title, "Renamed");
    }

    #[test]
    fn edit_skips_revalidation() {
        // Oversized replacement text is accepted as-is.
        let mut fixture = StoreFixture::new().with_note("Fine", "short");
        let update = NoteUpdate::new(DisplayIndex(1), "ab".into(), "y".repeat(200));
        let result = run(&mut fixture.store, &[update]).unwrap();

        assert!(result.mutated());
        let notes = fixture.store.list().unwrap();
        assert_eq!(notes[0].title, "ab");
        assert_eq!(notes[0].text.chars().count(), 200);
    }

    #[test]
    fn unknown_index_warns_without_touching_notes() {
        let mut fixture = StoreFixture::new().with_note("Keep me", "as is");
        let update = NoteUpdate::new(DisplayIndex(7), "Nope".into(), "".into());
        let result = run(&mut fixture.store, &[update]).unwrap();

        assert!(!result.mutated());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(fixture.store.list().unwrap()[0].title, "Keep me");
    }
}
