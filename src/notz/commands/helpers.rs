use crate::error::Result;
use crate::index::{index_notes, DisplayIndex, DisplayNote};
use crate::store::NoteStore;
use uuid::Uuid;

pub fn indexed_notes<S: NoteStore>(store: &S) -> Result<Vec<DisplayNote>> {
    let notes = store.list()?;
    Ok(index_notes(notes))
}

/// Outcome of turning user-supplied display indexes into note ids.
///
/// Indexes that match nothing land in `missing` instead of aborting the
/// command; operations on absent notes are tolerated, not errors.
#[derive(Debug, Default)]
pub struct ResolvedSelection {
    pub resolved: Vec<(DisplayIndex, Uuid)>,
    pub missing: Vec<DisplayIndex>,
}

pub fn resolve_indexes<S: NoteStore>(
    store: &S,
    indexes: &[DisplayIndex],
) -> Result<ResolvedSelection> {
    let indexed = indexed_notes(store)?;
    let mut selection = ResolvedSelection::default();

    for idx in indexes {
        match indexed.iter().find(|dn| &dn.index == idx) {
            Some(dn) => selection.resolved.push((*idx, dn.note.id)),
            None => selection.missing.push(*idx),
        }
    }

    Ok(selection)
}
