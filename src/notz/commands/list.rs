use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::indexed_notes;

/// Which notes a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Pending,
}

pub fn run<S: NoteStore>(store: &S, filter: StatusFilter) -> Result<CmdResult> {
    let notes = indexed_notes(store)?;
    let listed: Vec<_> = notes
        .into_iter()
        .filter(|dn| match filter {
            StatusFilter::All => true,
            StatusFilter::Done => dn.note.checked,
            StatusFilter::Pending => !dn.note.checked,
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}
