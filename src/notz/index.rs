use crate::model::Note;
use std::str::FromStr;

/// A user-facing, 1-based position for a note.
///
/// Display order is insertion order, so index 1 is the oldest note still in
/// the store. Indexes are transient: deleting a note renumbers everything
/// after it. Stable identity lives in [`Note::id`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note paired with its current display index.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Assigns display indexes to a list of notes.
///
/// The input order is preserved: the store lists notes in insertion order
/// and that order is exactly what the user sees.
pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note,
            index: DisplayIndex(i + 1),
        })
        .collect()
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_insertion_order() {
        let notes = vec![
            Note::new("First".into(), "".into()),
            Note::new("Second".into(), "".into()),
            Note::new("Third".into(), "".into()),
        ];
        let indexed = index_notes(notes);
        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].note.title, "First");
        assert_eq!(indexed[2].index, DisplayIndex(3));
        assert_eq!(indexed[2].note.title, "Third");
    }

    #[test]
    fn parses_positive_indexes_only() {
        assert_eq!("1".parse::<DisplayIndex>(), Ok(DisplayIndex(1)));
        assert_eq!("12".parse::<DisplayIndex>(), Ok(DisplayIndex(12)));
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("abc".parse::<DisplayIndex>().is_err());
    }
}
