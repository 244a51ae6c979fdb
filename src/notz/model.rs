use uuid::Uuid;

/// A single note: a title, an optional body, and a check-off flag.
///
/// The id is assigned once at creation and never changes; all lookups and
/// removals go through it, never through the text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub checked: bool,
}

impl Note {
    pub fn new(title: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            text,
            checked: false,
        }
    }
}
