//! Input validation for new notes.
//!
//! Valid input:
//! - Title between 3 and 50 characters
//! - Text at most 120 characters (empty is fine)
//!
//! Lengths are counted in characters, not bytes, and no trimming or
//! normalization is applied before counting.

use std::fmt;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const TEXT_MAX_CHARS: usize = 120;

/// Validates the title and text of a note before it may be added.
///
/// Rules are checked in order and the first failure wins, so a too-short
/// title is reported even when the text is also too long.
///
/// # Examples
/// ```
/// use notz::validate::validate_note_input;
///
/// assert!(validate_note_input("abc", "").is_ok());
/// assert!(validate_note_input("abc", "some body text").is_ok());
///
/// assert!(validate_note_input("ab", "x").is_err());
/// assert!(validate_note_input(&"a".repeat(51), "x").is_err());
/// assert!(validate_note_input("abc", &"y".repeat(121)).is_err());
/// ```
pub fn validate_note_input(title: &str, text: &str) -> Result<(), ValidationError> {
    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    if title_len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    if text.chars().count() > TEXT_MAX_CHARS {
        return Err(ValidationError::TextTooLong);
    }
    Ok(())
}

/// Error type for note input validation failures.
///
/// The `Display` output is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is shorter than [`TITLE_MIN_CHARS`]
    TitleTooShort,
    /// Title is longer than [`TITLE_MAX_CHARS`]
    TitleTooLong,
    /// Text is longer than [`TEXT_MAX_CHARS`]
    TextTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TitleTooShort => {
                write!(f, "Title must be at least {} characters.", TITLE_MIN_CHARS)
            }
            ValidationError::TitleTooLong => {
                write!(f, "Title must be at most {} characters.", TITLE_MAX_CHARS)
            }
            ValidationError::TextTooLong => {
                write!(f, "Text must be at most {} characters.", TEXT_MAX_CHARS)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
