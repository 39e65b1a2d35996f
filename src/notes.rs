//! Notes and the rules for changing them

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::SubsecRound;
use thiserror::Error;

use crate::database;
use crate::database::CreateNoteValues;
use crate::database::Database;
use crate::database::UpdateNoteValues;

/// A single note, as stored
#[derive(Clone, Debug)]
pub struct Note {
    /// Note ID, assigned by the store
    pub id: i64,

    /// Content of the note, never blank
    pub text: String,

    /// Creation date, local time, whole seconds
    pub created_at: NaiveDateTime,

    /// Last updated at, local time, whole seconds
    pub updated_at: NaiveDateTime,

    /// Optional deadline
    pub deadline: Option<NaiveDateTime>,
}

/// Errors for all note interactions
#[derive(Debug, Error)]
pub enum Error {
    /// The note text is blank after trimming
    #[error("Note text is required.")]
    TextRequired,

    /// The storage failed
    #[error(transparent)]
    Database(#[from] database::Error),
}

/// Result type for all note interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Datetime shapes accepted for a deadline
///
/// The first is what a `datetime-local` input produces; the others cover
/// hand-written values with seconds or a space separator
const DEADLINE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalize a raw deadline to whole seconds
///
/// Blank input clears the deadline. Input that does not parse as a datetime
/// is dropped the same way, without an error.
pub fn normalize_deadline(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    for format in DEADLINE_FORMATS {
        if let Ok(deadline) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(deadline.trunc_subsecs(0));
        }
    }

    // a bare date means midnight
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// List all notes, newest first
pub async fn list_notes(database: &Database) -> Result<Vec<Note>> {
    Ok(database.find_all_notes().await?)
}

/// Validate and create a note
pub async fn create_note(database: &Database, text: &str, deadline: &str) -> Result<Note> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::TextRequired);
    }

    let values = CreateNoteValues {
        text,
        deadline: normalize_deadline(deadline),
    };

    Ok(database.create_note(&values).await?)
}

/// Validate and update an existing note
///
/// `None` when no note matched the ID
pub async fn update_note(
    database: &Database,
    id: i64,
    text: &str,
    deadline: &str,
) -> Result<Option<Note>> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::TextRequired);
    }

    let values = UpdateNoteValues {
        text,
        deadline: normalize_deadline(deadline),
    };

    Ok(database.update_note(id, &values).await?)
}

/// Delete a note
///
/// `false` when no note matched the ID
pub async fn delete_note(database: &Database, id: i64) -> Result<bool> {
    Ok(database.delete_note(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatted(deadline: Option<NaiveDateTime>) -> Option<String> {
        deadline.map(|deadline| deadline.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    #[test]
    fn test_normalize_deadline_blank() {
        assert_eq!(None, normalize_deadline(""));
        assert_eq!(None, normalize_deadline("   "));
    }

    #[test]
    fn test_normalize_deadline_datetime_local() {
        let deadline = normalize_deadline("2025-01-15T09:30");

        assert_eq!(
            Some("2025-01-15T09:30:00".to_string()),
            formatted(deadline)
        );
    }

    #[test]
    fn test_normalize_deadline_keeps_seconds() {
        let deadline = normalize_deadline("2025-01-15T09:30:12");

        assert_eq!(
            Some("2025-01-15T09:30:12".to_string()),
            formatted(deadline)
        );
    }

    #[test]
    fn test_normalize_deadline_drops_subseconds() {
        let deadline = normalize_deadline("2025-01-15T09:30:12.987");

        assert_eq!(
            Some("2025-01-15T09:30:12".to_string()),
            formatted(deadline)
        );
    }

    #[test]
    fn test_normalize_deadline_space_separator() {
        let deadline = normalize_deadline("2025-01-15 09:30");

        assert_eq!(
            Some("2025-01-15T09:30:00".to_string()),
            formatted(deadline)
        );
    }

    #[test]
    fn test_normalize_deadline_bare_date() {
        let deadline = normalize_deadline("2025-01-15");

        assert_eq!(
            Some("2025-01-15T00:00:00".to_string()),
            formatted(deadline)
        );
    }

    #[test]
    fn test_normalize_deadline_garbage() {
        assert_eq!(None, normalize_deadline("not-a-date"));
        assert_eq!(None, normalize_deadline("2025-13-45T99:99"));
        assert_eq!(None, normalize_deadline("tomorrow"));
    }
}
