//! Database storage types and functions

use chrono::Local;
use chrono::NaiveDateTime;
use chrono::SubsecRound;
use sqlx::migrate::Migrator;

use crate::notes::Note;

/// Migrator to run migrations on startup
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// The current local time, in whole seconds
///
/// Rows are stamped by the application so the stored value matches what the
/// API serves
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// `SQLx` version of a note
#[derive(sqlx::FromRow)]
pub struct SqlxNote {
    /// Note ID
    pub id: i64,

    /// Content of the note
    pub text: String,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,

    /// Optional deadline
    pub deadline: Option<NaiveDateTime>,
}

impl Note {
    /// Create note from `SQLx` version
    pub fn from_sqlx_note(note: SqlxNote) -> Self {
        Self {
            id: note.id,
            text: note.text,
            created_at: note.created_at,
            updated_at: note.updated_at,
            deadline: note.deadline,
        }
    }

    /// Maybe create note from `SQLx` version
    pub fn from_sqlx_note_optional(note: Option<SqlxNote>) -> Option<Self> {
        note.map(Self::from_sqlx_note)
    }

    /// Create multiple notes from `SQLx` version
    pub fn from_sqlx_note_multiple(mut notes: Vec<SqlxNote>) -> Vec<Self> {
        notes
            .drain(..)
            .map(Self::from_sqlx_note)
            .collect::<Vec<Self>>()
    }
}
