//! Form types

use chrono::NaiveDateTime;

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Content of the note, already validated
    pub text: &'a str,

    /// Normalized deadline, if any
    pub deadline: Option<NaiveDateTime>,
}

/// Values to update a Note
pub struct UpdateNoteValues<'a> {
    /// New content of the note, already validated
    pub text: &'a str,

    /// New normalized deadline; `None` clears an existing one
    pub deadline: Option<NaiveDateTime>,
}
