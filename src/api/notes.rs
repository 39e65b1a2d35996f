use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::Database;
use crate::notes;
use crate::notes::Note;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;

/// JSON version of a note
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deadline: Option<NaiveDateTime>,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            text: note.text,
            created_at: note.created_at,
            updated_at: note.updated_at,
            deadline: note.deadline,
        }
    }

    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// Envelope for the note list
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    notes: Vec<NoteResponse>,
}

/// Envelope for a single note
#[derive(Debug, Serialize)]
pub struct SingleNoteResponse {
    note: NoteResponse,
}

/// Envelope for a deleted note
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    ok: bool,
}

pub async fn list(
    Extension(database): Extension<Database>,
) -> Result<Success<NotesResponse>, Error> {
    let notes = notes::list_notes(&database).await.map_err(note_error)?;

    Ok(Success::ok(NotesResponse {
        notes: NoteResponse::from_note_multiple(notes),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteForm {
    text: String,
    deadline: Option<String>,
}

pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<SingleNoteResponse>, Error> {
    let deadline = form.deadline.unwrap_or_default();

    let note = notes::create_note(&database, &form.text, &deadline)
        .await
        .map_err(note_error)?;

    Ok(Success::created(SingleNoteResponse {
        note: NoteResponse::from_note(note),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteForm {
    text: String,
    deadline: Option<String>,
}

pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
    Form(form): Form<UpdateNoteForm>,
) -> Result<Success<SingleNoteResponse>, Error> {
    let deadline = form.deadline.unwrap_or_default();

    let note = notes::update_note(&database, note_id, &form.text, &deadline)
        .await
        .map_err(note_error)?;

    note.map_or_else(
        || Err(Error::not_found("Note not found.")),
        |note| {
            Ok(Success::ok(SingleNoteResponse {
                note: NoteResponse::from_note(note),
            }))
        },
    )
}

pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<DeletedResponse>, Error> {
    let deleted = notes::delete_note(&database, note_id)
        .await
        .map_err(note_error)?;

    if deleted {
        Ok(Success::ok(DeletedResponse { ok: true }))
    } else {
        Err(Error::not_found("Note not found."))
    }
}

/// Map a note service error to its API equivalent
fn note_error(err: notes::Error) -> Error {
    match err {
        notes::Error::TextRequired => Error::bad_request(err),
        notes::Error::Database(err) => Error::internal_server_error(err),
    }
}
