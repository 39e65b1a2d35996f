//! All things related to the storage of notes

use core::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;

pub use Config as DatabaseConfig;
pub use form_types::*;

use crate::notes::Note;
use crate::utils::env_var_or_else;
use types::MIGRATOR;
use types::SqlxNote;
use types::now;

mod form_types;
mod types;

/// Default location of the store file, relative to the working directory
const DEFAULT_DATABASE_PATH: &str = "data/notes.db";

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// A connection error with the storage
    Connection(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(error) => write!(f, "Connection error: {error}"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Database configuration
pub enum Config {
    /// Detect configuration from environment
    DetectConfig,

    /// Use existing connection
    ExistingConnection(SqlitePool),
}

/// `SQLite` storage
#[derive(Clone)]
pub struct Database {
    /// Pool of connections
    connection_pool: SqlitePool,
}

impl Database {
    /// Create a new `SQLite` storage
    pub async fn from_config(config: Config) -> Self {
        match config {
            Config::DetectConfig => Self::new().await,
            Config::ExistingConnection(pool) => Self::new_with_pool(pool).await,
        }
    }

    /// Create `SQLite` storage
    ///
    /// Uses the `DATABASE_PATH` environment variable, or the default path
    ///
    /// The store file and its parent directory are created when missing, and
    /// migrations will be run
    async fn new() -> Self {
        let database_path =
            env_var_or_else("DATABASE_PATH", || String::from(DEFAULT_DATABASE_PATH));

        if let Some(parent) = Path::new(&database_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).expect("Writable database directory");
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&database_path)
            .create_if_missing(true);

        let connection_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .expect("Valid connection");

        Self::new_with_pool(connection_pool).await
    }

    /// Create `SQLite` storage with existing pool
    ///
    /// Migrations will be run
    async fn new_with_pool(connection_pool: SqlitePool) -> Self {
        let migration_result = MIGRATOR.run(&connection_pool).await;

        if let Err(err) = migration_result {
            panic!("Migrations could not run: {err}");
        }

        Self { connection_pool }
    }
}

impl Database {
    /// Find all notes, newest ID first
    pub async fn find_all_notes(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, SqlxNote>(
            "
            SELECT id, text, created_at, updated_at, deadline
            FROM notes
            ORDER BY id DESC
            ",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map(Note::from_sqlx_note_multiple)
        .map_err(connection_error)?;

        Ok(notes)
    }

    /// Create a single note
    ///
    /// The store assigns the ID; both timestamps are set to the same value.
    /// The returned row is the authoritative version of the note
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let created_at = now();

        let note = sqlx::query_as::<_, SqlxNote>(
            "
            INSERT INTO notes (text, created_at, updated_at, deadline)
            VALUES (?, ?, ?, ?)
            RETURNING id, text, created_at, updated_at, deadline
            ",
        )
        .bind(values.text)
        .bind(created_at)
        .bind(created_at)
        .bind(values.deadline)
        .fetch_one(&self.connection_pool)
        .await
        .map(Note::from_sqlx_note)
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Update a single note
    ///
    /// Rewrites text, deadline and `updated_at`; `created_at` is untouched
    ///
    /// `None` when no note matched the ID
    pub async fn update_note(
        &self,
        id: i64,
        values: &UpdateNoteValues<'_>,
    ) -> Result<Option<Note>> {
        let updated_at = now();

        let note = sqlx::query_as::<_, SqlxNote>(
            "
            UPDATE notes
            SET text = ?, updated_at = ?, deadline = ?
            WHERE id = ?
            RETURNING id, text, created_at, updated_at, deadline
            ",
        )
        .bind(values.text)
        .bind(updated_at)
        .bind(values.deadline)
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map(Note::from_sqlx_note_optional)
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Delete a single note
    ///
    /// `false` when no note matched the ID
    pub async fn delete_note(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
