//! Persistence for notes.
//!
//! Handlers only ever see [`NoteStore`]. The Postgres implementation is what
//! the server runs on; the in-memory one keeps the same contract for tests.

use derive_more::Display;

use crate::models::note::{Note, NoteForm};

pub mod memory;
pub mod pg;

pub use memory::MemoryNoteStore;
pub use pg::{Pool, PgNoteStore};

/// Length of store-assigned note ids.
pub const ID_LEN: usize = 12;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "note id: {} was not found", _0)]
    NotFound(String),
    #[display(fmt = "database error: {}", _0)]
    Database(diesel::result::Error),
    #[display(fmt = "pool error: {}", _0)]
    Pool(r2d2::Error),
}

impl std::error::Error for StoreError {}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> StoreError {
        StoreError::Database(err)
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> StoreError {
        StoreError::Pool(err)
    }
}

/// The five operations behind `/api/notes`.
///
/// There is no concurrency control: two updates to the same id both
/// succeed and the later one wins.
pub trait NoteStore: Send + Sync {
    /// Every note, in whatever order the backend hands them out.
    fn list(&self) -> Result<Vec<Note>, StoreError>;

    fn get(&self, note_id: &str) -> Result<Note, StoreError>;

    /// Stores a new note under a fresh id stamped with the current time.
    fn create(&self, form: NoteForm) -> Result<Note, StoreError>;

    /// Overwrites `message` and `signature`. `id` and `timestamp` are kept.
    fn update(&self, note_id: &str, form: NoteForm) -> Result<Note, StoreError>;

    fn delete(&self, note_id: &str) -> Result<(), StoreError>;
}
