use crate::schema::notes;
use diesel::{AsChangeset, Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};

/// A well-wish left on the board.
///
/// `id` and `timestamp` are assigned by the store on creation and never
/// change afterwards; edits only ever touch `message` and `signature`.
#[derive(Clone, Debug, PartialEq, Eq, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = notes)]
pub struct Note {
    pub id: String,
    pub message: String,
    pub signature: String,
    /// Unix seconds.
    pub timestamp: i64,
}

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
///
/// Both fields must be present, but the server takes them as-is: empty
/// strings and messages past the client's 300 character cap are stored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteForm {
    pub message: String,
    pub signature: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = notes)]
pub struct NoteChanges {
    pub message: String,
    pub signature: String,
}

impl NoteForm {
    pub fn into_note(self, id: String, timestamp: i64) -> Note {
        Note {
            id,
            message: self.message,
            signature: self.signature,
            timestamp,
        }
    }

    pub fn into_changes(self) -> NoteChanges {
        NoteChanges {
            message: self.message,
            signature: self.signature,
        }
    }
}

impl Note {
    pub fn apply(&mut self, changes: NoteChanges) {
        self.message = changes.message;
        self.signature = changes.signature;
    }
}
