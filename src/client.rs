//! The notes page without a rendering framework.
//!
//! State lives in [`board::Board`]; the helpers here run the network side
//! and hand back the event to feed into it. Failures are logged and turned
//! into events that leave the board as it was.

pub mod api;
pub mod board;
pub mod edit_window;
pub mod ticker;

use api::NotesApi;
use board::{BoardEvent, Submission};

pub async fn load_notes(api: &NotesApi) -> BoardEvent {
    match api.list_notes().await {
        Ok(notes) => BoardEvent::NotesLoaded(notes),
        Err(e) => {
            log::error!("Error fetching notes: {e}");
            BoardEvent::LoadFailed
        }
    }
}

pub async fn submit(api: &NotesApi, submission: Submission) -> BoardEvent {
    let result = match &submission {
        Submission::Create(form) => api.create_note(form).await.map(BoardEvent::NoteCreated),
        Submission::Update { note_id, form } => api
            .update_note(note_id, form)
            .await
            .map(BoardEvent::NoteUpdated),
    };

    result.unwrap_or_else(|e| {
        log::error!("Error submitting note: {e}");
        BoardEvent::SubmitFailed
    })
}
