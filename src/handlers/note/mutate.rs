use actix_web::{web, HttpResponse};
use serde_json::json;

use super::Store;
use crate::{errors::ServerError, models::note::NoteForm};

pub async fn create(
    input: web::Json<NoteForm>,
    store: Store,
) -> Result<HttpResponse, ServerError> {
    let form = input.into_inner();
    let note = web::block(move || store.create(form)).await??;

    log::info!("note {} left by {:?}", note.id, note.signature);
    Ok(HttpResponse::Created().json(note))
}

/// Overwrites the note as-is. Nothing here checks who is editing or how long
/// ago the note was written; the edit window lives on the client.
pub async fn update(
    note_id: web::Path<String>,
    input: web::Json<NoteForm>,
    store: Store,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    let form = input.into_inner();
    match web::block(move || store.update(&note_id, form)).await? {
        Ok(note) => {
            log::info!("note {} updated", note.id);
            Ok(HttpResponse::Ok().json(note))
        }
        Err(e) => {
            log::debug!("{e}");
            Err(e.into())
        }
    }
}

pub async fn delete(
    note_id: web::Path<String>,
    store: Store,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    let target = note_id.clone();
    match web::block(move || store.delete(&target)).await? {
        Ok(()) => {
            log::info!("note {} deleted", note_id);
            Ok(HttpResponse::Ok().json(json!({ "id": note_id })))
        }
        Err(e) => {
            log::debug!("{e}");
            Err(e.into())
        }
    }
}
