use actix_web::{web, HttpResponse};

use super::Store;
use crate::errors::ServerError;

pub async fn list(store: Store) -> Result<HttpResponse, ServerError> {
    let notes = web::block(move || store.list()).await??;
    Ok(HttpResponse::Ok().json(notes))
}

pub async fn get(
    note_id: web::Path<String>,
    store: Store,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();

    match web::block(move || store.get(&note_id)).await? {
        Ok(note) => Ok(HttpResponse::Ok().json(note)),
        Err(e) => {
            log::debug!("{e}");
            Err(e.into())
        }
    }
}
