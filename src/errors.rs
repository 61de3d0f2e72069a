use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;

use crate::store::StoreError;

#[derive(Debug, Display)]
pub enum ServerError {
    DieselError,
    R2D2Error,
    BlockingError,
    #[display(fmt = "note id: {} was not found", _0)]
    NotFound(String),
    #[display(fmt = "Invalid Request: {}", _0)]
    UserError(String),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> ServerError {
        match err {
            StoreError::NotFound(note_id) => ServerError::NotFound(note_id),
            StoreError::Database(e) => {
                log::error!("{e}");
                ServerError::DieselError
            }
            StoreError::Pool(e) => {
                log::error!("{e}");
                ServerError::R2D2Error
            }
        }
    }
}

impl From<actix_web::error::BlockingError> for ServerError {
    fn from(err: actix_web::error::BlockingError) -> ServerError {
        log::error!("{err}");
        ServerError::BlockingError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::UserError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::DieselError => {
                HttpResponse::InternalServerError().body("Library Error: Diesel Error.")
            }
            ServerError::R2D2Error => {
                HttpResponse::InternalServerError().body("Server Error: Pooling Error.")
            }
            ServerError::BlockingError => {
                HttpResponse::InternalServerError().body("Server Error: Worker Pool Error.")
            }
            ServerError::NotFound(_) | ServerError::UserError(_) => {
                HttpResponse::build(self.status_code()).body(self.to_string())
            }
        }
    }
}
