use actix_web::{web, HttpResponse};

use crate::errors::ServerError;

pub mod note;

pub async fn index() -> impl actix_web::Responder {
    HttpResponse::Ok().finish()
}

/// Turns any body extraction failure into a plain 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("rejected request body: {err}");
        ServerError::UserError(err.to_string()).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/api/notes")
            .app_data(json_config())
            .configure(note::config),
    );
}
