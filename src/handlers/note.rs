use actix_web::web;

use crate::store::NoteStore;

pub mod mutate;
pub mod query;

pub type Store = web::Data<dyn NoteStore>;

pub fn config(cfg: &mut web::ServiceConfig) {
    for root in ["", "/"] {
        cfg.service(
            web::resource(root)
                .route(web::get().to(query::list))
                .route(web::post().to(mutate::create)),
        );
    }

    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(query::get))
            .route(web::put().to(mutate::update))
            .route(web::delete().to(mutate::delete)),
    );
}
