use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use wishes::{
    config::Config,
    handlers,
    store::{pg, NoteStore, PgNoteStore},
};

fn fatal(what: &str, err: impl std::fmt::Display) -> ! {
    log::error!("{what}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().unwrap_or_else(|e| fatal("bad configuration", e));
    let pool = pg::build_pool(&config.database_url, config.pool_size)
        .unwrap_or_else(|e| fatal("failed to connect to the database", e));
    log::info!("database connected");
    pg::run_migrations(&pool).unwrap_or_else(|e| fatal("failed to run migrations", e));

    let store: Arc<dyn NoteStore> = Arc::new(PgNoteStore::new(pool));
    let store = web::Data::from(store);

    log::info!(
        "listening on 0.0.0.0:{}, clients reach the api at {}",
        config.port,
        config.api_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(handlers::config)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
