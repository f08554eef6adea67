//! Single binary web server for player scores.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; override with env: HOST, PORT.

use actix_web::{middleware::Logger, App, HttpServer};
use player_scores::{api, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = api::new_state();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
