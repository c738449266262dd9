use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use staffboard_backend::config::Config;
use staffboard_backend::handlers;
use staffboard_backend::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Load persisted bookmarks and session before accepting requests
    let state = web::Data::new(AppState::init(&config).map_err(|err| {
        error!("Failed to initialise application state: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?);

    info!("Starting server at {}", config.bind_addr);

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    state.shutdown().map_err(|err| {
        error!("Failed to save state on shutdown: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })
}
