#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod schema;
pub mod database;
pub mod app;

mod auth;
mod routes;
mod views;

use std::io;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use env_logger::Env;

use app::{config::Config, AppState};

fn startup_error<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;
    let app_state = AppState::new(&config).map_err(startup_error)?;
    let session_key = config.session_key.clone();
    let secure_cookies = config.secure_cookies;

    log::info!("Server running on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(auth::session_middleware(session_key.clone(), secure_cookies))
            .app_data(Data::new(app_state.clone()))
            .configure(routes::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
