use axum::routing::{get, post};
use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::endpoint_handlers::{artists, shows, venues};

pub mod config;
pub mod datetime;
pub mod endpoint_handlers;
pub mod errors;
pub mod flash;
pub mod forms;
pub mod mutations;
pub mod pages;
pub mod responses;

#[derive(Clone)]
pub struct DatabaseState {
    pub connection: DatabaseConnection,
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);
    Database::connect(opt).await
}

pub fn build_router(state: DatabaseState) -> Router {
    Router::new()
        .route("/", get(endpoint_handlers::index))
        // Venues
        .route("/venues", get(venues::get_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/search",
            get(venues::search_venues_by_query).post(venues::search_venues),
        )
        .route(
            "/venues/:venue_id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )
        .route("/venues/:venue_id/delete", post(venues::delete_venue))
        // Artists
        .route("/artists", get(artists::get_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route(
            "/artists/search",
            get(artists::search_artists_by_query).post(artists::search_artists),
        )
        .route(
            "/artists/:artist_id",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )
        .route("/artists/:artist_id/delete", post(artists::delete_artist))
        // Shows
        .route("/shows", get(shows::get_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
        .fallback(endpoint_handlers::not_found)
        .with_state(state)
}
