// Shared helpers for the router integration tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use gigboard::{build_router, DatabaseState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower::util::ServiceExt; // for `oneshot`

/// A single pooled connection keeps every query on the same in-memory database.
async fn memory_connection() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(opt)
        .await
        .expect("Should open in-memory database")
}

/// Fresh in-memory database with the real schema, wrapped in the app router.
pub async fn setup_app() -> Router {
    let connection = memory_connection().await;
    Migrator::up(&connection, None)
        .await
        .expect("Migrations should apply");
    build_router(DatabaseState { connection })
}

/// Router over an empty database, so every query fails with a missing table.
pub async fn setup_app_without_schema() -> Router {
    build_router(DatabaseState {
        connection: memory_connection().await,
    })
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("Redirect should carry a Location header")
}

pub async fn create_venue(app: &Router, form: &str) {
    let response = post_form(app, "/venues/create", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

pub async fn create_artist(app: &Router, form: &str) {
    let response = post_form(app, "/artists/create", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

pub async fn create_show(app: &Router, artist_id: i32, venue_id: i32, start_time: &str) {
    let form = format!(
        "artist_id={}&venue_id={}&start_time={}",
        artist_id,
        venue_id,
        urlencoding::encode(start_time)
    );
    let response = post_form(app, "/shows/create", &form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

pub fn days_from_now(days: i64) -> String {
    (chrono::Local::now().naive_local() + chrono::Duration::days(days))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
