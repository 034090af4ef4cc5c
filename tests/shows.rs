//! Router tests for show listing and creation, and how shows surface on the
//! venue and artist pages.

mod common;

use axum::http::StatusCode;
use common::*;

async fn seed(app: &axum::Router) {
    create_venue(app, "name=The+Fillmore&city=SF&state=CA&image_link=https%3A%2F%2Fimg.example%2Ffillmore.png").await;
    create_artist(app, "name=Guns+N+Petals&city=SF&state=CA&image_link=https%3A%2F%2Fimg.example%2Fgnp.png").await;
}

#[tokio::test]
async fn tomorrows_show_is_upcoming_on_both_sides() {
    let app = setup_app().await;
    seed(&app).await;
    create_show(&app, 1, 1, &days_from_now(1)).await;

    let venue_page = body_text(get(&app, "/venues/1").await).await;
    assert!(venue_page.contains("1 Upcoming Show<"));
    assert!(venue_page.contains("0 Past Shows"));
    assert!(venue_page.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));
    assert!(venue_page.contains("https://img.example/gnp.png"));

    let artist_page = body_text(get(&app, "/artists/1").await).await;
    assert!(artist_page.contains("1 Upcoming Show<"));
    assert!(artist_page.contains("0 Past Shows"));
    assert!(artist_page.contains(r#"<a href="/venues/1">The Fillmore</a>"#));
}

#[tokio::test]
async fn past_and_upcoming_are_kept_apart() {
    let app = setup_app().await;
    seed(&app).await;
    create_show(&app, 1, 1, &days_from_now(-30)).await;
    create_show(&app, 1, 1, &days_from_now(-1)).await;
    create_show(&app, 1, 1, &days_from_now(14)).await;

    let venue_page = body_text(get(&app, "/venues/1").await).await;
    assert!(venue_page.contains("1 Upcoming Show<"));
    assert!(venue_page.contains("2 Past Shows"));
}

#[tokio::test]
async fn shows_page_lists_both_names_and_full_time() {
    let app = setup_app().await;
    seed(&app).await;
    create_show(&app, 1, 1, "2035-04-01 20:00:00").await;

    let body = body_text(get(&app, "/shows").await).await;
    assert!(body.contains("Sunday April, 1, 2035 at 8:00PM"));
    assert!(body.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));
    assert!(body.contains(r#"<a href="/venues/1">The Fillmore</a>"#));
}

#[tokio::test]
async fn show_form_offers_existing_artists_and_venues() {
    let app = setup_app().await;
    seed(&app).await;
    let body = body_text(get(&app, "/shows/create").await).await;
    assert!(body.contains(r#"<option value="1">Guns N Petals (#1)</option>"#));
    assert!(body.contains(r#"<option value="1">The Fillmore (#1)</option>"#));
}

#[tokio::test]
async fn show_for_missing_venue_is_a_persistence_failure() {
    let app = setup_app().await;
    seed(&app).await;
    let response = post_form(&app, "/shows/create", "artist_id=1&venue_id=42&start_time=2035-04-01+20%3A00%3A00").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Show could not be listed."));
    assert!(!body_text(get(&app, "/shows").await).await.contains("2035"));
}

#[tokio::test]
async fn malformed_show_input_is_a_validation_error() {
    let app = setup_app().await;
    seed(&app).await;
    let response = post_form(&app, "/shows/create", "artist_id=1&venue_id=1&start_time=whenever").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = post_form(&app, "/shows/create", "artist_id=&venue_id=1&start_time=2035-04-01").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_renders_the_404_page() {
    let app = setup_app().await;
    let response = get(&app, "/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("doesn't exist"));
}
