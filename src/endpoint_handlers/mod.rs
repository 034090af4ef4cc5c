use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::{flash, pages};

pub mod artists;
pub mod shows;
pub mod venues;

pub async fn index(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, message) = flash::take(jar);
    (jar, pages::home(message.as_deref()))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, pages::not_found())
}
