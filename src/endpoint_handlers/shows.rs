use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;

use crate::datetime::now;
use crate::errors::AppError;
use crate::forms::ShowForm;
use crate::{flash, mutations, pages, DatabaseState};

pub async fn get_shows(
    State(state): State<DatabaseState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let listings = queries::get_show_listings(&state.connection).await?;
    let (jar, message) = flash::take(jar);
    Ok((jar, pages::shows(&listings, message.as_deref())))
}

pub async fn create_show_form(State(state): State<DatabaseState>) -> Result<Html<String>, AppError> {
    let artists = queries::get_all_artists(&state.connection).await?;
    let venues = queries::get_all_venues(&state.connection).await?;
    let form = ShowForm {
        start_time: now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ..Default::default()
    };
    Ok(pages::show_form(&form, &artists, &venues))
}

pub async fn create_show_submission(
    State(state): State<DatabaseState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let show = form.validate()?;
    mutations::create_show(&state.connection, show)
        .await
        .map_err(|err| err.context("An error occurred. Show could not be listed."))?;
    let jar = flash::push(jar, "Show was successfully listed!");
    Ok((jar, Redirect::to("/")))
}
