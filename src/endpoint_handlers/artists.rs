use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use log::info;

use crate::datetime::now;
use crate::errors::AppError;
use crate::forms::{ArtistForm, SearchForm};
use crate::responses::{partition_shows, search_by_name, upcoming_show_counts};
use crate::{flash, mutations, pages, DatabaseState};

pub async fn get_artists(
    State(state): State<DatabaseState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let artists = queries::get_all_artists(&state.connection).await?;
    let (jar, message) = flash::take(jar);
    Ok((jar, pages::artists(&artists, message.as_deref())))
}

async fn search(state: &DatabaseState, search_term: &str) -> Result<Html<String>, AppError> {
    let artists = queries::get_all_artists(&state.connection).await?;
    let shows = queries::get_all_shows(&state.connection).await?;
    let upcoming = upcoming_show_counts(&shows, now(), |show| show.artist_id);
    let results = search_by_name(search_term, artists).into_hits(&upcoming);
    info!("Artist search for {:?} matched {}", search_term, results.count);
    Ok(pages::search_results("artists", search_term, &results))
}

pub async fn search_artists(
    State(state): State<DatabaseState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &form.search_term).await
}

pub async fn search_artists_by_query(
    State(state): State<DatabaseState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &form.search_term).await
}

pub async fn show_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let artist = queries::get_artist_by_id(&state.connection, artist_id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", artist_id))?;
    let shows = queries::shows_for_artist(&state.connection, artist_id).await?;
    let partition = partition_shows(shows, now());
    let (jar, message) = flash::take(jar);
    Ok((jar, pages::artist_detail(&artist, &partition, message.as_deref())))
}

pub async fn create_artist_form() -> Html<String> {
    pages::artist_form("List a new artist", "/artists/create", &ArtistForm::default())
}

pub async fn create_artist_submission(
    State(state): State<DatabaseState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let artist = form.validate()?;
    let name = artist.name.to_owned();
    mutations::create_artist(&state.connection, artist)
        .await
        .map_err(|err| err.context(format!("An error occurred. Artist {name} could not be listed.")))?;
    let jar = flash::push(jar, &format!("Artist {name} was successfully listed!"));
    Ok((jar, Redirect::to("/")))
}

pub async fn edit_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let artist = queries::get_artist_by_id(&state.connection, artist_id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", artist_id))?;
    Ok(pages::artist_form(
        &format!("Edit artist {}", artist.name),
        &format!("/artists/{artist_id}/edit"),
        &ArtistForm::from_model(&artist),
    ))
}

pub async fn edit_artist_submission(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let artist = form.validate()?;
    let name = artist.name.to_owned();
    mutations::update_artist(&state.connection, artist_id, artist)
        .await
        .map_err(|err| err.context(format!("An error occurred. Artist {name} could not be updated.")))?;
    let jar = flash::push(jar, &format!("Artist {name} was successfully updated!"));
    Ok((jar, Redirect::to(&format!("/artists/{artist_id}"))))
}

pub async fn delete_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AppError> {
    mutations::delete_artist(&state.connection, artist_id)
        .await
        .map_err(|err| {
            let message = if err.is_foreign_key_violation() {
                "An error occurred. The artist could not be deleted while they still have shows listed."
            } else {
                "An error occurred. Artist could not be deleted."
            };
            err.context(message)
        })?;
    let jar = flash::push(jar, "Artist successfully deleted");
    Ok((jar, Redirect::to("/")))
}
