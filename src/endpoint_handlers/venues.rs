use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use log::info;

use crate::datetime::now;
use crate::errors::AppError;
use crate::forms::{SearchForm, VenueForm};
use crate::responses::{group_venues_by_area, partition_shows, search_by_name, upcoming_show_counts};
use crate::{flash, mutations, pages, DatabaseState};

pub async fn get_venues(
    State(state): State<DatabaseState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let venues = queries::get_all_venues(&state.connection).await?;
    let shows = queries::get_all_shows(&state.connection).await?;
    let areas = group_venues_by_area(venues, &shows, now());
    let (jar, message) = flash::take(jar);
    Ok((jar, pages::venues(&areas, message.as_deref())))
}

async fn search(state: &DatabaseState, search_term: &str) -> Result<Html<String>, AppError> {
    let venues = queries::get_all_venues(&state.connection).await?;
    let shows = queries::get_all_shows(&state.connection).await?;
    let upcoming = upcoming_show_counts(&shows, now(), |show| show.venue_id);
    let results = search_by_name(search_term, venues).into_hits(&upcoming);
    info!("Venue search for {:?} matched {}", search_term, results.count);
    Ok(pages::search_results("venues", search_term, &results))
}

pub async fn search_venues(
    State(state): State<DatabaseState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &form.search_term).await
}

pub async fn search_venues_by_query(
    State(state): State<DatabaseState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &form.search_term).await
}

pub async fn show_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let venue = queries::get_venue_by_id(&state.connection, venue_id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", venue_id))?;
    let shows = queries::shows_for_venue(&state.connection, venue_id).await?;
    let partition = partition_shows(shows, now());
    let (jar, message) = flash::take(jar);
    Ok((jar, pages::venue_detail(&venue, &partition, message.as_deref())))
}

pub async fn create_venue_form() -> Html<String> {
    pages::venue_form("List a new venue", "/venues/create", &VenueForm::default())
}

pub async fn create_venue_submission(
    State(state): State<DatabaseState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let venue = form.validate()?;
    let name = venue.name.to_owned();
    mutations::create_venue(&state.connection, venue)
        .await
        .map_err(|err| err.context(format!("An error occurred. Venue {name} could not be listed.")))?;
    let jar = flash::push(jar, &format!("Venue {name} was successfully listed!"));
    Ok((jar, Redirect::to("/")))
}

pub async fn edit_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let venue = queries::get_venue_by_id(&state.connection, venue_id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", venue_id))?;
    Ok(pages::venue_form(
        &format!("Edit venue {}", venue.name),
        &format!("/venues/{venue_id}/edit"),
        &VenueForm::from_model(&venue),
    ))
}

pub async fn edit_venue_submission(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let venue = form.validate()?;
    let name = venue.name.to_owned();
    mutations::update_venue(&state.connection, venue_id, venue)
        .await
        .map_err(|err| err.context(format!("An error occurred. Venue {name} could not be updated.")))?;
    let jar = flash::push(jar, &format!("Venue {name} was successfully updated!"));
    Ok((jar, Redirect::to(&format!("/venues/{venue_id}"))))
}

pub async fn delete_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AppError> {
    mutations::delete_venue(&state.connection, venue_id)
        .await
        .map_err(|err| {
            let message = if err.is_foreign_key_violation() {
                "An error occurred. The venue could not be deleted while it still has shows listed."
            } else {
                "An error occurred. Venue could not be deleted."
            };
            err.context(message)
        })?;
    let jar = flash::push(jar, "Venue successfully deleted");
    Ok((jar, Redirect::to("/")))
}
