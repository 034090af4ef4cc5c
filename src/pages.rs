//! Server-side HTML for every page.

use std::fmt::Write;

use axum::response::Html;
use entities::{artist, venue};
use queries::ShowListing;

use crate::datetime::{format_naive, DateFormat};
use crate::forms::{ArtistForm, ShowForm, VenueForm, GENRES, STATES};
use crate::responses::{SearchHit, SearchResults, ShowCard, ShowPartition, VenueArea};

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let flash = flash
        .map(|message| format!(r#"<div class="flash">{}</div>"#, escape(message)))
        .unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Gigboard</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<nav>
    <a class="brand" href="/">Gigboard</a>
    <a href="/venues">Venues</a>
    <a href="/artists">Artists</a>
    <a href="/shows">Shows</a>
    <a href="/venues/create">Post a venue</a>
    <a href="/artists/create">Post an artist</a>
    <a href="/shows/create">Post a show</a>
</nav>
{flash}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

fn search_box(action: &str, placeholder: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
    <input type="search" name="search_term" placeholder="{placeholder}">
    <button type="submit">Search</button>
</form>"#
    )
}

pub fn home(flash: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<h1>Gigboard</h1>
<p class="lead">Book talent, fill your calendar, find your next show.</p>
{}
{}"#,
        search_box("/venues/search", "Find a venue"),
        search_box("/artists/search", "Find an artist"),
    );
    layout("Home", flash, &body)
}

pub fn venues(areas: &[VenueArea], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>\n");
    body.push_str(&search_box("/venues/search", "Find a venue"));
    for area in areas {
        let _ = write!(
            body,
            "\n<h3>{}, {}</h3>\n<ul class=\"items\">",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            let _ = write!(
                body,
                r#"<li><a href="/venues/{}">{}</a> <span class="upcoming">{} upcoming</span></li>"#,
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>");
    }
    layout("Venues", flash, &body)
}

pub fn artists(artists: &[artist::Model], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Artists</h1>\n");
    body.push_str(&search_box("/artists/search", "Find an artist"));
    body.push_str("\n<ul class=\"items\">");
    for artist in artists {
        let _ = write!(
            body,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        );
    }
    body.push_str("</ul>");
    layout("Artists", flash, &body)
}

pub fn search_results(
    kind: &str,
    search_term: &str,
    results: &SearchResults<SearchHit>,
) -> Html<String> {
    let mut body = format!(
        r#"<h3>Number of search results for &quot;{}&quot;: <span class="result-count">{}</span></h3>
<ul class="items">"#,
        escape(search_term),
        results.count
    );
    for hit in &results.data {
        let _ = write!(
            body,
            r#"<li><a href="/{kind}/{}">{}</a> <span class="upcoming">{} upcoming</span></li>"#,
            hit.id,
            escape(&hit.name),
            hit.num_upcoming_shows
        );
    }
    body.push_str("</ul>");
    layout("Search", None, &body)
}

fn show_cards(heading: &str, kind: &str, cards: &[ShowCard]) -> String {
    let mut section = format!(
        "<section class=\"shows\">\n<h2>{}</h2>\n<div class=\"cards\">",
        plural(cards.len(), heading)
    );
    for card in cards {
        let _ = write!(
            section,
            r#"<div class="card"><img src="{}" alt=""><h5><a href="/{kind}/{}">{}</a></h5><h6>{}</h6></div>"#,
            opt(&card.image_link),
            card.id,
            escape(&card.name),
            escape(&card.start_time)
        );
    }
    section.push_str("</div>\n</section>");
    section
}

fn genre_tags(genres: &entities::genres::Genres) -> String {
    genres
        .iter()
        .map(|genre| format!(r#"<span class="genre">{}</span>"#, escape(genre)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn link(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(|url| format!(r#"<p><a href="{url}">{url}</a></p>"#, url = escape(url)))
        .unwrap_or_default()
}

fn seeking(flag: bool, what: &str, description: &Option<String>) -> String {
    if flag {
        format!(
            r#"<div class="seeking"><p>Currently seeking {what}</p><p>{}</p></div>"#,
            opt(description)
        )
    } else {
        format!(r#"<p class="not-seeking">Not currently seeking {what}</p>"#)
    }
}

pub fn venue_detail(
    venue: &venue::Model,
    shows: &ShowPartition,
    flash: Option<&str>,
) -> Html<String> {
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{address}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}
{seeking}
<img src="{image}" alt="Venue image">
<p>
    <a class="button" href="/venues/{id}/edit">Edit</a>
</p>
<form method="post" action="/venues/{id}/delete">
    <button type="submit">Delete</button>
</form>
{upcoming}
{past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = opt(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = opt(&venue.phone),
        website = link(&venue.website),
        facebook = link(&venue.facebook_link),
        seeking = seeking(venue.seeking_talent, "talent", &venue.seeking_description),
        image = opt(&venue.image_link),
        upcoming = show_cards("Upcoming Show", "artists", &shows.upcoming),
        past = show_cards("Past Show", "artists", &shows.past),
    );
    layout(&venue.name, flash, &body)
}

pub fn artist_detail(
    artist: &artist::Model,
    shows: &ShowPartition,
    flash: Option<&str>,
) -> Html<String> {
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}
{seeking}
<img src="{image}" alt="Artist image">
<p>
    <a class="button" href="/artists/{id}/edit">Edit</a>
</p>
<form method="post" action="/artists/{id}/delete">
    <button type="submit">Delete</button>
</form>
{upcoming}
{past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = opt(&artist.phone),
        website = link(&artist.website),
        facebook = link(&artist.facebook_link),
        seeking = seeking(artist.seeking_venue, "performance venues", &artist.seeking_description),
        image = opt(&artist.image_link),
        upcoming = show_cards("Upcoming Show", "venues", &shows.upcoming),
        past = show_cards("Past Show", "venues", &shows.past),
    );
    layout(&artist.name, flash, &body)
}

pub fn shows(listings: &[ShowListing], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Shows</h1>\n<div class=\"cards\">");
    for listing in listings {
        let _ = write!(
            body,
            r#"<div class="card"><img src="{}" alt=""><h4>{}</h4><h5><a href="/artists/{}">{}</a></h5><p>playing at</p><h5><a href="/venues/{}">{}</a></h5></div>"#,
            opt(&listing.artist.image_link),
            escape(&format_naive(&listing.show.start_time, DateFormat::Full)),
            listing.artist.id,
            escape(&listing.artist.name),
            listing.venue.id,
            escape(&listing.venue.name)
        );
    }
    body.push_str("</div>");
    layout("Shows", flash, &body)
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{}">"#,
        escape(value)
    )
}

fn state_select(selected: &str) -> String {
    let mut select = String::from(r#"<label for="state">State</label><select id="state" name="state">"#);
    // A stored value outside the list stays selectable so resubmitting keeps it
    if !selected.is_empty() && !STATES.contains(&selected) {
        let _ = write!(select, r#"<option value="{value}" selected>{value}</option>"#, value = escape(selected));
    }
    for state in STATES {
        let marker = if state == selected { " selected" } else { "" };
        let _ = write!(select, r#"<option value="{state}"{marker}>{state}</option>"#);
    }
    select.push_str("</select>");
    select
}

fn genre_select(selected: &[String]) -> String {
    let mut select =
        String::from(r#"<label for="genres">Genres</label><select id="genres" name="genres" multiple>"#);
    for genre in selected.iter().filter(|g| !GENRES.contains(&g.as_str())) {
        let _ = write!(
            select,
            r#"<option value="{value}" selected>{value}</option>"#,
            value = escape(genre)
        );
    }
    for genre in GENRES {
        let marker = if selected.iter().any(|g| g == genre) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            select,
            r#"<option value="{value}"{marker}>{value}</option>"#,
            value = escape(genre)
        );
    }
    select.push_str("</select>");
    select
}

fn checkbox_input(name: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>"#
    )
}

pub fn venue_form(title: &str, action: &str, form: &VenueForm) -> Html<String> {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}" class="form">
{name}
{city}
{state}
{address}
{phone}
{genres}
{image}
{facebook}
{website}
{seeking}
{description}
<button type="submit">Save venue</button>
</form>"#,
        title = escape(title),
        name = text_input("name", "Name", &form.name),
        city = text_input("city", "City", &form.city),
        state = state_select(&form.state),
        address = text_input("address", "Address", form.address.as_deref().unwrap_or_default()),
        phone = text_input("phone", "Phone", form.phone.as_deref().unwrap_or_default()),
        genres = genre_select(&form.genres),
        image = text_input("image_link", "Image link", form.image_link.as_deref().unwrap_or_default()),
        facebook = text_input(
            "facebook_link",
            "Facebook link",
            form.facebook_link.as_deref().unwrap_or_default()
        ),
        website = text_input(
            "website_link",
            "Website",
            form.website_link.as_deref().unwrap_or_default()
        ),
        seeking = checkbox_input("seeking_talent", "Looking for talent", form.seeking_talent.is_some()),
        description = text_input(
            "seeking_description",
            "Seeking description",
            form.seeking_description.as_deref().unwrap_or_default()
        ),
    );
    layout(title, None, &body)
}

pub fn artist_form(title: &str, action: &str, form: &ArtistForm) -> Html<String> {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}" class="form">
{name}
{city}
{state}
{phone}
{genres}
{image}
{facebook}
{website}
{seeking}
{description}
<button type="submit">Save artist</button>
</form>"#,
        title = escape(title),
        name = text_input("name", "Name", &form.name),
        city = text_input("city", "City", &form.city),
        state = state_select(&form.state),
        phone = text_input("phone", "Phone", form.phone.as_deref().unwrap_or_default()),
        genres = genre_select(&form.genres),
        image = text_input("image_link", "Image link", form.image_link.as_deref().unwrap_or_default()),
        facebook = text_input(
            "facebook_link",
            "Facebook link",
            form.facebook_link.as_deref().unwrap_or_default()
        ),
        website = text_input(
            "website_link",
            "Website",
            form.website_link.as_deref().unwrap_or_default()
        ),
        seeking = checkbox_input("seeking_venue", "Looking for venues", form.seeking_venue.is_some()),
        description = text_input(
            "seeking_description",
            "Seeking description",
            form.seeking_description.as_deref().unwrap_or_default()
        ),
    );
    layout(title, None, &body)
}

pub fn show_form(
    form: &ShowForm,
    artists: &[artist::Model],
    venues: &[venue::Model],
) -> Html<String> {
    let mut artist_options = String::new();
    for artist in artists {
        let _ = write!(
            artist_options,
            r#"<option value="{}">{} (#{})</option>"#,
            artist.id,
            escape(&artist.name),
            artist.id
        );
    }
    let mut venue_options = String::new();
    for venue in venues {
        let _ = write!(
            venue_options,
            r#"<option value="{}">{} (#{})</option>"#,
            venue.id,
            escape(&venue.name),
            venue.id
        );
    }
    let body = format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create" class="form">
<label for="artist_id">Artist</label>
<select id="artist_id" name="artist_id">{artist_options}</select>
<label for="venue_id">Venue</label>
<select id="venue_id" name="venue_id">{venue_options}</select>
<label for="start_time">Start time</label>
<input type="text" id="start_time" name="start_time" value="{start_time}" placeholder="YYYY-MM-DD HH:MM:SS">
<button type="submit">Create show</button>
</form>"#,
        start_time = escape(&form.start_time),
    );
    layout("New show", None, &body)
}

pub fn bad_request(message: &str) -> Html<String> {
    let body = format!(
        r#"<h1>That didn't work</h1>
<p class="error">{}</p>
<p><a href="javascript:history.back()">Go back and fix the form</a></p>"#,
        escape(message)
    );
    layout("Invalid input", None, &body)
}

pub fn not_found() -> Html<String> {
    layout(
        "Not found",
        None,
        r#"<h1>404</h1>
<p>Sorry, the page you were looking for doesn't exist.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error(message: &str) -> Html<String> {
    let body = format!(
        r#"<h1>500</h1>
<p class="error">{}</p>
<p><a href="/">Back home</a></p>"#,
        escape(message)
    );
    layout("Server error", None, &body)
}
