//! Form bindings for the create and edit pages.
//!
//! Fields arrive as `application/x-www-form-urlencoded`; repeated `genres`
//! keys collect into a list. Values are stored as submitted, apart from
//! blank optional fields which become `None`.

use entities::artist_local_model::ArtistModel;
use entities::genres::Genres;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use entities::{artist, venue};
use serde::Deserialize;

use crate::datetime::parse_datetime;
use crate::errors::AppError;

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

fn required(field: &'static str, label: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, format!("{label} is required.")));
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn checked(value: &Option<String>) -> bool {
    matches!(
        value.as_deref(),
        Some("y" | "on" | "true" | "True" | "1")
    )
}

fn checkbox(value: bool) -> Option<String> {
    value.then(|| "y".to_string())
}

fn parse_id(field: &'static str, label: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("{label} must be a numeric id.")))
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(alias = "website")]
    pub website_link: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_model(venue: &venue::Model) -> Self {
        VenueForm {
            name: venue.name.to_owned(),
            city: venue.city.to_owned(),
            state: venue.state.to_owned(),
            address: venue.address.to_owned(),
            phone: venue.phone.to_owned(),
            genres: venue.genres.0.to_owned(),
            image_link: venue.image_link.to_owned(),
            facebook_link: venue.facebook_link.to_owned(),
            website_link: venue.website.to_owned(),
            seeking_talent: checkbox(venue.seeking_talent),
            seeking_description: venue.seeking_description.to_owned(),
        }
    }

    pub fn validate(self) -> Result<VenueModel, AppError> {
        let seeking_talent = checked(&self.seeking_talent);
        Ok(VenueModel {
            name: required("name", "Name", self.name)?,
            city: required("city", "City", self.city)?,
            state: required("state", "State", self.state)?,
            genres: Genres(self.genres),
            address: optional(self.address),
            phone: optional(self.phone),
            website: optional(self.website_link),
            seeking_talent,
            seeking_description: optional(self.seeking_description),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(alias = "website")]
    pub website_link: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_model(artist: &artist::Model) -> Self {
        ArtistForm {
            name: artist.name.to_owned(),
            city: artist.city.to_owned(),
            state: artist.state.to_owned(),
            phone: artist.phone.to_owned(),
            genres: artist.genres.0.to_owned(),
            image_link: artist.image_link.to_owned(),
            facebook_link: artist.facebook_link.to_owned(),
            website_link: artist.website.to_owned(),
            seeking_venue: checkbox(artist.seeking_venue),
            seeking_description: artist.seeking_description.to_owned(),
        }
    }

    pub fn validate(self) -> Result<ArtistModel, AppError> {
        let seeking_venue = checked(&self.seeking_venue);
        Ok(ArtistModel {
            name: required("name", "Name", self.name)?,
            city: required("city", "City", self.city)?,
            state: required("state", "State", self.state)?,
            phone: optional(self.phone),
            genres: Genres(self.genres),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            seeking_venue,
            seeking_description: optional(self.seeking_description),
            website: optional(self.website_link),
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(self) -> Result<ShowModel, AppError> {
        let artist_id = parse_id("artist_id", "Artist", &self.artist_id)?;
        let venue_id = parse_id("venue_id", "Venue", &self.venue_id)?;
        let start_time = parse_datetime(&self.start_time).map_err(|err| {
            AppError::validation("start_time", format!("Start time: {err}."))
        })?;
        Ok(ShowModel {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::Form;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use axum::body::Body;

    async fn bind<T: serde::de::DeserializeOwned + Send>(body: &'static str) -> T {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let Form(form) = Form::<T>::from_request(request, &()).await.unwrap();
        form
    }

    #[tokio::test]
    async fn repeated_genres_become_a_clean_list() {
        let form: VenueForm =
            bind("name=The+Dueling+Pianos+Bar&city=New+York&state=NY&genres=Classical&genres=R%26B")
                .await;
        let venue = form.validate().unwrap();
        assert_eq!(
            venue.genres.0,
            vec!["Classical".to_string(), "R&B".to_string()]
        );
        assert!(!venue.seeking_talent);
    }

    #[tokio::test]
    async fn blank_optionals_are_dropped_and_checkbox_is_read() {
        let form: ArtistForm = bind(
            "name=Guns+N+Petals&city=San+Francisco&state=CA&phone=&website=https%3A%2F%2Fgnp.example&seeking_venue=y",
        )
        .await;
        let artist = form.validate().unwrap();
        assert_eq!(artist.phone, None);
        assert_eq!(artist.website.as_deref(), Some("https://gnp.example"));
        assert!(artist.seeking_venue);
        assert!(artist.genres.0.is_empty());
    }

    #[test]
    fn missing_name_is_a_field_error() {
        let form = VenueForm {
            city: "SF".to_string(),
            state: "CA".to_string(),
            ..Default::default()
        };
        match form.validate() {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn show_form_checks_ids_and_time() {
        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: "1".to_string(),
            start_time: "2035-04-01 20:00:00".to_string(),
        };
        let show = form.validate().unwrap();
        assert_eq!((show.artist_id, show.venue_id), (4, 1));

        let form = ShowForm {
            artist_id: "four".to_string(),
            venue_id: "1".to_string(),
            start_time: "2035-04-01 20:00:00".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation { field: "artist_id", .. })
        ));

        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: "1".to_string(),
            start_time: "soon".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation { field: "start_time", .. })
        ));
    }

    #[test]
    fn edit_form_reflects_the_stored_row() {
        let venue = venue::Model {
            id: 1,
            name: "The Musical Hop".to_string(),
            genres: Genres(vec!["Jazz".to_string()]),
            address: Some("1015 Folsom Street".to_string()),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: None,
            image_link: None,
            facebook_link: None,
        };
        let form = VenueForm::from_model(&venue);
        assert_eq!(form.seeking_talent.as_deref(), Some("y"));
        let round = form.validate().unwrap();
        assert_eq!(round.website, venue.website);
        assert!(round.seeking_talent);
    }
}
