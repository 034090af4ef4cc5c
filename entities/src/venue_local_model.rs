use crate::genres::Genres;
use crate::venue::ActiveModel;
use sea_orm::DeriveIntoActiveModel;

/// Every editable venue column; `id` stays unset so the database assigns it.
#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct VenueModel {
    pub name: String,
    pub genres: Genres,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}
