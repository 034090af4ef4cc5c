use crate::artist::ActiveModel;
use crate::genres::Genres;
use sea_orm::DeriveIntoActiveModel;

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct ArtistModel {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub website: Option<String>,
}
