use crate::show::ActiveModel;
use sea_orm::prelude::DateTime;
use sea_orm::DeriveIntoActiveModel;

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct ShowModel {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime,
}
