use std::collections::HashMap;

use entities::artist_local_model::ArtistModel;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use entities::{artist, show, venue};
use log::warn;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// A show together with both of the rows it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowListing {
    pub show: show::Model,
    pub artist: artist::Model,
    pub venue: venue::Model,
}

pub async fn get_all_venues<C: ConnectionTrait>(db: &C) -> Result<Vec<venue::Model>, DbErr> {
    venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await
}

pub async fn get_all_artists<C: ConnectionTrait>(db: &C) -> Result<Vec<artist::Model>, DbErr> {
    artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await
}

pub async fn get_all_shows<C: ConnectionTrait>(db: &C) -> Result<Vec<show::Model>, DbErr> {
    show::Entity::find()
        .order_by_asc(show::Column::Id)
        .all(db)
        .await
}

pub async fn get_venue_by_id<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
) -> Result<Option<venue::Model>, DbErr> {
    venue::Entity::find_by_id(venue_id).one(db).await
}

pub async fn get_artist_by_id<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
) -> Result<Option<artist::Model>, DbErr> {
    artist::Entity::find_by_id(artist_id).one(db).await
}

/// Shows booked at a venue, each paired with its artist, in insertion order.
pub async fn shows_for_venue<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
) -> Result<Vec<(show::Model, artist::Model)>, DbErr> {
    let rows = show::Entity::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .order_by_asc(show::Column::Id)
        .find_also_related(artist::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(show, artist)| match artist {
            Some(artist) => Some((show, artist)),
            None => {
                warn!("Show {} references missing artist {}", show.id, show.artist_id);
                None
            }
        })
        .collect())
}

/// Shows played by an artist, each paired with its venue, in insertion order.
pub async fn shows_for_artist<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
) -> Result<Vec<(show::Model, venue::Model)>, DbErr> {
    let rows = show::Entity::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .order_by_asc(show::Column::Id)
        .find_also_related(venue::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(show, venue)| match venue {
            Some(venue) => Some((show, venue)),
            None => {
                warn!("Show {} references missing venue {}", show.id, show.venue_id);
                None
            }
        })
        .collect())
}

pub async fn get_show_listings<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowListing>, DbErr> {
    let rows = show::Entity::find()
        .order_by_asc(show::Column::Id)
        .find_also_related(artist::Entity)
        .all(db)
        .await?;
    let venues: HashMap<i32, venue::Model> = get_all_venues(db)
        .await?
        .into_iter()
        .map(|venue| (venue.id, venue))
        .collect();

    let mut ret = Vec::with_capacity(rows.len());
    for (show, artist) in rows {
        // Let's trust the referential integrity, but don't fall over if it's broken
        let (Some(artist), Some(venue)) = (artist, venues.get(&show.venue_id)) else {
            warn!("Skipping show {} with a dangling reference", show.id);
            continue;
        };
        ret.push(ShowListing {
            venue: venue.clone(),
            artist,
            show,
        });
    }
    Ok(ret)
}

pub async fn add_venue<C: ConnectionTrait>(db: &C, venue: VenueModel) -> Result<venue::Model, DbErr> {
    venue.into_active_model().insert(db).await
}

pub async fn update_venue<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
    venue: VenueModel,
) -> Result<venue::Model, DbErr> {
    // Every editable column is written, so cleared optionals become NULL
    venue::ActiveModel {
        id: ActiveValue::Unchanged(venue_id),
        name: ActiveValue::Set(venue.name),
        genres: ActiveValue::Set(venue.genres),
        address: ActiveValue::Set(venue.address),
        city: ActiveValue::Set(venue.city),
        state: ActiveValue::Set(venue.state),
        phone: ActiveValue::Set(venue.phone),
        website: ActiveValue::Set(venue.website),
        seeking_talent: ActiveValue::Set(venue.seeking_talent),
        seeking_description: ActiveValue::Set(venue.seeking_description),
        image_link: ActiveValue::Set(venue.image_link),
        facebook_link: ActiveValue::Set(venue.facebook_link),
    }
    .update(db)
    .await
}

/// Returns the number of rows removed, zero when no venue has that id.
pub async fn delete_venue_by_id<C: ConnectionTrait>(db: &C, venue_id: i32) -> Result<u64, DbErr> {
    let ret = venue::Entity::delete_by_id(venue_id).exec(db).await?;
    Ok(ret.rows_affected)
}

pub async fn add_artist<C: ConnectionTrait>(
    db: &C,
    artist: ArtistModel,
) -> Result<artist::Model, DbErr> {
    artist.into_active_model().insert(db).await
}

pub async fn update_artist<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
    artist: ArtistModel,
) -> Result<artist::Model, DbErr> {
    artist::ActiveModel {
        id: ActiveValue::Unchanged(artist_id),
        name: ActiveValue::Set(artist.name),
        city: ActiveValue::Set(artist.city),
        state: ActiveValue::Set(artist.state),
        phone: ActiveValue::Set(artist.phone),
        genres: ActiveValue::Set(artist.genres),
        image_link: ActiveValue::Set(artist.image_link),
        facebook_link: ActiveValue::Set(artist.facebook_link),
        seeking_venue: ActiveValue::Set(artist.seeking_venue),
        seeking_description: ActiveValue::Set(artist.seeking_description),
        website: ActiveValue::Set(artist.website),
    }
    .update(db)
    .await
}

pub async fn delete_artist_by_id<C: ConnectionTrait>(db: &C, artist_id: i32) -> Result<u64, DbErr> {
    let ret = artist::Entity::delete_by_id(artist_id).exec(db).await?;
    Ok(ret.rows_affected)
}

pub async fn add_show<C: ConnectionTrait>(db: &C, show: ShowModel) -> Result<show::Model, DbErr> {
    show.into_active_model().insert(db).await
}
