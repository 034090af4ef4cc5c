//! Single-record writes, each inside its own transaction.
//!
//! `run_in_transaction` commits when the work returns `Ok` and rolls back
//! otherwise; the connection goes back to the pool on both paths.

use std::future::Future;
use std::pin::Pin;

use entities::artist_local_model::ArtistModel;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use entities::{artist, show, venue};
use log::info;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};

use crate::errors::AppError;

pub type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

pub async fn run_in_transaction<F, T>(db: &DatabaseConnection, work: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
    T: Send,
{
    db.transaction(work).await.map_err(|err| match err {
        TransactionError::Connection(db_err) => AppError::from(db_err),
        TransactionError::Transaction(app_err) => app_err,
    })
}

pub async fn create_venue(db: &DatabaseConnection, venue: VenueModel) -> Result<venue::Model, AppError> {
    let created = run_in_transaction(db, |txn| {
        Box::pin(async move { Ok(queries::add_venue(txn, venue).await?) })
    })
    .await?;
    info!("Created venue {} with id {}", created.name, created.id);
    Ok(created)
}

pub async fn update_venue(
    db: &DatabaseConnection,
    venue_id: i32,
    venue: VenueModel,
) -> Result<venue::Model, AppError> {
    let updated = run_in_transaction(db, move |txn| {
        Box::pin(async move {
            if queries::get_venue_by_id(txn, venue_id).await?.is_none() {
                return Err(AppError::not_found("Venue", venue_id));
            }
            Ok(queries::update_venue(txn, venue_id, venue).await?)
        })
    })
    .await?;
    info!("Updated venue {}", updated.id);
    Ok(updated)
}

/// Venues that still host shows are refused by the foreign key.
pub async fn delete_venue(db: &DatabaseConnection, venue_id: i32) -> Result<(), AppError> {
    run_in_transaction(db, move |txn| {
        Box::pin(async move {
            match queries::delete_venue_by_id(txn, venue_id).await? {
                0 => Err(AppError::not_found("Venue", venue_id)),
                _ => Ok(()),
            }
        })
    })
    .await?;
    info!("Deleted venue {}", venue_id);
    Ok(())
}

pub async fn create_artist(
    db: &DatabaseConnection,
    artist: ArtistModel,
) -> Result<artist::Model, AppError> {
    let created = run_in_transaction(db, |txn| {
        Box::pin(async move { Ok(queries::add_artist(txn, artist).await?) })
    })
    .await?;
    info!("Created artist {} with id {}", created.name, created.id);
    Ok(created)
}

pub async fn update_artist(
    db: &DatabaseConnection,
    artist_id: i32,
    artist: ArtistModel,
) -> Result<artist::Model, AppError> {
    let updated = run_in_transaction(db, move |txn| {
        Box::pin(async move {
            if queries::get_artist_by_id(txn, artist_id).await?.is_none() {
                return Err(AppError::not_found("Artist", artist_id));
            }
            Ok(queries::update_artist(txn, artist_id, artist).await?)
        })
    })
    .await?;
    info!("Updated artist {}", updated.id);
    Ok(updated)
}

pub async fn delete_artist(db: &DatabaseConnection, artist_id: i32) -> Result<(), AppError> {
    run_in_transaction(db, move |txn| {
        Box::pin(async move {
            match queries::delete_artist_by_id(txn, artist_id).await? {
                0 => Err(AppError::not_found("Artist", artist_id)),
                _ => Ok(()),
            }
        })
    })
    .await?;
    info!("Deleted artist {}", artist_id);
    Ok(())
}

pub async fn create_show(db: &DatabaseConnection, show: ShowModel) -> Result<show::Model, AppError> {
    let created = run_in_transaction(db, |txn| {
        Box::pin(async move { Ok(queries::add_show(txn, show).await?) })
    })
    .await?;
    info!(
        "Created show {} for artist {} at venue {}",
        created.id, created.artist_id, created.venue_id
    );
    Ok(created)
}
