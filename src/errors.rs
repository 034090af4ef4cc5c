use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::pages;

const GENERIC_FAILURE: &str = "An error occurred. Please try again later.";

/// Everything a handler can fail with, already sorted into what the visitor sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Swaps in a friendlier message for persistence failures; other kinds pass through.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Persistence { source, .. } => AppError::Persistence {
                message: message.into(),
                source,
            },
            other => other,
        }
    }

    /// True when the database refused the write because rows still reference it.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            AppError::Persistence { source, .. } => matches!(
                source.sql_err(),
                Some(SqlErr::ForeignKeyConstraintViolation(_))
            ),
            _ => false,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(source: DbErr) -> Self {
        AppError::Persistence {
            message: GENERIC_FAILURE.to_string(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            AppError::Validation { field, message } => {
                warn!("Rejected form input for {}: {}", field, message);
                pages::bad_request(message)
            }
            AppError::NotFound { entity, id } => {
                warn!("{} {} doesn't exist", entity, id);
                pages::not_found()
            }
            AppError::Persistence { message, source } => {
                match source.sql_err() {
                    Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                        error!("Rejected by a foreign key constraint: {}", detail)
                    }
                    _ => error!("Error in database connection: {}", source),
                }
                pages::server_error(message)
            }
        };
        (status, page).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_status_classes() {
        assert_eq!(
            AppError::validation("name", "Name is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("Venue", 3).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(DbErr::Custom("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn context_only_rewords_persistence_errors() {
        let err = AppError::from(DbErr::Custom("constraint".to_string()))
            .context("Venue could not be deleted.");
        assert_eq!(err.to_string(), "Venue could not be deleted.");

        let err = AppError::not_found("Artist", 9).context("ignored");
        assert_eq!(err.to_string(), "Artist 9 not found");
    }

    #[test]
    fn only_constraint_refusals_count_as_foreign_key_violations() {
        assert!(!AppError::from(DbErr::Custom("no such table: venue".to_string()))
            .is_foreign_key_violation());
        assert!(!AppError::not_found("Venue", 1).is_foreign_key_violation());
    }
}
