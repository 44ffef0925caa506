//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = match &self {
            AppError::NotFound(_) => Envelope::not_found(),
            AppError::Validation(reason) => {
                tracing::warn!(%reason, "rejected article payload");
                Envelope::not_acceptable()
            }
            AppError::Db(err) => {
                tracing::error!(%err, "database error");
                Envelope::internal_error()
            }
        };
        envelope.into_response()
    }
}
