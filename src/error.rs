use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("MongoDB non connecté")]
    NotConnected,

    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

/// Every failure surfaces as a plain-text 500 carrying the raw message,
/// prefixed the same way regardless of variant.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::NotConnected => "Erreur: MongoDB non connecté".to_string(),
            AppError::DatabaseError(err) => format!("Erreur: {}", err),
            AppError::ConfigError(err) => format!("Erreur: {}", err),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
