use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The catalog dataset is malformed or unusable. Fatal at startup; the
    /// service must not come up with a half-built index.
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Dataset parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The query did not fuzzy-match any known title closely enough.
    #[error("No title closely matches {0:?}")]
    NoMatch(String),

    /// Internal invariant violation: a matched title failed to resolve.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NoMatch(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Dataset(_) | AppError::Csv(_) | AppError::NotFound(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
