use crate::infrastructure::database::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Error writing to DB")]
    StoreWrite(#[source] StoreError),
    #[error("Error writing CSV")]
    Csv(#[from] csv::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreWrite(_) | ApiError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// A vocabulary that cannot be loaded means novelty results would be wrong,
/// so the process stops instead of answering.
pub fn fatal(err: &StoreError) -> ! {
    log::error!("vocab.fatal backing store unavailable: {}", err);
    std::process::exit(1)
}
