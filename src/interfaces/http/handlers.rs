use super::export::words_to_csv;
use super::error::{ApiError, fatal};
use super::types::{AppState, HealthResponse, ProcessRequest};
use crate::application::Extraction;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

pub const CSV_FILENAME: &str = "new_vocabulary.csv";

pub async fn process_text(
    State(service): State<AppState>,
    body: Bytes,
) -> Result<Json<Extraction>, ApiError> {
    let request: ProcessRequest = serde_json::from_slice(&body).map_err(ApiError::InvalidJson)?;
    match service.process(&request.text).await {
        Ok(extraction) => Ok(Json(extraction)),
        Err(e) => fatal(&e),
    }
}

pub async fn download_csv(State(service): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = words_to_csv(&service.last_new_words())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILENAME),
            ),
        ],
        body,
    ))
}

pub async fn insert_words(
    State(service): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let words: Vec<String> = serde_json::from_slice(&body).map_err(ApiError::InvalidJson)?;
    let inserted = service
        .replace_vocabulary(&words)
        .await
        .map_err(ApiError::StoreWrite)?;
    log::info!("Successfully inserted {} words", inserted);
    Ok("Words added")
}

pub async fn health(State(service): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let cache = service.cache();
    let known_words = cache.len();
    if cache.is_loaded() {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ready",
                known_words,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "loading",
                known_words,
            }),
        )
    }
}
