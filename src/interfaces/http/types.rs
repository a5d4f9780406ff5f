use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::WordService;

pub type AppState = Arc<WordService>;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub known_words: usize,
}
