use serde::Serialize;
use std::time::Duration;

use super::config::{INITIAL_BACKOFF_MS, MAX_BACKOFF_MS};

/// Outcome of one extraction call.
///
/// `all` holds the raw regex matches in order of appearance. `unique` and
/// `new` hold deduplicated lower-case base forms in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    #[serde(rename = "all_words")]
    pub all: Vec<String>,
    #[serde(rename = "uniq_words")]
    pub unique: Vec<String>,
    #[serde(rename = "new_words")]
    pub new: Vec<String>,
}

/// How often a failed vocabulary load is retried before it is treated as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn with_retries(retries: u32) -> Self {
        Self {
            retries,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 0,
            initial_backoff: Duration::from_millis(INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_millis(MAX_BACKOFF_MS),
        }
    }
}
