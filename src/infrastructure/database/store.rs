use super::redis as redis_infra;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("key `{key}` holds a {found}, expected a set")]
    WrongKeyType { key: String, found: String },
}

/// Persistent home of the known vocabulary.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Idempotent; makes sure the vocabulary can be read and written.
    async fn ensure_table(&self) -> Result<(), StoreError>;

    /// Every stored word, in no particular order.
    async fn list_all_words(&self) -> Result<Vec<String>, StoreError>;

    /// Drops the stored vocabulary and writes `words` in its place.
    async fn replace_all_words(&self, words: &[String]) -> Result<usize, StoreError>;
}

/// Vocabulary kept as one Redis set. Needs the shared client to be initialized.
pub struct RedisVocabularyStore {
    key: String,
}

impl RedisVocabularyStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// The vocabulary key must hold a set, or not exist yet.
fn check_key_type(key: &str, found: String) -> Result<(), StoreError> {
    match found.as_str() {
        "set" | "none" => Ok(()),
        _ => Err(StoreError::WrongKeyType {
            key: key.to_string(),
            found,
        }),
    }
}

#[async_trait]
impl VocabularyStore for RedisVocabularyStore {
    async fn ensure_table(&self) -> Result<(), StoreError> {
        let found = redis_infra::key_type(&self.key).await?;
        check_key_type(&self.key, found)
    }

    async fn list_all_words(&self) -> Result<Vec<String>, StoreError> {
        Ok(redis_infra::smembers(&self.key).await?)
    }

    async fn replace_all_words(&self, words: &[String]) -> Result<usize, StoreError> {
        redis_infra::replace_set(&self.key, words).await?;
        Ok(words.len())
    }
}
