use crate::infrastructure::database::{StoreError, VocabularyStore};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory store for tests. Counts successful loads and can be told to fail.
#[derive(Default)]
pub(crate) struct MemoryStore {
    words: Mutex<Vec<String>>,
    delay: Option<Duration>,
    failures_left: AtomicUsize,
    loads: AtomicUsize,
    tables_ensured: AtomicUsize,
}

impl MemoryStore {
    pub(crate) fn with_words(words: &[&str]) -> Self {
        let store = Self::default();
        store.set_words(words);
        store
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn set_words(&self, words: &[&str]) {
        *self.words.lock() = words.iter().map(|w| w.to_string()).collect();
    }

    pub(crate) fn words(&self) -> Vec<String> {
        self.words.lock().clone()
    }

    pub(crate) fn fail_next(&self, n: usize) {
        self.failures_left.store(n, Ordering::SeqCst);
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub(crate) fn tables_ensured(&self) -> usize {
        self.tables_ensured.load(Ordering::SeqCst)
    }

    fn take_failure(&self) -> bool {
        self.failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

fn unavailable() -> StoreError {
    StoreError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "connection refused",
    )))
}

#[async_trait]
impl VocabularyStore for MemoryStore {
    async fn ensure_table(&self) -> Result<(), StoreError> {
        self.tables_ensured.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_all_words(&self) -> Result<Vec<String>, StoreError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.take_failure() {
            return Err(unavailable());
        }
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.words())
    }

    async fn replace_all_words(&self, words: &[String]) -> Result<usize, StoreError> {
        if self.take_failure() {
            return Err(unavailable());
        }
        *self.words.lock() = words.to_vec();
        Ok(words.len())
    }
}
