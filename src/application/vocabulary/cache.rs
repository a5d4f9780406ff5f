use super::types::RetryPolicy;
use crate::infrastructure::database::{StoreError, VocabularyStore};
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Known base forms, reloaded from the store once the current copy is older
/// than the refresh interval.
///
/// The staleness check and the reload run under one mutex, so at most one
/// reload is in flight. Readers never take that mutex: they load the current
/// set out of an `ArcSwap`, which only ever holds a fully built set.
pub struct VocabularyCache {
    store: Arc<dyn VocabularyStore>,
    interval: Duration,
    retry: RetryPolicy,
    words: ArcSwap<HashSet<String>>,
    loaded_at: Mutex<Option<Instant>>,
    loaded: AtomicBool,
}

impl VocabularyCache {
    pub fn new(store: Arc<dyn VocabularyStore>, interval: Duration, retry: RetryPolicy) -> Self {
        Self {
            store,
            interval,
            retry,
            words: ArcSwap::from_pointee(HashSet::new()),
            loaded_at: Mutex::new(None),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<dyn VocabularyStore> {
        &self.store
    }

    /// Reloads the set if it was never loaded, was invalidated, or has aged
    /// past the refresh interval.
    pub async fn ensure_fresh(&self) -> Result<(), StoreError> {
        let mut loaded_at = self.loaded_at.lock().await;
        let stale = match *loaded_at {
            Some(at) => at.elapsed() >= self.interval,
            None => true,
        };
        if !stale {
            return Ok(());
        }

        let words = self.load_with_retry().await?;
        self.words.store(Arc::new(words));
        *loaded_at = Some(Instant::now());
        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Forces the next `ensure_fresh` to reload, whatever the age of the set.
    pub async fn invalidate(&self) {
        self.loaded_at.lock().await.take();
    }

    pub fn snapshot(&self) -> Arc<HashSet<String>> {
        self.words.load_full()
    }

    pub async fn contains(&self, word: &str) -> Result<bool, StoreError> {
        self.ensure_fresh().await?;
        Ok(self.words.load().contains(&word.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.words.load().len()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    async fn load_with_retry(&self) -> Result<HashSet<String>, StoreError> {
        let mut attempt = 0u32;
        let mut backoff = self.retry.initial_backoff;
        loop {
            match self.load().await {
                Ok(words) => return Ok(words),
                Err(e) if attempt < self.retry.retries => {
                    attempt += 1;
                    log::warn!(
                        "vocab.load failed attempt={}/{} retry_in_ms={}: {}",
                        attempt,
                        self.retry.retries,
                        backoff.as_millis(),
                        e
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(self.retry.max_backoff);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn load(&self) -> Result<HashSet<String>, StoreError> {
        let t0 = std::time::Instant::now();
        self.store.ensure_table().await?;
        let words: HashSet<String> = self
            .store
            .list_all_words()
            .await?
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();

        log::info!(
            "vocab.loaded={} perf.load_us={}",
            words.len(),
            t0.elapsed().as_micros()
        );
        Ok(words)
    }
}
