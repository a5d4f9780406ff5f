use super::cache::VocabularyCache;
use super::extractor::extract;
use super::types::{Extraction, RetryPolicy};
use crate::infrastructure::database::{StoreError, VocabularyStore};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;

/// Ties the vocabulary cache to the extractor and keeps the new words of the
/// most recent extraction around for export.
pub struct WordService {
    cache: VocabularyCache,
    last_new_words: ArcSwap<Vec<String>>,
}

impl WordService {
    pub fn new(store: Arc<dyn VocabularyStore>, refresh_interval: Duration, retry: RetryPolicy) -> Self {
        Self {
            cache: VocabularyCache::new(store, refresh_interval, retry),
            last_new_words: ArcSwap::from_pointee(Vec::new()),
        }
    }

    pub fn cache(&self) -> &VocabularyCache {
        &self.cache
    }

    /// Initial load, so the first request does not pay for it.
    pub async fn warm_up(&self) -> Result<usize, StoreError> {
        self.cache.ensure_fresh().await?;
        Ok(self.cache.len())
    }

    pub async fn process(&self, text: &str) -> Result<Extraction, StoreError> {
        self.cache.ensure_fresh().await?;
        let known = self.cache.snapshot();
        let extraction = extract(text, &known);

        self.last_new_words.store(Arc::new(extraction.new.clone()));

        log::info!(
            "extract.all={} uniq={} new={}",
            extraction.all.len(),
            extraction.unique.len(),
            extraction.new.len()
        );
        Ok(extraction)
    }

    pub fn last_new_words(&self) -> Arc<Vec<String>> {
        self.last_new_words.load_full()
    }

    /// Replaces the stored vocabulary wholesale. The cache is invalidated on
    /// success so the next query sees the new words.
    pub async fn replace_vocabulary(&self, words: &[String]) -> Result<usize, StoreError> {
        let inserted = self.cache.store().replace_all_words(words).await?;
        self.cache.invalidate().await;
        log::info!("vocab.replaced={}", inserted);
        Ok(inserted)
    }
}
