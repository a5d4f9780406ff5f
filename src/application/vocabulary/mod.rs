pub mod cache;
pub mod cleaner;
pub mod config;
pub mod exclusions;
pub mod extractor;
pub mod morphology;
pub mod service;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use cache::VocabularyCache;
pub use extractor::extract;
pub use service::WordService;
pub use types::{Extraction, RetryPolicy};
