pub mod redis;
pub mod store;

pub use self::redis::wait_until_ready;
pub use store::{RedisVocabularyStore, StoreError, VocabularyStore};
