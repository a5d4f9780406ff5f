use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;

mod application;
mod infrastructure;
mod interfaces;

use application::{RetryPolicy, WordService};
use infrastructure::config::{CONNECT_DELAY, CONNECT_RETRIES, Settings};
use infrastructure::database::{self as redis_infra, RedisVocabularyStore, VocabularyStore};
use infrastructure::logging;
use interfaces::http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let settings = Settings::from_env()?;
    log::info!(
        "Vocabulary key={} refresh_interval_s={} store_retries={}",
        settings.vocabulary_key,
        settings.refresh_interval.as_secs(),
        settings.store_retries
    );

    redis_infra::wait_until_ready(&settings.redis_url, CONNECT_RETRIES, CONNECT_DELAY)
        .await
        .context("cannot connect to Redis")?;
    log::info!("Connected to Redis");

    let store: Arc<dyn VocabularyStore> =
        Arc::new(RedisVocabularyStore::new(settings.vocabulary_key.clone()));
    let service = Arc::new(WordService::new(
        store,
        settings.refresh_interval,
        RetryPolicy::with_retries(settings.store_retries),
    ));

    let known = service
        .warm_up()
        .await
        .context("initial vocabulary load failed")?;
    log::info!("Loaded {} known words", known);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    log::info!("Server started on http://{}", addr);

    axum::serve(listener, http::router(service))
        .await
        .context("server failed")?;
    Ok(())
}
