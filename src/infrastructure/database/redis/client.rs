use super::types::RedisResult;
use redis::Client;
use redis::aio::MultiplexedConnection;
use std::sync::OnceLock;
use std::time::Duration;

static CLIENT: OnceLock<Client> = OnceLock::new();

pub async fn init(redis_url: &str) -> RedisResult<()> {
    let client = Client::open(redis_url)?;
    CLIENT.set(client).map_err(|_| {
        redis::RedisError::from((
            redis::ErrorKind::IoError,
            "Redis client already initialized",
        ))
    })?;
    Ok(())
}

pub async fn ensure_initialized(redis_url: &str) -> RedisResult<()> {
    if CLIENT.get().is_none() {
        init(redis_url).await?;
    }
    Ok(())
}

pub(super) async fn get_conn() -> RedisResult<MultiplexedConnection> {
    let client = CLIENT.get().ok_or_else(|| {
        redis::RedisError::from((redis::ErrorKind::IoError, "Redis client not initialized"))
    })?;
    client.get_multiplexed_async_connection().await
}

/// Pings the server until it answers, giving up after `retries` attempts.
pub async fn wait_until_ready(redis_url: &str, retries: u32, delay: Duration) -> RedisResult<()> {
    ensure_initialized(redis_url).await?;

    let mut attempt = 1;
    loop {
        let result = match get_conn().await {
            Ok(mut conn) => redis::cmd("PING").query_async::<String>(&mut conn).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(_) => return Ok(()),
            Err(e) if attempt < retries => {
                log::warn!("Waiting for Redis... ({}/{}): {}", attempt, retries, e);
                attempt += 1;
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
