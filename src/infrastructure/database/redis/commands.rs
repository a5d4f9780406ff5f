use super::client::get_conn;
use super::types::RedisResult;

const SADD_CHUNK: usize = 1000;

/// Redis type name of `key`, `"none"` when it does not exist.
pub async fn key_type(key: &str) -> RedisResult<String> {
    let mut conn = get_conn().await?;
    redis::cmd("TYPE").arg(key).query_async(&mut conn).await
}

pub async fn smembers(key: &str) -> RedisResult<Vec<String>> {
    let mut conn = get_conn().await?;
    redis::cmd("SMEMBERS").arg(key).query_async(&mut conn).await
}

/// Atomically drops `key` and refills it with `members`.
pub async fn replace_set(key: &str, members: &[String]) -> RedisResult<()> {
    let mut conn = get_conn().await?;
    let mut pipe = redis::pipe();
    pipe.atomic().cmd("DEL").arg(key).ignore();

    for chunk in members.chunks(SADD_CHUNK) {
        pipe.cmd("SADD").arg(key).arg(chunk).ignore();
    }

    let _: () = pipe.query_async(&mut conn).await?;
    Ok(())
}
