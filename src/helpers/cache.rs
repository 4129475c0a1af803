use std::fmt;

use redis::aio::{ConnectionLike, MultiplexedConnection};
use redis::{AsyncCommands, RedisResult};
use tracing::{debug, instrument, warn};

use crate::error::StoreResult;

/// Narrow write facade over a redis connection owned by someone else.
///
/// The cache only borrows the connection: it never closes it, and the
/// borrow checker keeps the connection alive for as long as the cache is.
/// Concurrent `set`s through one cache share the connection as-is; any
/// multiplexing comes from the connection type.
pub struct Cache<'c, C = MultiplexedConnection> {
    connection: &'c C,
}

impl<'c, C> Cache<'c, C>
where
    C: ConnectionLike + Clone + Send + Sync,
{
    pub fn new(connection: &'c C) -> Self {
        Self { connection }
    }

    /// Stores `value` under `key` with a plain `SET`: no expiry, no
    /// conditions. Empty keys and values are sent as-is. Errors from the
    /// store are returned unchanged and not retried.
    #[instrument(
        level = "debug",
        name = "cache_set",
        skip(self, value),
        fields(value_len = value.len())
    )]
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.connection.clone();
        let result: RedisResult<()> = conn.set(key, value).await;
        match result {
            Ok(()) => {
                debug!("value stored");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "set failed");
                Err(e.into())
            }
        }
    }
}

impl<C> Clone for Cache<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Cache<'_, C> {}

impl<C> fmt::Debug for Cache<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("connection", &"<redis connection>")
            .finish()
    }
}
