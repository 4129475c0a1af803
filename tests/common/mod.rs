use redis::aio::MultiplexedConnection;
use testcontainers::core::{ContainerAsync, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::GenericImage;

use redis_cache::Store;

const REDIS_PORT: u16 = 6379;

/// A throwaway redis server and one connection to it. Dropping this stops
/// and removes the container whether or not the test passed.
pub struct RedisFixture {
    pub store: Store,
    pub conn: MultiplexedConnection,
    container: ContainerAsync<GenericImage>,
}

impl RedisFixture {
    pub async fn start() -> Self {
        let image = GenericImage::new("redis", "7-alpine")
            .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"));
        let container = image.start().await.expect("Failed to start Redis container");
        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");
        let url = format!("redis://127.0.0.1:{}", port);

        let store = Store::open(&url).expect("Failed to open redis client");
        let conn = store.connect().await.expect("Failed to connect to redis");
        Self {
            store,
            conn,
            container,
        }
    }

    /// Reads `key` straight through the connection, bypassing the cache.
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.conn.clone();
        redis::AsyncCommands::get(&mut conn, key)
            .await
            .expect("Failed to read back")
    }

    /// Stops the server while keeping `conn` around, so later commands on
    /// it hit a dead link.
    pub async fn stop_server(&self) {
        self.container
            .stop()
            .await
            .expect("Failed to stop Redis container");
    }
}
