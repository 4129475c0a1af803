// config file
pub const CONFIG_FILE: &str = "config.toml";

// environment
pub const ENV_CONFIG_PATH: &str = "CACHE_CONFIG";
pub const ENV_REDIS_URL: &str = "REDIS_URL";

// defaults
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "cache";
