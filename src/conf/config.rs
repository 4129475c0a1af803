use serde::Deserialize;

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};

use anyhow::Context;
use once_cell::sync::Lazy;

use crate::conf::vars;

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: vars::DEFAULT_REDIS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily rolling log files. Stdout only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_log_level() -> String {
    vars::DEFAULT_LOG_LEVEL.to_string()
}

fn default_file_prefix() -> String {
    vars::DEFAULT_LOG_FILE_PREFIX.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Conf {
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Conf {
    /// Loads the config file at `path`, then applies environment overrides.
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Conf> {
        let path = path.as_ref();
        let mut conf = match File::open(path) {
            Ok(mut file) => {
                let mut str_val = String::new();
                file.read_to_string(&mut str_val)
                    .with_context(|| format!("read config file {}", path.display()))?;
                Self::parse(&str_val)
                    .with_context(|| format!("parse config file {}", path.display()))?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Conf::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("open config file {}", path.display()));
            }
        };
        conf.apply_env();
        Ok(conf)
    }

    pub fn parse(s: &str) -> anyhow::Result<Conf> {
        Ok(toml::from_str(s)?)
    }

    /// `CACHE_CONFIG` if set, otherwise `config.toml` next to the manifest.
    pub fn default_path() -> PathBuf {
        match std::env::var_os(vars::ENV_CONFIG_PATH) {
            Some(p) => PathBuf::from(p),
            None => Path::new(env!("CARGO_MANIFEST_DIR")).join(vars::CONFIG_FILE),
        }
    }

    /// Process-wide config, loaded once from [`Conf::default_path`].
    pub fn get() -> &'static Conf {
        static INSTANCE: Lazy<Conf> = Lazy::new(|| {
            let path = Conf::default_path();
            Conf::load(&path).unwrap_or_else(|e| {
                eprintln!("falling back to default config: {:#}", e);
                let mut conf = Conf::default();
                conf.apply_env();
                conf
            })
        });
        &INSTANCE
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(vars::ENV_REDIS_URL) {
            if !url.is_empty() {
                self.redis.url = url;
            }
        }
    }
}
