use anyhow::anyhow;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::conf::config::LogConfig;

/// `RUST_LOG` wins over the configured level.
pub fn env_filter(c: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(c))
}

/// Filter built from the configured directive alone.
pub fn level_filter(c: &LogConfig) -> EnvFilter {
    EnvFilter::new(&c.level)
}

/// Installs the global subscriber: stdout, plus a daily rolling file when
/// `c.dir` is set. Hold the returned guard until exit or buffered file
/// lines are lost.
pub fn init_tracing(c: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));

    let stdout_layer = fmt::layer().with_timer(timer.clone()).with_target(true);

    let (file_layer, guard) = match &c.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &c.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(timer)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(c))
        .with(ErrorLayer::default())
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("init tracing subscriber: {}", e))?;

    tracing::debug!(level = %c.level, dir = ?c.dir, "tracing initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_level_filter_from_config() {
        let c = LogConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(level_filter(&c).max_level_hint(), Some(LevelFilter::DEBUG));

        let c = LogConfig {
            level: "redis_cache=trace,warn".to_string(),
            ..Default::default()
        };
        assert_eq!(level_filter(&c).max_level_hint(), Some(LevelFilter::TRACE));

        let c = LogConfig {
            level: "off".to_string(),
            ..Default::default()
        };
        assert_eq!(level_filter(&c).max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn test_init_tracing_only_once() {
        let c = LogConfig::default();
        assert!(init_tracing(&c).unwrap().is_none());
        assert!(init_tracing(&c).is_err());
    }
}
