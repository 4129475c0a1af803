use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use redis_cache::conf::config::Conf;
use redis_cache::helpers::logging;
use redis_cache::{Cache, Store};

/// Write one string value to redis.
#[derive(Debug, Parser)]
#[command(name = "cache-set", version)]
struct Args {
    /// Config file (defaults to $CACHE_CONFIG, then ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Redis address, overrides the config file and $REDIS_URL
    #[arg(short, long)]
    url: Option<String>,

    key: String,
    value: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut c = Conf::load(args.config.unwrap_or_else(Conf::default_path))?;
    if let Some(url) = args.url {
        c.redis.url = url;
    }
    let _guard = logging::init_tracing(&c.log)?;

    let store = Store::from_conf(&c).context("open redis client")?;
    let conn = store.connect().await.context("connect to redis")?;

    let cache = Cache::new(&conn);
    if let Err(e) = cache.set(&args.key, &args.value).await {
        error!(key = %args.key, "{}\n{}", e, e.span_trace());
        return Err(e).context("set value");
    }
    info!(key = %args.key, url = store.url(), "value stored");

    Ok(())
}
