use serde::Serialize;

use jot_core::cache::AssetCache;
use jot_core::config::AppConfig;

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct CacheStatus {
    version: String,
    base_url: String,
    cached_paths: Vec<String>,
}

fn open_cache() -> Result<AssetCache, CliError> {
    let config = AppConfig::from_env()?;
    Ok(AssetCache::new(
        config.cache_dir.clone(),
        config.shell_manifest(),
    ))
}

pub async fn run_cache_install() -> Result<(), CliError> {
    let cache = open_cache()?;
    cache.install().await?;
    println!("installed {}", cache.manifest().version);
    Ok(())
}

pub async fn run_cache_activate() -> Result<(), CliError> {
    let cache = open_cache()?;
    cache.activate().await?;
    println!("active {}", cache.manifest().version);
    Ok(())
}

pub async fn run_cache_status(as_json: bool) -> Result<(), CliError> {
    let cache = open_cache()?;
    let status = CacheStatus {
        version: cache.manifest().version.clone(),
        base_url: cache.manifest().base_url.clone(),
        cached_paths: cache.cached_paths().await?,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("bucket: {}", status.version);
        println!("origin: {}", status.base_url);
        if status.cached_paths.is_empty() {
            println!("no cached assets (run `jot cache install`)");
        } else {
            for path in &status.cached_paths {
                println!("  {path}");
            }
        }
    }

    Ok(())
}
