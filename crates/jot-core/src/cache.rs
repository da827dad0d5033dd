//! Offline asset cache.
//!
//! Shell assets are pre-fetched into a bucket directory named by a version
//! string. Lookups are exact-match against the live bucket with no freshness
//! check; misses fall through to the network and are not cached. Stale
//! buckets are removed wholesale when a new version activates, so picking up
//! updated assets always goes through a version bump.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::error::{Error, Result};

/// Default shell asset paths, mirroring the served page shell.
const SHELL_PATHS: &[&str] = &[
    "/",
    "/index.html",
    "/manifest.json",
    "/icon-192.png",
    "/icon-512.png",
    "/static/js/main.js",
    "/static/css/main.css",
];

/// The fixed list of assets to pre-fetch, tagged with the bucket version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Bucket name; bumping it replaces the whole cache on next activation
    pub version: String,
    /// Origin the assets are fetched from
    pub base_url: String,
    /// Request paths to pre-fetch at install time
    pub paths: Vec<String>,
}

impl AssetManifest {
    /// Version used when no override is configured
    pub const DEFAULT_VERSION: &'static str = "jot-shell-v1";

    /// Manifest covering the standard page shell
    #[must_use]
    pub fn shell(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            base_url: base_url.into(),
            paths: SHELL_PATHS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Where a fetched asset body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Cache,
    Network,
}

/// A resolved asset body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub source: AssetSource,
}

/// Versioned on-disk asset cache.
///
/// One directory per version under `root`; entries are keyed by the
/// percent-encoded request path.
#[derive(Debug, Clone)]
pub struct AssetCache {
    root: PathBuf,
    manifest: AssetManifest,
    client: reqwest::Client,
}

impl AssetCache {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, manifest: AssetManifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            client: reqwest::Client::new(),
        }
    }

    /// The manifest this cache was built from
    #[must_use]
    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Pre-fetch every manifest path into the current bucket.
    ///
    /// A failed fetch is logged and skipped; the remaining entries still run
    /// and install completes normally. Nothing is retried.
    pub async fn install(&self) -> Result<()> {
        tokio::fs::create_dir_all(self.bucket_dir()).await?;

        for path in &self.manifest.paths {
            match self.fetch_from_network(path).await {
                Ok(bytes) => {
                    tokio::fs::write(self.entry_path(path), &bytes).await?;
                    tracing::debug!("Cached {path} ({} bytes)", bytes.len());
                }
                Err(error) => {
                    tracing::warn!("Failed to pre-fetch {path}: {error}");
                }
            }
        }

        tracing::info!("Asset cache {} installed", self.manifest.version);
        Ok(())
    }

    /// Delete every bucket whose name is not the current version.
    ///
    /// Deletions run concurrently and are all joined before this returns, so
    /// no later lookup can race a half-deleted bucket.
    pub async fn activate(&self) -> Result<()> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => return Err(error.into()),
        };

        let mut deletions = JoinSet::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().to_string_lossy() == self.manifest.version {
                continue;
            }
            let stale = entry.path();
            deletions.spawn(async move {
                tracing::info!("Removing stale asset bucket {}", stale.display());
                tokio::fs::remove_dir_all(&stale).await
            });
        }

        while let Some(joined) = deletions.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(error)) => return Err(error.into()),
                Err(join_error) => return Err(Error::Cache(join_error.to_string())),
            }
        }

        tracing::info!("Asset cache {} active", self.manifest.version);
        Ok(())
    }

    /// Resolve an asset, cache first.
    ///
    /// A cached entry is returned as-is without touching the network. On a
    /// miss the request goes to `base_url` and the response is passed back
    /// unchanged; misses never populate the cache.
    pub async fn fetch(&self, path: &str) -> Result<Asset> {
        match tokio::fs::read(self.entry_path(path)).await {
            Ok(bytes) => {
                return Ok(Asset {
                    bytes,
                    source: AssetSource::Cache,
                })
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => return Err(error.into()),
        }

        let bytes = self.fetch_from_network(path).await?;
        Ok(Asset {
            bytes,
            source: AssetSource::Network,
        })
    }

    /// Request paths currently present in the live bucket, sorted
    pub async fn cached_paths(&self) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(self.bucket_dir()).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let encoded = name.to_string_lossy();
            let decoded = urlencoding::decode(&encoded)
                .map_or_else(|_| encoded.to_string(), std::borrow::Cow::into_owned);
            paths.push(decoded);
        }
        paths.sort();
        Ok(paths)
    }

    fn bucket_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.version)
    }

    fn entry_path(&self, path: &str) -> PathBuf {
        self.bucket_dir().join(urlencoding::encode(path).as_ref())
    }

    async fn fetch_from_network(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{path}", self.manifest.base_url.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::AssetStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    fn manifest(base_url: &str, version: &str, paths: &[&str]) -> AssetManifest {
        AssetManifest {
            version: version.to_string(),
            base_url: base_url.to_string(),
            paths: paths.iter().map(ToString::to_string).collect(),
        }
    }

    /// Tiny HTTP server answering each request from a fixed path table.
    async fn spawn_shell_server(responses: &[(&str, u16, &str)]) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let table: HashMap<String, (u16, String)> = responses
            .iter()
            .map(|(path, status, body)| ((*path).to_string(), (*status, (*body).to_string())))
            .collect();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let table = table.clone();
                tokio::spawn(async move {
                    let mut request_buffer = [0_u8; 1024];
                    let read = socket.read(&mut request_buffer).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&request_buffer[..read]);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = table
                        .get(&path)
                        .cloned()
                        .unwrap_or((404, String::from("missing")));
                    let response = format!(
                        "HTTP/1.1 {status} X\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });

        format!("http://{address}")
    }

    #[tokio::test]
    async fn install_skips_failed_entries_and_still_completes() {
        let base_url =
            spawn_shell_server(&[("/a", 200, "body-a"), ("/b", 500, "boom"), ("/c", 200, "body-c")])
                .await;
        let root = tempfile::tempdir().unwrap();
        let cache = AssetCache::new(root.path(), manifest(&base_url, "v1", &["/a", "/b", "/c"]));

        cache.install().await.expect("install completes");

        assert_eq!(cache.cached_paths().await.unwrap(), vec!["/a", "/c"]);
        let asset = cache.fetch("/a").await.unwrap();
        assert_eq!(asset.source, AssetSource::Cache);
        assert_eq!(asset.bytes, b"body-a");
    }

    #[tokio::test]
    async fn fetch_hit_never_touches_the_network() {
        // base_url points nowhere; a cache hit must still succeed
        let root = tempfile::tempdir().unwrap();
        let cache = AssetCache::new(
            root.path(),
            manifest("http://127.0.0.1:1", "v1", &["/app.css"]),
        );
        tokio::fs::create_dir_all(root.path().join("v1"))
            .await
            .unwrap();
        tokio::fs::write(
            root.path().join("v1").join(urlencoding::encode("/app.css").as_ref()),
            b"cached-css",
        )
        .await
        .unwrap();

        let asset = cache.fetch("/app.css").await.unwrap();
        assert_eq!(asset.source, AssetSource::Cache);
        assert_eq!(asset.bytes, b"cached-css");
    }

    #[tokio::test]
    async fn fetch_miss_passes_through_without_caching() {
        let base_url = spawn_shell_server(&[("/late.js", 200, "network-body")]).await;
        let root = tempfile::tempdir().unwrap();
        let cache = AssetCache::new(root.path(), manifest(&base_url, "v1", &[]));

        let asset = cache.fetch("/late.js").await.unwrap();
        assert_eq!(asset.source, AssetSource::Network);
        assert_eq!(asset.bytes, b"network-body");

        // The miss did not populate the bucket
        assert_eq!(cache.cached_paths().await.unwrap(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn fetch_miss_propagates_http_failure() {
        let base_url = spawn_shell_server(&[("/broken", 503, "down")]).await;
        let root = tempfile::tempdir().unwrap();
        let cache = AssetCache::new(root.path(), manifest(&base_url, "v1", &[]));

        let error = cache.fetch("/broken").await.unwrap_err();
        assert!(error.to_string().contains("503"));
    }

    #[tokio::test]
    async fn activate_purges_every_stale_bucket() {
        let base_url = spawn_shell_server(&[("/only-in-v1", 200, "fresh-body")]).await;
        let root = tempfile::tempdir().unwrap();

        // A stale v1 bucket holding an asset the v2 bucket does not have
        let stale_dir = root.path().join("v1");
        tokio::fs::create_dir_all(&stale_dir).await.unwrap();
        tokio::fs::write(
            stale_dir.join(urlencoding::encode("/only-in-v1").as_ref()),
            b"stale-body",
        )
        .await
        .unwrap();

        let cache = AssetCache::new(root.path(), manifest(&base_url, "v2", &[]));
        tokio::fs::create_dir_all(root.path().join("v2"))
            .await
            .unwrap();

        cache.activate().await.expect("activation completes");

        let mut remaining = Vec::new();
        let mut entries = tokio::fs::read_dir(root.path()).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            remaining.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(remaining, vec!["v2"]);

        // The asset that only lived in v1 now falls through to the network
        let asset = cache.fetch("/only-in-v1").await.unwrap();
        assert_eq!(asset.source, AssetSource::Network);
        assert_eq!(asset.bytes, b"fresh-body");
    }

    #[tokio::test]
    async fn activate_with_no_cache_root_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        let missing_root = root.path().join("never-created");
        let cache = AssetCache::new(&missing_root, manifest("http://127.0.0.1:1", "v1", &[]));
        cache.activate().await.expect("nothing to purge");
    }

    #[test]
    fn shell_manifest_lists_the_page_shell() {
        let manifest = AssetManifest::shell("https://example.com", "v9");
        assert_eq!(manifest.version, "v9");
        assert!(manifest.paths.contains(&"/index.html".to_string()));
        assert!(manifest.paths.contains(&"/static/css/main.css".to_string()));
        assert_eq!(manifest.paths.len(), 7);
    }
}
