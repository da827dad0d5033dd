//! Runtime configuration resolved from the environment.
//!
//! All values have per-user defaults; environment variables override them for
//! development and tests.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cache::AssetManifest;
use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Override for the directory holding the note document.
pub const DATA_DIR_ENV: &str = "JOT_DATA_DIR";
/// Override for the asset cache root directory.
pub const CACHE_DIR_ENV: &str = "JOT_CACHE_DIR";
/// Override for the origin shell assets are fetched from.
pub const SHELL_BASE_URL_ENV: &str = "JOT_SHELL_BASE_URL";
/// Override for the shell cache version (bucket name).
pub const SHELL_VERSION_ENV: &str = "JOT_SHELL_VERSION";

const DEFAULT_SHELL_BASE_URL: &str = "https://app.jot.rs";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the persisted note document
    pub data_dir: PathBuf,
    /// Root directory for versioned asset buckets
    pub cache_dir: PathBuf,
    /// Origin the shell assets are fetched from
    pub shell_base_url: String,
    /// Current shell cache version (bucket name)
    pub shell_version: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolve configuration through an explicit variable lookup.
    ///
    /// Public for testability; callers can exercise resolution without
    /// mutating the process environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match normalize_text_option(lookup(DATA_DIR_ENV)) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()
                .ok_or_else(|| Error::Config("no user data directory available".to_string()))?,
        };

        let cache_dir = match normalize_text_option(lookup(CACHE_DIR_ENV)) {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_dir()
                .ok_or_else(|| Error::Config("no user cache directory available".to_string()))?,
        };

        let shell_base_url = match normalize_text_option(lookup(SHELL_BASE_URL_ENV)) {
            Some(url) if is_http_url(&url) => url,
            Some(url) => {
                return Err(Error::Config(format!(
                    "{SHELL_BASE_URL_ENV} must be an http(s) URL, got {url}"
                )))
            }
            None => DEFAULT_SHELL_BASE_URL.to_string(),
        };

        let shell_version = normalize_text_option(lookup(SHELL_VERSION_ENV))
            .unwrap_or_else(|| AssetManifest::DEFAULT_VERSION.to_string());

        Ok(Self {
            data_dir,
            cache_dir,
            shell_base_url,
            shell_version,
        })
    }

    /// Path of the persisted note document
    #[must_use]
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Manifest for the shell asset cache
    #[must_use]
    pub fn shell_manifest(&self) -> AssetManifest {
        AssetManifest::shell(&self.shell_base_url, &self.shell_version)
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("jot"))
}

fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("jot").join("shell"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn resolve_uses_overrides_when_present() {
        let config = AppConfig::resolve(lookup_from(&[
            (DATA_DIR_ENV, "/tmp/jot-data"),
            (CACHE_DIR_ENV, "/tmp/jot-cache"),
            (SHELL_BASE_URL_ENV, "http://localhost:8080"),
            (SHELL_VERSION_ENV, "jot-shell-v2"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/jot-data"));
        assert_eq!(config.notes_path(), PathBuf::from("/tmp/jot-data/notes.json"));
        assert_eq!(config.shell_base_url, "http://localhost:8080");
        assert_eq!(config.shell_version, "jot-shell-v2");
    }

    #[test]
    fn resolve_rejects_non_http_shell_url() {
        let error = AppConfig::resolve(lookup_from(&[
            (DATA_DIR_ENV, "/tmp/jot-data"),
            (CACHE_DIR_ENV, "/tmp/jot-cache"),
            (SHELL_BASE_URL_ENV, "ftp://example.com"),
        ]))
        .unwrap_err();
        assert!(error.to_string().contains("http(s)"));
    }

    #[test]
    fn resolve_defaults_shell_version() {
        let config = AppConfig::resolve(lookup_from(&[
            (DATA_DIR_ENV, "/tmp/jot-data"),
            (CACHE_DIR_ENV, "/tmp/jot-cache"),
        ]))
        .unwrap();
        assert_eq!(config.shell_version, AssetManifest::DEFAULT_VERSION);
        assert_eq!(config.shell_manifest().version, AssetManifest::DEFAULT_VERSION);
    }

    #[test]
    fn resolve_ignores_blank_overrides() {
        let config = AppConfig::resolve(lookup_from(&[
            (DATA_DIR_ENV, "/tmp/jot-data"),
            (CACHE_DIR_ENV, "/tmp/jot-cache"),
            (SHELL_VERSION_ENV, "   "),
        ]))
        .unwrap();
        assert_eq!(config.shell_version, AssetManifest::DEFAULT_VERSION);
    }
}
