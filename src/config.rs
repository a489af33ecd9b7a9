//! Configuration for load runs and seeding.
//!
//! Settings come from an optional YAML file (`brickload.yaml` or
//! `.brickload.yaml` in the working directory) with the `TARGET_URL`
//! environment variable taking precedence for the base URL.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the service under test.
pub const TARGET_URL_ENV: &str = "TARGET_URL";

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["brickload.yaml", ".brickload.yaml"];

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LoadConfig {
    /// Base URL of the service under test, e.g. `http://localhost:8000/rest`.
    /// Overridden by `TARGET_URL` when set.
    #[serde(default)]
    pub base_url: String,
    /// Directory holding the image files attached to catalog-item uploads.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Per-request timeout in milliseconds.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// Seeding volumes and ratios.
    #[serde(default)]
    pub seed: SeedProfile,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

impl LoadConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: LoadConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the effective configuration: explicit file if given,
    /// otherwise discovery, otherwise defaults. `TARGET_URL` overrides the
    /// file's base URL; a command-line override beats both.
    pub fn resolve(explicit: Option<&Path>, base_url_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::parse_file(path)?,
            None => match discover_config() {
                Some(path) => Self::parse_file(path)?,
                None => Self::default(),
            },
        };

        if let Ok(url) = env::var(TARGET_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Some(url) = base_url_override {
            config.base_url = url.to_string();
        }
        if config.images_dir.as_os_str().is_empty() {
            config.images_dir = default_images_dir();
        }

        if config.base_url.is_empty() {
            anyhow::bail!(
                "no target URL configured (set {} or base_url in {})",
                TARGET_URL_ENV,
                DEFAULT_CONFIG_NAMES.join(", ")
            );
        }
        Ok(config)
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns the request timeout (defaults to 30s).
    pub fn request_timeout_ms(&self) -> u64 {
        self.request_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

/// Find a config file in the current directory.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Seeding volumes, mirroring the marketplace's production data shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedProfile {
    /// Number of users to register.
    #[serde(default = "default_users")]
    pub users: usize,
    /// Number of catalog items to create.
    #[serde(default = "default_lego_sets")]
    pub lego_sets: usize,
    /// Probability that a catalog item gets an owner.
    #[serde(default = "default_owner_probability")]
    pub owner_probability: f64,
    /// Probability that a catalog item gets a listing.
    #[serde(default = "default_listing_probability")]
    pub listing_probability: f64,
    /// Upper bound on comments per catalog item.
    #[serde(default = "default_max_comments")]
    pub max_comments_per_set: u32,
    /// Upper bound on bids per listing.
    #[serde(default = "default_max_bids")]
    pub max_bids_per_listing: u32,
    /// In-flight request cap while seeding.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_users() -> usize {
    200
}
fn default_lego_sets() -> usize {
    500
}
fn default_owner_probability() -> f64 {
    0.7
}
fn default_listing_probability() -> f64 {
    0.3
}
fn default_max_comments() -> u32 {
    5
}
fn default_max_bids() -> u32 {
    10
}
fn default_concurrency() -> usize {
    8
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            users: default_users(),
            lego_sets: default_lego_sets(),
            owner_probability: default_owner_probability(),
            listing_probability: default_listing_probability(),
            max_comments_per_set: default_max_comments(),
            max_bids_per_listing: default_max_bids(),
            concurrency: default_concurrency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = "base_url: http://localhost:8000/rest\n";
        let config: LoadConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/rest");
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.seed.users, 200);
        assert_eq!(config.seed.lego_sets, 500);
    }

    #[test]
    fn test_parse_seed_overrides() {
        let yaml = "base_url: http://localhost:8000\nseed:\n  users: 10\n  concurrency: 2\n";
        let config: LoadConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed.users, 10);
        assert_eq!(config.seed.concurrency, 2);
        // Unset fields keep their defaults.
        assert_eq!(config.seed.lego_sets, 500);
        assert!((config.seed.owner_probability - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_url_trimmed() {
        let config = LoadConfig {
            base_url: "http://localhost:8000/rest/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url_trimmed(), "http://localhost:8000/rest");
    }

    #[test]
    fn test_timeout_default() {
        let config = LoadConfig::default();
        assert_eq!(config.request_timeout_ms(), 30_000);
    }
}
