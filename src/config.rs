//! Scraper configuration
//!
//! Optional YAML file supplying defaults for a scrape. Every field has a
//! default, so an empty file (or no file) is a valid configuration. Command
//! line flags override whatever is loaded here.
//!
//! ```yaml
//! delay_ms: 2500
//! cookie_file: ~/notes/session.md
//! output_dir: exports
//! format: parquet
//! ```

use crate::auth::DEFAULT_COOKIE_FILE;
use crate::engine::ScrapeConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, PageDelay};
use crate::output::ExportFormat;
use crate::search::{RequestBuilder, DEFAULT_BASE_URL, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// ScraperConfig
// ============================================================================

/// Scrape settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScraperConfig {
    /// Scheme and host of the search API
    pub base_url: String,

    /// Items requested per page
    pub page_size: u32,

    /// Pause between consecutive pages, in milliseconds
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Side file holding the session cookie
    pub cookie_file: PathBuf,

    /// Directory for timestamped export files
    pub output_dir: Option<PathBuf>,

    /// Export file format
    pub format: ExportFormat,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            delay_ms: 1000,
            timeout_secs: 30,
            cookie_file: PathBuf::from(DEFAULT_COOKIE_FILE),
            output_dir: None,
            format: ExportFormat::default(),
        }
    }
}

impl ScraperConfig {
    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!("Failed to read {}: {e}", path.display()))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        Ok(())
    }

    /// Delay between pages
    pub fn delay(&self) -> PageDelay {
        PageDelay::from_millis(self.delay_ms)
    }

    /// Engine settings
    pub fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig::new()
            .with_page_size(self.page_size)
            .with_delay(self.delay())
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }

    /// Request builder against `base_url`
    pub fn request_builder(&self) -> Result<RequestBuilder> {
        RequestBuilder::new(&self.base_url)
    }
}
