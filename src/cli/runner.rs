//! CLI runner - loads settings, scrapes and exports

use crate::auth::load_session_token;
use crate::cli::commands::Cli;
use crate::config::ScraperConfig;
use crate::engine::{ScrapeResult, Scraper};
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::{default_file_name, export, ExportOutcome};
use std::path::PathBuf;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Config file (if any) with command line overrides applied
    pub fn settings(&self) -> Result<ScraperConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if let Some(path) = &self.cli.cookie_file {
            config.cookie_file.clone_from(path);
        }
        if let Some(format) = self.cli.format {
            config.format = format;
        }
        if let Some(delay_ms) = self.cli.delay_ms {
            config.delay_ms = delay_ms;
        }

        config.validate()?;
        Ok(config)
    }

    /// Export destination; `None` lets the exporter pick a name in the
    /// working directory
    pub fn output_path(&self, config: &ScraperConfig) -> Option<PathBuf> {
        self.cli.output.clone().or_else(|| {
            config
                .output_dir
                .as_ref()
                .map(|dir| dir.join(default_file_name(config.format)))
        })
    }

    /// Run the scrape and export
    pub async fn run(&self) -> Result<()> {
        let config = self.settings()?;
        let keyword = self.cli.keyword.as_str();
        let target = self.cli.target_count();

        let token = load_session_token(&config.cookie_file);
        if token.is_none() {
            warn!(
                "No session cookie in {}, searching anonymously",
                config.cookie_file.display()
            );
        }

        let client = HttpClient::with_config(config.http_config())?;
        let scraper = Scraper::new(client, config.request_builder()?)
            .with_config(config.scrape_config());

        info!("Searching for '{keyword}' (target {target})");
        let result = scraper
            .scrape_with_token(keyword, target, token.as_deref())
            .await;

        for line in summary_lines(&result) {
            println!("{line}");
        }

        match export(&result.records, self.output_path(&config).as_deref(), config.format)? {
            ExportOutcome::Written { path, rows } => {
                println!("Saved {rows} videos to {}", path.display());
            }
            ExportOutcome::NothingToExport => println!("No videos to export"),
        }

        Ok(())
    }
}

/// Human-readable scrape summary
pub fn summary_lines(result: &ScrapeResult) -> Vec<String> {
    vec![
        format!("Keyword: {}", result.keyword),
        format!("Total videos: {}", result.len()),
        format!("Total views: {}", result.total_views()),
        format!("Total likes: {}", result.total_likes()),
        format!("Pages fetched: {}", result.stats.requests()),
        format!("Stopped: {}", result.stop),
    ]
}
