//! Execution engine module
//!
//! The pagination loop that turns a keyword into flat records.
//!
//! # Overview
//!
//! Each iteration builds a request for the current offset, fetches it
//! through a [`PageFetcher`], decodes the envelope, and appends every
//! video entry as a [`FlatRecord`]. Failures never escape: the loop stops
//! and the records gathered so far are returned with a [`StopReason`].
//!
//! ```text
//! Fetching(offset) → Validating ─┬→ Extracting ─┬→ Fetching(offset + page)
//!                                │              └→ Done (target reached)
//!                                └→ Done (transport, status, bad body, empty page)
//! ```

mod types;

pub use crate::pagination::StopReason;
pub use types::{PageFetcher, ScrapeConfig, ScrapeResult, ScrapeStats};

use crate::decode::{decode_envelope, SearchEntry};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{check_stop_condition, NextPage, OffsetPaginator, PaginationState};
use crate::record::FlatRecord;
use crate::search::{RequestBuilder, SessionHeaders};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Paginating search scraper
pub struct Scraper<F = HttpClient> {
    /// Page transport
    fetcher: F,
    /// Request builder
    builder: RequestBuilder,
    /// Scrape configuration
    config: ScrapeConfig,
}

impl Scraper<HttpClient> {
    /// Scraper against the public endpoint with a default HTTP client
    pub fn with_http() -> Result<Self> {
        Ok(Self::new(HttpClient::new()?, RequestBuilder::default()))
    }
}

impl<F: PageFetcher> Scraper<F> {
    /// Create a new scraper
    pub fn new(fetcher: F, builder: RequestBuilder) -> Self {
        Self {
            fetcher,
            builder,
            config: ScrapeConfig::default(),
        }
    }

    /// Set scrape configuration
    #[must_use]
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the scrape configuration
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Get the page transport
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scrape with an optional session token
    pub async fn scrape_with_token(
        &self,
        keyword: &str,
        target: usize,
        token: Option<&str>,
    ) -> ScrapeResult {
        let headers = SessionHeaders::from_token(token);
        self.scrape(keyword, target, &headers).await
    }

    /// Collect up to `target` records for `keyword`
    ///
    /// Pages are fetched one at a time. The scrape stops when the target
    /// is met, a page is empty, the upstream reports a non-zero status, or
    /// a page cannot be fetched or parsed. A target of 0 issues no request.
    pub async fn scrape(
        &self,
        keyword: &str,
        target: usize,
        headers: &SessionHeaders,
    ) -> ScrapeResult {
        let start = Instant::now();
        let paginator = OffsetPaginator::new(self.config.page_size, target);
        let mut state = PaginationState::new();
        let mut stats = ScrapeStats::new();
        let mut records = Vec::new();

        info!(
            keyword,
            target,
            authenticated = headers.is_authenticated(),
            "Starting scrape"
        );

        let stop = loop {
            if paginator.is_satisfied(&state) {
                break StopReason::TargetReached;
            }

            debug!("Fetching offset {}", state.offset);
            let request = self
                .builder
                .build(keyword, state.offset, paginator.page_size(), headers);
            stats.add_request(state.offset);

            let body = match self.fetcher.fetch_page(&request).await {
                Ok(body) => body,
                Err(e) => break StopReason::from_error(&e),
            };

            let envelope = match decode_envelope(&body) {
                Ok(envelope) => envelope,
                Err(e) => break StopReason::from_error(&e),
            };

            if let Some(reason) = check_stop_condition(&envelope) {
                break reason;
            }
            stats.add_page();

            let before = records.len();
            for entry in &envelope.data {
                match entry {
                    SearchEntry::Video(item) => {
                        records.push(FlatRecord::from(&**item));
                        state.add_accepted(1);
                        if paginator.is_satisfied(&state) {
                            break;
                        }
                    }
                    SearchEntry::Other { kind } => {
                        debug!("Skipping entry of type {kind}");
                        stats.add_skipped();
                    }
                }
            }
            debug!(
                "Page {}: {} records, {} still wanted",
                state.page,
                records.len() - before,
                paginator.remaining(&state)
            );

            if paginator.is_satisfied(&state) {
                break StopReason::TargetReached;
            }

            match paginator.advance(&mut state) {
                NextPage::Continue { .. } => self.config.delay.wait().await,
                NextPage::Done => break StopReason::Exhausted,
            }
        };

        stats.set_duration(start.elapsed().as_millis() as u64);

        if stop.is_error() {
            warn!(
                keyword,
                offset = state.offset,
                collected = records.len(),
                "Scrape stopped early: {stop}"
            );
        } else {
            info!(keyword, collected = records.len(), "Scrape finished: {stop}");
        }

        ScrapeResult {
            keyword: keyword.to_string(),
            records,
            stop,
            stats,
        }
    }
}

impl<F> std::fmt::Debug for Scraper<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("builder", &self.builder)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
