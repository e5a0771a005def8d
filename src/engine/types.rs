//! Engine types
//!
//! The page-fetch seam, scrape configuration and results.

use crate::error::Result;
use crate::http::PageDelay;
use crate::pagination::StopReason;
use crate::record::FlatRecord;
use crate::search::{SearchRequest, PAGE_SIZE};
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can turn a page request into a response body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page; any error ends the scrape
    async fn fetch_page(&self, request: &SearchRequest<'_>) -> Result<String>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch_page(&self, request: &SearchRequest<'_>) -> Result<String> {
        (**self).fetch_page(request).await
    }
}

/// Configuration for a scrape
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Items requested per page
    pub page_size: u32,
    /// Pause between pages
    pub delay: PageDelay,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            delay: PageDelay::default(),
        }
    }
}

impl ScrapeConfig {
    /// Create a new scrape config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the inter-page delay
    #[must_use]
    pub fn with_delay(mut self, delay: PageDelay) -> Self {
        self.delay = delay;
        self
    }
}

/// Statistics from a scrape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    /// Offsets requested, in order
    pub offsets: Vec<u32>,
    /// Pages that decoded into a successful, non-empty envelope
    pub pages_processed: usize,
    /// Non-video entries passed over
    pub skipped_entries: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ScrapeStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outgoing request
    pub fn add_request(&mut self, offset: u32) {
        self.offsets.push(offset);
    }

    /// Record a processed page
    pub fn add_page(&mut self) {
        self.pages_processed += 1;
    }

    /// Record a skipped entry
    pub fn add_skipped(&mut self) {
        self.skipped_entries += 1;
    }

    /// Requests issued
    pub fn requests(&self) -> usize {
        self.offsets.len()
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Records collected by one scrape, in the order they were returned
///
/// May hold fewer records than requested; [`ScrapeResult::stop`] says why.
/// Duplicate video ids across pages are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    /// Keyword that was searched
    pub keyword: String,
    /// Flat records
    pub records: Vec<FlatRecord>,
    /// Why the scrape ended
    pub stop: StopReason,
    /// Run statistics
    pub stats: ScrapeStats,
}

impl ScrapeResult {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, FlatRecord> {
        self.records.iter()
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<FlatRecord> {
        self.records
    }

    /// Sum of view counts
    pub fn total_views(&self) -> u64 {
        self.records.iter().map(|r| r.views).sum()
    }

    /// Sum of like counts
    pub fn total_likes(&self) -> u64 {
        self.records.iter().map(|r| r.likes).sum()
    }
}

impl<'a> IntoIterator for &'a ScrapeResult {
    type Item = &'a FlatRecord;
    type IntoIter = std::slice::Iter<'a, FlatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
