// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Video Search Scraper
//!
//! Pages through the public video search endpoint for a keyword and
//! flattens every video into a fixed-schema record ready for export.
//!
//! ## Features
//!
//! - **Offset Pagination**: 16 items per page, stops at the target or the first failure
//! - **Partial Results**: a failed page ends the scrape but keeps what was collected
//! - **Lenient Decoding**: missing or mistyped fields fall back to empty values
//! - **Session Cookie**: optional cookie loaded from a notes file
//! - **Export**: CSV (with BOM), Parquet or JSON Lines via Arrow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiktok_scraper::{auth, output, Scraper};
//!
//! #[tokio::main]
//! async fn main() -> tiktok_scraper::Result<()> {
//!     let scraper = Scraper::with_http()?;
//!     let token = auth::load_session_token(auth::DEFAULT_COOKIE_FILE);
//!
//!     let result = scraper.scrape_with_token("Best Peptides", 50, token.as_deref()).await;
//!     println!("{} videos ({})", result.len(), result.stop);
//!
//!     output::export(&result.records, None, output::ExportFormat::Csv)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  Scraper::scrape(keyword, target)             │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬───────────┐
//! │  Search  │   HTTP    │    Decode     │  Record   │  Output   │
//! ├──────────┼───────────┼───────────────┼───────────┼───────────┤
//! │ URL      │ GET       │ Envelope      │ Flatten   │ CSV       │
//! │ Headers  │ Timeout   │ Entry types   │ Defaults  │ Parquet   │
//! │ Cookie   │ Delay     │ Lenient nums  │ Columns   │ JSONL     │
//! └──────────┴───────────┴───────────────┴───────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variant fields

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the scraper
pub mod error;

/// Request URL and header construction
pub mod search;

/// Session cookie loading
pub mod auth;

/// HTTP transport and page pacing
pub mod http;

/// Offset pagination and stop conditions
pub mod pagination;

/// Response envelope and raw item decoding
pub mod decode;

/// Flat record schema and extraction
pub mod record;

/// CSV/Parquet/JSONL export
pub mod output;

/// Pagination engine
pub mod engine;

/// Scraper configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use config::ScraperConfig;
pub use engine::{PageFetcher, ScrapeResult, Scraper, StopReason};
pub use record::FlatRecord;
pub use search::SessionHeaders;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
