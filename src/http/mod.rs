//! HTTP transport
//!
//! Sends search page requests and paces consecutive pages.
//!
//! # Features
//!
//! - **Single attempt**: every failure surfaces immediately; the caller
//!   decides what a failed page means
//! - **Bounded fetch**: each request carries a timeout (30s by default)
//! - **Fixed pacing**: [`PageDelay`] sleeps a constant interval between pages

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::PageDelay;
