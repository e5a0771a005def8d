//! CLI module
//!
//! `tiktok-scraper [KEYWORD] [TARGET] [OPTIONS]`
//!
//! Runs one scrape, prints a summary and exports the records.

mod commands;
mod runner;

pub use commands::{parse_target, Cli, DEFAULT_KEYWORD, DEFAULT_TARGET};
pub use runner::{summary_lines, Runner};
