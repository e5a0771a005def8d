//! Flat output records
//!
//! One [`FlatRecord`] per accepted video: every value resolved, nothing
//! nested, nothing null. [`COLUMNS`] fixes header names, order and
//! column kind for every tabular sink.

mod extract;
mod types;

pub use extract::{format_create_time, video_url};
pub use types::{ColumnKind, FlatRecord, COLUMNS};

#[cfg(test)]
mod tests;
