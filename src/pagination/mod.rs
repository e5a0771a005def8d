//! Pagination module
//!
//! Offset/count paging over the search endpoint.
//!
//! # Overview
//!
//! Pages are requested with a fixed size. The offset starts at 0 and moves
//! forward by one page size after every fully processed page. A scrape
//! ends on the first of:
//! - the requested number of records has been collected
//! - the upstream reports a non-zero `status_code`
//! - a page arrives with no entries
//! - the page could not be fetched or parsed

mod types;

pub use types::{check_stop_condition, NextPage, OffsetPaginator, PaginationState, StopReason};
