//! Pagination types
//!
//! State, stop reasons and the offset paginator used by the engine.

use crate::decode::ResponseEnvelope;
use crate::error::Error;
use std::fmt;

/// Why a scrape stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Collected the requested number of records
    TargetReached,
    /// A page came back with no entries
    Exhausted,
    /// The envelope carried a non-zero (or missing) `status_code`
    UpstreamStatus {
        /// The status code, if one was present
        code: Option<i64>,
        /// Upstream `status_msg`
        message: String,
    },
    /// The body was not a usable search response
    InvalidEnvelope {
        /// Parse failure description
        message: String,
    },
    /// The request failed on the wire or with a non-2xx status
    Transport {
        /// Error description
        message: String,
    },
}

impl StopReason {
    /// Classify a fetch or decode error
    pub fn from_error(error: &Error) -> Self {
        if error.is_envelope() {
            Self::InvalidEnvelope {
                message: error.to_string(),
            }
        } else {
            Self::Transport {
                message: error.to_string(),
            }
        }
    }

    /// Whether the scrape ended because something went wrong
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus { .. } | Self::InvalidEnvelope { .. } | Self::Transport { .. }
        )
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetReached => write!(f, "target reached"),
            Self::Exhausted => write!(f, "no more results"),
            Self::UpstreamStatus {
                code: Some(code),
                message,
            } if !message.is_empty() => write!(f, "upstream status_code {code} ({message})"),
            Self::UpstreamStatus {
                code: Some(code), ..
            } => write!(f, "upstream status_code {code}"),
            Self::UpstreamStatus { code: None, .. } => write!(f, "response without status_code"),
            Self::InvalidEnvelope { message } => write!(f, "invalid response: {message}"),
            Self::Transport { message } => write!(f, "transport error: {message}"),
        }
    }
}

/// Decide whether a decoded page ends the scrape
///
/// Returns `None` when the page should be processed.
pub fn check_stop_condition(envelope: &ResponseEnvelope) -> Option<StopReason> {
    if !envelope.is_success() {
        return Some(StopReason::UpstreamStatus {
            code: envelope.status_code,
            message: envelope.status_msg.clone(),
        });
    }
    if envelope.is_empty() {
        return Some(StopReason::Exhausted);
    }
    None
}

/// Result of advancing to the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch the page at this offset
    Continue {
        /// Offset of the next page
        offset: u32,
    },
    /// The offset space is used up
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination progress during one scrape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based index of the current page
    pub page: u32,
    /// Offset of the current page
    pub offset: u32,
    /// Records accepted so far
    pub accepted: usize,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Count accepted records
    pub fn add_accepted(&mut self, count: usize) {
        self.accepted += count;
    }
}

/// Fixed page size offset pagination with a record target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPaginator {
    page_size: u32,
    target: usize,
}

impl OffsetPaginator {
    /// Create a paginator; a zero page size is bumped to 1
    pub fn new(page_size: u32, target: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            target,
        }
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Records wanted in total
    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether enough records have been collected
    pub fn is_satisfied(&self, state: &PaginationState) -> bool {
        state.accepted >= self.target
    }

    /// Records still missing
    pub fn remaining(&self, state: &PaginationState) -> usize {
        self.target.saturating_sub(state.accepted)
    }

    /// Move to the next page
    pub fn advance(&self, state: &mut PaginationState) -> NextPage {
        match state.offset.checked_add(self.page_size) {
            Some(offset) => {
                state.offset = offset;
                state.page += 1;
                NextPage::Continue { offset }
            }
            None => NextPage::Done,
        }
    }
}
