//! Search response envelope

use super::lenient;
use super::types::RawItem;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Entry `type` of a playable video
pub const VIDEO_ENTRY_TYPE: i64 = 1;

/// Top-level search response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// 0 on success; absent or non-integer is kept as `None` and treated
    /// as a failure
    #[serde(default, deserialize_with = "lenient::status_code")]
    pub status_code: Option<i64>,

    /// Upstream diagnostic text, usually empty
    #[serde(default, deserialize_with = "lenient::text")]
    pub status_msg: String,

    /// Result entries in ranking order
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub data: Vec<SearchEntry>,
}

impl ResponseEnvelope {
    /// Whether the upstream reported success
    pub fn is_success(&self) -> bool {
        self.status_code == Some(0)
    }

    /// Whether the page carries no entries at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Video items of this page, in order
    pub fn videos(&self) -> impl Iterator<Item = &RawItem> {
        self.data.iter().filter_map(SearchEntry::as_video)
    }
}

/// One entry of the `data` list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum SearchEntry {
    /// A playable video
    Video(Box<RawItem>),
    /// Anything else (ads, user cards, live rooms), including video
    /// entries that arrive without an `item` body
    Other {
        /// The entry's `type` discriminator
        kind: i64,
    },
}

impl SearchEntry {
    /// The item, if this is a video
    pub fn as_video(&self) -> Option<&RawItem> {
        match self {
            Self::Video(item) => Some(&**item),
            Self::Other { .. } => None,
        }
    }

    /// Whether this entry is a video
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(rename = "type", default, deserialize_with = "lenient::integer")]
    kind: i64,
    #[serde(default)]
    item: Option<RawItem>,
}

impl From<RawEntry> for SearchEntry {
    fn from(entry: RawEntry) -> Self {
        match (entry.kind, entry.item) {
            (VIDEO_ENTRY_TYPE, Some(item)) => Self::Video(Box::new(item)),
            (kind, _) => Self::Other { kind },
        }
    }
}

/// Parse a response body into an envelope
///
/// Fails only when the body is not JSON or a nested object has an
/// unusable shape; missing and `null` fields are defaulted.
pub fn decode_envelope(body: &str) -> Result<ResponseEnvelope> {
    serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("Failed to parse search response: {e}")))
}
