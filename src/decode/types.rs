//! Raw item schema
//!
//! Mirrors the nested `item` object of a video entry. Every field is
//! optional upstream and defaults to `""`, `0` or `false` here.

use super::lenient;
use serde::Deserialize;
use serde_json::Value;

/// `textExtra` discriminator for hashtag annotations
pub const HASHTAG_TYPE: i64 = 1;

/// A video item as returned inside a search entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Video id
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,

    /// Caption text
    #[serde(default, deserialize_with = "lenient::text")]
    pub desc: String,

    /// Creation time, epoch seconds
    #[serde(default, deserialize_with = "lenient::integer")]
    pub create_time: i64,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub video: RawVideo,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub author: RawAuthor,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub stats: RawStats,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub music: RawMusic,

    /// Mentions, hashtags and other caption annotations
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub text_extra: Vec<TextExtra>,

    /// Challenges attached to the video; only the count is used
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub challenges: Vec<Value>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub original_item: bool,

    #[serde(default, deserialize_with = "lenient::text")]
    pub text_language: String,
}

impl RawItem {
    /// Hashtag names in caption order
    pub fn hashtags(&self) -> impl Iterator<Item = &str> {
        self.text_extra
            .iter()
            .filter(|extra| extra.kind == HASHTAG_TYPE)
            .map(|extra| extra.hashtag_name.as_str())
    }
}

/// Media description
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub play_addr: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub download_addr: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub cover: String,

    /// Seconds
    #[serde(default, deserialize_with = "lenient::count")]
    pub duration: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub width: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub height: u64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub video_quality: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub format: String,
}

/// Uploader profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,

    /// Handle used in profile URLs
    #[serde(default, deserialize_with = "lenient::text")]
    pub unique_id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub nickname: String,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: bool,

    #[serde(default, deserialize_with = "lenient::count")]
    pub follower_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub following_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub video_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub heart_count: u64,
}

/// Engagement counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    /// Likes
    #[serde(default, deserialize_with = "lenient::count")]
    pub digg_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub share_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub comment_count: u64,

    /// Views
    #[serde(default, deserialize_with = "lenient::count")]
    pub play_count: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub collect_count: u64,
}

/// Soundtrack
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMusic {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub author_name: String,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub original: bool,
}

/// One caption annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextExtra {
    #[serde(rename = "type", default, deserialize_with = "lenient::integer")]
    pub kind: i64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub hashtag_name: String,
}
