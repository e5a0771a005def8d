//! Flat record type and column layout

use serde::{Deserialize, Serialize};

/// Kind of value stored in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// UTF-8 text, empty when absent
    Text,
    /// Unsigned integer, 0 when absent
    Integer,
    /// Boolean, false when absent
    Boolean,
}

/// Header names and kinds, in output order
pub const COLUMNS: &[(&str, ColumnKind)] = &[
    ("Video ID", ColumnKind::Text),
    ("Description", ColumnKind::Text),
    ("Create Time", ColumnKind::Text),
    ("Video URL", ColumnKind::Text),
    ("Play URL", ColumnKind::Text),
    ("Download URL", ColumnKind::Text),
    ("Cover Image", ColumnKind::Text),
    ("Duration (seconds)", ColumnKind::Integer),
    ("Width", ColumnKind::Integer),
    ("Height", ColumnKind::Integer),
    ("Video Quality", ColumnKind::Text),
    ("Format", ColumnKind::Text),
    ("Author ID", ColumnKind::Text),
    ("Author Username", ColumnKind::Text),
    ("Author Nickname", ColumnKind::Text),
    ("Author Verified", ColumnKind::Boolean),
    ("Author Followers", ColumnKind::Integer),
    ("Author Following", ColumnKind::Integer),
    ("Author Videos", ColumnKind::Integer),
    ("Author Hearts", ColumnKind::Integer),
    ("Likes", ColumnKind::Integer),
    ("Shares", ColumnKind::Integer),
    ("Comments", ColumnKind::Integer),
    ("Views", ColumnKind::Integer),
    ("Collects", ColumnKind::Integer),
    ("Music ID", ColumnKind::Text),
    ("Music Title", ColumnKind::Text),
    ("Music Author", ColumnKind::Text),
    ("Music Original", ColumnKind::Boolean),
    ("Hashtags", ColumnKind::Text),
    ("Challenge Count", ColumnKind::Integer),
    ("Original Item", ColumnKind::Boolean),
    ("Text Language", ColumnKind::Text),
];

/// One normalized search result
///
/// Serialized field names are the column headers of [`COLUMNS`], so the
/// same type round-trips through JSON Lines, CSV and Parquet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatRecord {
    #[serde(rename = "Video ID")]
    pub video_id: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Local `YYYY-MM-DD HH:MM:SS`, empty when unknown
    #[serde(rename = "Create Time")]
    pub create_time: String,
    #[serde(rename = "Video URL")]
    pub video_url: String,
    #[serde(rename = "Play URL")]
    pub play_url: String,
    #[serde(rename = "Download URL")]
    pub download_url: String,
    #[serde(rename = "Cover Image")]
    pub cover_image: String,
    #[serde(rename = "Duration (seconds)")]
    pub duration_seconds: u64,
    #[serde(rename = "Width")]
    pub width: u64,
    #[serde(rename = "Height")]
    pub height: u64,
    #[serde(rename = "Video Quality")]
    pub video_quality: String,
    #[serde(rename = "Format")]
    pub format: String,
    #[serde(rename = "Author ID")]
    pub author_id: String,
    #[serde(rename = "Author Username")]
    pub author_username: String,
    #[serde(rename = "Author Nickname")]
    pub author_nickname: String,
    #[serde(rename = "Author Verified")]
    pub author_verified: bool,
    #[serde(rename = "Author Followers")]
    pub author_followers: u64,
    #[serde(rename = "Author Following")]
    pub author_following: u64,
    #[serde(rename = "Author Videos")]
    pub author_videos: u64,
    #[serde(rename = "Author Hearts")]
    pub author_hearts: u64,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Shares")]
    pub shares: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Collects")]
    pub collects: u64,
    #[serde(rename = "Music ID")]
    pub music_id: String,
    #[serde(rename = "Music Title")]
    pub music_title: String,
    #[serde(rename = "Music Author")]
    pub music_author: String,
    #[serde(rename = "Music Original")]
    pub music_original: bool,
    /// Comma-joined hashtag names
    #[serde(rename = "Hashtags")]
    pub hashtags: String,
    #[serde(rename = "Challenge Count")]
    pub challenge_count: u64,
    #[serde(rename = "Original Item")]
    pub original_item: bool,
    #[serde(rename = "Text Language")]
    pub text_language: String,
}
