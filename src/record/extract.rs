//! Raw item → flat record

use super::types::FlatRecord;
use crate::decode::RawItem;
use chrono::{Local, TimeZone};

const CREATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical watch URL for a video
///
/// An empty username still yields a well-formed URL (`/@/video/<id>`).
pub fn video_url(username: &str, video_id: &str) -> String {
    format!("https://www.tiktok.com/@{username}/video/{video_id}")
}

/// Epoch seconds as local time, or an empty string for 0
pub fn format_create_time(epoch_seconds: i64) -> String {
    if epoch_seconds == 0 {
        return String::new();
    }
    Local
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|t| t.format(CREATE_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

impl From<&RawItem> for FlatRecord {
    fn from(item: &RawItem) -> Self {
        let video = &item.video;
        let author = &item.author;
        let stats = &item.stats;
        let music = &item.music;

        Self {
            video_id: item.id.clone(),
            description: item.desc.clone(),
            create_time: format_create_time(item.create_time),
            video_url: video_url(&author.unique_id, &item.id),
            play_url: video.play_addr.clone(),
            download_url: video.download_addr.clone(),
            cover_image: video.cover.clone(),
            duration_seconds: video.duration,
            width: video.width,
            height: video.height,
            video_quality: video.video_quality.clone(),
            format: video.format.clone(),
            author_id: author.id.clone(),
            author_username: author.unique_id.clone(),
            author_nickname: author.nickname.clone(),
            author_verified: author.verified,
            author_followers: author.follower_count,
            author_following: author.following_count,
            author_videos: author.video_count,
            author_hearts: author.heart_count,
            likes: stats.digg_count,
            shares: stats.share_count,
            comments: stats.comment_count,
            views: stats.play_count,
            collects: stats.collect_count,
            music_id: music.id.clone(),
            music_title: music.title.clone(),
            music_author: music.author_name.clone(),
            music_original: music.original,
            hashtags: item.hashtags().collect::<Vec<_>>().join(", "),
            challenge_count: item.challenges.len() as u64,
            original_item: item.original_item,
            text_language: item.text_language.clone(),
        }
    }
}
