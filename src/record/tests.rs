//! Tests for flat record extraction

use super::*;
use crate::decode::RawItem;
use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use serde_json::json;

fn item(value: serde_json::Value) -> RawItem {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_columns_match_serialized_fields() {
    let value = serde_json::to_value(FlatRecord::default()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), COLUMNS.len());
    for (name, kind) in COLUMNS {
        let field = object.get(*name).unwrap_or_else(|| panic!("missing {name}"));
        match kind {
            ColumnKind::Text => assert!(field.is_string(), "{name}"),
            ColumnKind::Integer => assert!(field.is_u64(), "{name}"),
            ColumnKind::Boolean => assert!(field.is_boolean(), "{name}"),
        }
    }
}

#[test]
fn test_serialized_field_order_matches_columns() {
    let text = serde_json::to_string(&FlatRecord::default()).unwrap();
    let mut last = 0;
    for (name, _) in COLUMNS {
        let pos = text.find(&format!("\"{name}\"")).unwrap();
        assert!(pos >= last, "{name} out of order");
        last = pos;
    }
}

#[test]
fn test_empty_item_maps_to_defaults() {
    let record = FlatRecord::from(&item(json!({})));

    assert_eq!(record.video_id, "");
    assert_eq!(record.create_time, "");
    assert_eq!(record.hashtags, "");
    assert_eq!(record.views, 0);
    assert_eq!(record.challenge_count, 0);
    assert!(!record.author_verified);
    assert!(!record.music_original);
    assert!(!record.original_item);
    assert_eq!(record.video_url, "https://www.tiktok.com/@/video/");

    let expected = FlatRecord {
        video_url: "https://www.tiktok.com/@/video/".to_string(),
        ..FlatRecord::default()
    };
    assert_eq!(record, expected);
}

#[test]
fn test_full_item_mapping() {
    let record = FlatRecord::from(&item(json!({
        "id": "7301",
        "desc": "stack notes",
        "createTime": 1_700_000_000,
        "video": {
            "playAddr": "p", "downloadAddr": "d", "cover": "c",
            "duration": 15, "width": 576, "height": 1024,
            "videoQuality": "normal", "format": "mp4"
        },
        "author": {
            "id": "a1", "uniqueId": "labrat", "nickname": "Lab Rat", "verified": true,
            "followerCount": 10, "followingCount": 20, "videoCount": 30, "heartCount": 40
        },
        "stats": {
            "diggCount": 1, "shareCount": 2, "commentCount": 3,
            "playCount": 4, "collectCount": 5
        },
        "music": {"id": "m1", "title": "sound", "authorName": "dj", "original": true},
        "textExtra": [
            {"type": 1, "hashtagName": "peptides"},
            {"type": 2, "hashtagName": "ignored"},
            {"type": 1, "hashtagName": "health"}
        ],
        "challenges": [{}, {}, {}],
        "originalItem": true,
        "textLanguage": "en"
    })));

    let expected_time = Local
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .unwrap()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    assert_eq!(
        record,
        FlatRecord {
            video_id: "7301".to_string(),
            description: "stack notes".to_string(),
            create_time: expected_time,
            video_url: "https://www.tiktok.com/@labrat/video/7301".to_string(),
            play_url: "p".to_string(),
            download_url: "d".to_string(),
            cover_image: "c".to_string(),
            duration_seconds: 15,
            width: 576,
            height: 1024,
            video_quality: "normal".to_string(),
            format: "mp4".to_string(),
            author_id: "a1".to_string(),
            author_username: "labrat".to_string(),
            author_nickname: "Lab Rat".to_string(),
            author_verified: true,
            author_followers: 10,
            author_following: 20,
            author_videos: 30,
            author_hearts: 40,
            likes: 1,
            shares: 2,
            comments: 3,
            views: 4,
            collects: 5,
            music_id: "m1".to_string(),
            music_title: "sound".to_string(),
            music_author: "dj".to_string(),
            music_original: true,
            hashtags: "peptides, health".to_string(),
            challenge_count: 3,
            original_item: true,
            text_language: "en".to_string(),
        }
    );
}

#[test]
fn test_missing_username_still_builds_url() {
    let record = FlatRecord::from(&item(json!({"id": "99"})));
    assert_eq!(record.video_url, "https://www.tiktok.com/@/video/99");
}

#[test]
fn test_format_create_time() {
    assert_eq!(format_create_time(0), "");

    let formatted = format_create_time(1_600_000_000);
    assert_eq!(formatted.len(), 19);
    assert_eq!(&formatted[4..5], "-");
    assert_eq!(&formatted[10..11], " ");
    assert_eq!(&formatted[13..14], ":");
}

#[test]
fn test_video_url() {
    assert_eq!(
        video_url("someone", "123"),
        "https://www.tiktok.com/@someone/video/123"
    );
}
