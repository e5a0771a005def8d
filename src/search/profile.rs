//! Fixed client fingerprint
//!
//! The search endpoint expects the same parameter set a desktop Chrome
//! session on `tiktok.com/search` sends. None of it is computed except
//! `WebIdLastTime`, which is added by the builder.

/// Default scheme and host for the search API
pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";

/// Path of the general search endpoint
pub const SEARCH_PATH: &str = "/api/search/general/full/";

/// Items requested per page; the endpoint serves 16 per scroll
pub const PAGE_SIZE: u32 = 16;

const BROWSER_VERSION: &str = "5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

/// Static query parameters sent with every page request
pub const FINGERPRINT_PARAMS: &[(&str, &str)] = &[
    ("aid", "1988"),
    ("app_language", "id-ID"),
    ("app_name", "tiktok_web"),
    ("browser_language", "id"),
    ("browser_name", "Mozilla"),
    ("browser_online", "true"),
    ("browser_platform", "MacIntel"),
    ("browser_version", BROWSER_VERSION),
    ("channel", "tiktok_web"),
    ("cookie_enabled", "true"),
    ("data_collection_enabled", "false"),
    ("device_id", "7540547403108861457"),
    ("device_platform", "web_pc"),
    ("device_type", "web_h265"),
    ("from_page", "search"),
    ("history_len", "3"),
    ("is_fullscreen", "true"),
    ("is_page_visible", "true"),
    ("odinId", "7540547149462799376"),
    ("os", "mac"),
    ("priority_region", ""),
    ("referer", ""),
    ("region", "ID"),
    ("screen_height", "1050"),
    ("screen_width", "1680"),
    ("search_source", "normal_search"),
    ("tz_name", "Asia/Jakarta"),
    ("user_is_login", "false"),
    ("webcast_language", "id-ID"),
];

/// Static request headers
///
/// `accept-encoding` is left to reqwest so it only advertises codecs it
/// can actually decode.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    (
        "accept-language",
        "id,en-US;q=0.9,en;q=0.8,zh-TW;q=0.7,zh;q=0.6",
    ),
    ("dnt", "1"),
    ("priority", "u=1, i"),
    ("referer", "https://www.tiktok.com/search"),
    (
        "sec-ch-ua",
        "\"Chromium\";v=\"142\", \"Google Chrome\";v=\"142\", \"Not_A Brand\";v=\"99\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36",
    ),
];
