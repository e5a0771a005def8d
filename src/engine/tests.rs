//! Tests for engine module

use super::*;
use crate::error::Error;
use crate::http::PageDelay;
use crate::search::SearchRequest;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// ============================================================================
// Helpers
// ============================================================================

/// Replays canned responses and records what was asked for
#[derive(Default)]
struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<String>>>,
    seen: Mutex<Vec<(u32, String, bool)>>,
    fetched_at: Mutex<Vec<Instant>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            seen: Mutex::default(),
            fetched_at: Mutex::default(),
        })
    }

    fn offsets(&self) -> Vec<u32> {
        self.seen.lock().unwrap().iter().map(|(o, _, _)| *o).collect()
    }

    fn focus_states(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(_, f, _)| f.clone())
            .collect()
    }

    fn cookies_sent(&self) -> Vec<bool> {
        self.seen.lock().unwrap().iter().map(|(_, _, c)| *c).collect()
    }

    fn gaps(&self) -> Vec<Duration> {
        self.fetched_at
            .lock()
            .unwrap()
            .windows(2)
            .map(|w| w[1].duration_since(w[0]))
            .collect()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, request: &SearchRequest<'_>) -> Result<String> {
        self.fetched_at.lock().unwrap().push(Instant::now());
        self.seen.lock().unwrap().push((
            request.offset,
            request.query_value("focus_state").unwrap_or_default(),
            request.headers.is_authenticated(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(page(&[]).to_string()))
    }
}

fn video(id: &str) -> Value {
    json!({"type": 1, "item": {"id": id, "author": {"uniqueId": "u"}, "stats": {"playCount": 10, "diggCount": 2}}})
}

fn page(entries: &[Value]) -> Value {
    json!({"status_code": 0, "data": entries})
}

fn videos(prefix: &str, n: usize) -> Vec<Value> {
    (0..n).map(|i| video(&format!("{prefix}{i}"))).collect()
}

fn ok(value: &Value) -> Result<String> {
    Ok(value.to_string())
}

fn scraper(fetcher: &Arc<ScriptedFetcher>) -> Scraper<Arc<ScriptedFetcher>> {
    Scraper::new(Arc::clone(fetcher), RequestBuilder::default())
        .with_config(ScrapeConfig::new().with_delay(PageDelay::none()))
}

fn ids(result: &ScrapeResult) -> Vec<String> {
    result.iter().map(|r| r.video_id.clone()).collect()
}

// ============================================================================
// ScrapeConfig / ScrapeStats Tests
// ============================================================================

#[test]
fn test_scrape_config_default() {
    let config = ScrapeConfig::default();
    assert_eq!(config.page_size, 16);
    assert_eq!(config.delay, PageDelay::default());
}

#[test]
fn test_scrape_config_builder() {
    let config = ScrapeConfig::new()
        .with_page_size(8)
        .with_delay(PageDelay::from_millis(5));
    assert_eq!(config.page_size, 8);
    assert_eq!(config.delay, PageDelay::from_millis(5));
}

#[test]
fn test_scrape_stats_mutations() {
    let mut stats = ScrapeStats::new();
    stats.add_request(0);
    stats.add_request(16);
    stats.add_page();
    stats.add_skipped();
    stats.set_duration(1500);

    assert_eq!(stats.requests(), 2);
    assert_eq!(stats.offsets, vec![0, 16]);
    assert_eq!(stats.pages_processed, 1);
    assert_eq!(stats.skipped_entries, 1);
    assert_eq!(stats.duration_ms, 1500);
}

// ============================================================================
// Scrape Tests
// ============================================================================

#[tokio::test]
async fn test_zero_target_issues_no_request() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&videos("a", 16)))]);
    let result = scraper(&fetcher).scrape_with_token("test", 0, None).await;

    assert!(result.is_empty());
    assert_eq!(result.stop, StopReason::TargetReached);
    assert!(fetcher.offsets().is_empty());
}

#[tokio::test]
async fn test_two_pages_reach_target_of_twenty() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 4))),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 20, None).await;

    assert_eq!(result.len(), 20);
    assert_eq!(fetcher.offsets(), vec![0, 16]);
    assert_eq!(result.stats.offsets, vec![0, 16]);
    assert_eq!(result.stop, StopReason::TargetReached);

    let mut expected: Vec<String> = (0..16).map(|i| format!("a{i}")).collect();
    expected.extend((0..4).map(|i| format!("b{i}")));
    assert_eq!(ids(&result), expected);
}

#[tokio::test]
async fn test_target_reached_mid_page_stops_scanning() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&videos("a", 16)))]);
    let result = scraper(&fetcher).scrape_with_token("test", 5, None).await;

    assert_eq!(ids(&result), vec!["a0", "a1", "a2", "a3", "a4"]);
    assert_eq!(fetcher.offsets(), vec![0]);
}

#[tokio::test]
async fn test_offsets_and_focus_state_per_page() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 16))),
        ok(&page(&videos("c", 16))),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 100, None).await;

    assert_eq!(result.len(), 48);
    assert_eq!(fetcher.offsets(), vec![0, 16, 32, 48]);
    assert_eq!(fetcher.focus_states(), vec!["false", "true", "true", "true"]);
    assert_eq!(result.stop, StopReason::Exhausted);
}

#[tokio::test]
async fn test_exact_page_multiple_does_not_fetch_extra_page() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 16))),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 32, None).await;

    assert_eq!(result.len(), 32);
    assert_eq!(fetcher.offsets(), vec![0, 16]);
}

#[tokio::test]
async fn test_non_video_entries_are_skipped() {
    let mut first = videos("a", 3);
    first.insert(1, json!({"type": 4, "user_list": []}));
    first.push(json!({"type": 1}));
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&first)),
        ok(&page(&[json!({"type": 6})])),
        ok(&page(&videos("b", 2))),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 10, None).await;

    assert_eq!(ids(&result), vec!["a0", "a1", "a2", "b0", "b1"]);
    assert_eq!(fetcher.offsets(), vec![0, 16, 32, 48]);
    assert_eq!(result.stats.skipped_entries, 3);
    assert_eq!(result.stats.pages_processed, 3);
}

#[tokio::test]
async fn test_nonzero_status_on_later_page_keeps_earlier_records() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 16))),
        ok(&json!({"status_code": 10201, "status_msg": "too many"})),
        ok(&page(&videos("c", 16))),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 100, None).await;

    assert_eq!(result.len(), 32);
    assert_eq!(fetcher.offsets(), vec![0, 16, 32]);
    assert_eq!(
        result.stop,
        StopReason::UpstreamStatus {
            code: Some(10201),
            message: "too many".to_string()
        }
    );
}

#[tokio::test]
async fn test_nonzero_status_on_first_page() {
    let fetcher = ScriptedFetcher::new(vec![ok(&json!({"status_code": 1, "data": []}))]);
    let result = scraper(&fetcher).scrape_with_token("test", 50, None).await;

    assert!(result.is_empty());
    assert_eq!(fetcher.offsets(), vec![0]);
    assert!(result.stop.is_error());
}

#[tokio::test]
async fn test_transport_error_returns_partial() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        Err(Error::http_status(502, "bad gateway")),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 50, None).await;

    assert_eq!(result.len(), 16);
    assert_eq!(fetcher.offsets(), vec![0, 16]);
    assert!(matches!(result.stop, StopReason::Transport { .. }));
}

#[tokio::test]
async fn test_invalid_body_returns_partial() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 2))),
        Ok("<html>verify you are human</html>".to_string()),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 50, None).await;

    assert_eq!(result.len(), 2);
    assert!(matches!(result.stop, StopReason::InvalidEnvelope { .. }));
}

#[tokio::test]
async fn test_empty_first_page() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&[]))]);
    let result = scraper(&fetcher).scrape_with_token("test", 50, None).await;

    assert!(result.is_empty());
    assert_eq!(result.stop, StopReason::Exhausted);
    assert_eq!(fetcher.offsets(), vec![0]);
}

#[tokio::test]
async fn test_duplicates_across_pages_are_kept() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&[video("dup"), video("x")])),
        ok(&page(&[video("dup")])),
    ]);
    let result = scraper(&fetcher).scrape_with_token("test", 3, None).await;

    assert_eq!(ids(&result), vec!["dup", "x", "dup"]);
}

#[tokio::test]
async fn test_token_is_sent_on_every_page() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 16))),
    ]);
    scraper(&fetcher)
        .scrape_with_token("test", 40, Some("sid=1"))
        .await;

    assert_eq!(fetcher.cookies_sent(), vec![true, true, true]);
}

#[tokio::test]
async fn test_custom_page_size_moves_offset() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 4))),
        ok(&page(&videos("b", 4))),
    ]);
    let result = Scraper::new(Arc::clone(&fetcher), RequestBuilder::default())
        .with_config(
            ScrapeConfig::new()
                .with_page_size(4)
                .with_delay(PageDelay::none()),
        )
        .scrape_with_token("test", 6, None)
        .await;

    assert_eq!(result.len(), 6);
    assert_eq!(fetcher.offsets(), vec![0, 4]);
}

#[tokio::test]
async fn test_totals() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&videos("a", 3)))]);
    let result = scraper(&fetcher).scrape_with_token("test", 3, None).await;

    assert_eq!(result.total_views(), 30);
    assert_eq!(result.total_likes(), 6);
    assert_eq!(result.keyword, "test");
}

#[tokio::test]
async fn test_string_status_code_stops() {
    let fetcher = ScriptedFetcher::new(vec![ok(&json!({"status_code": "0", "data": videos("a", 3)}))]);
    let result = scraper(&fetcher).scrape_with_token("test", 10, None).await;

    assert!(result.is_empty());
    assert_eq!(fetcher.offsets(), vec![0]);
    assert!(matches!(
        result.stop,
        StopReason::UpstreamStatus { code: None, .. }
    ));
}

// ============================================================================
// Delay Tests
// ============================================================================

const DELAY: Duration = Duration::from_millis(200);

fn paced_scraper(fetcher: &Arc<ScriptedFetcher>) -> Scraper<Arc<ScriptedFetcher>> {
    Scraper::new(Arc::clone(fetcher), RequestBuilder::default())
        .with_config(ScrapeConfig::new().with_delay(PageDelay::new(DELAY)))
}

#[tokio::test]
async fn test_delay_between_pages_and_none_after_target() {
    let fetcher = ScriptedFetcher::new(vec![
        ok(&page(&videos("a", 16))),
        ok(&page(&videos("b", 16))),
    ]);

    let start = Instant::now();
    let result = paced_scraper(&fetcher).scrape_with_token("test", 20, None).await;
    let total = start.elapsed();

    assert_eq!(result.len(), 20);
    assert_eq!(result.stop, StopReason::TargetReached);

    let gaps = fetcher.gaps();
    assert_eq!(gaps.len(), 1);
    assert!(gaps[0] >= DELAY, "gap {:?} shorter than delay", gaps[0]);
    // One sleep between the two pages, none once the target is met
    assert!(total < DELAY * 2, "scrape took {total:?}");
}

#[tokio::test]
async fn test_no_delay_when_first_page_meets_target() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&videos("a", 16)))]);

    let start = Instant::now();
    let result = paced_scraper(&fetcher).scrape_with_token("test", 16, None).await;

    assert_eq!(result.len(), 16);
    assert!(start.elapsed() < DELAY);
}

#[tokio::test]
async fn test_no_delay_after_empty_page() {
    let fetcher = ScriptedFetcher::new(vec![ok(&page(&videos("a", 2))), ok(&page(&[]))]);

    let start = Instant::now();
    let result = paced_scraper(&fetcher).scrape_with_token("test", 50, None).await;
    let total = start.elapsed();

    assert_eq!(result.stop, StopReason::Exhausted);
    assert!(fetcher.gaps()[0] >= DELAY);
    assert!(total < DELAY * 2, "scrape took {total:?}");
}
