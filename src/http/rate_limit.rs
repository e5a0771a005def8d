//! Inter-page pacing
//!
//! A constant sleep between page fetches. There is no adaptive backoff:
//! any failed page already ends the scrape.

use std::time::Duration;

/// Fixed delay between consecutive page requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDelay {
    delay: Duration,
}

impl PageDelay {
    /// Default pause between pages
    pub const DEFAULT: Duration = Duration::from_secs(1);

    /// Create a delay of the given length
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a delay from milliseconds
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// No pause at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Length of the pause
    pub fn duration(&self) -> Duration {
        self.delay
    }

    /// Whether waiting is a no-op
    pub fn is_zero(&self) -> bool {
        self.delay.is_zero()
    }

    /// Sleep for the configured interval
    pub async fn wait(&self) {
        if !self.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for PageDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_page_delay_default() {
        assert_eq!(PageDelay::default().duration(), Duration::from_secs(1));
        assert!(!PageDelay::default().is_zero());
    }

    #[test]
    fn test_page_delay_constructors() {
        assert_eq!(PageDelay::from_millis(250).duration(), Duration::from_millis(250));
        assert!(PageDelay::none().is_zero());
    }

    #[tokio::test]
    async fn test_page_delay_waits() {
        let delay = PageDelay::from_millis(30);
        let start = Instant::now();
        delay.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let start = Instant::now();
        PageDelay::none().wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
