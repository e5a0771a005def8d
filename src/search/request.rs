//! Page request construction

use super::profile::{BROWSER_HEADERS, DEFAULT_BASE_URL, FINGERPRINT_PARAMS, SEARCH_PATH};
use crate::error::Result;
use url::Url;

/// Header set shared by every request of one scrape
///
/// Built once, then only read. Attaching a cookie produces a new value
/// instead of touching an existing one.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionHeaders {
    headers: Vec<(String, String)>,
    cookie: Option<String>,
}

impl SessionHeaders {
    /// Browser headers without a session cookie
    pub fn anonymous() -> Self {
        Self {
            headers: BROWSER_HEADERS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            cookie: None,
        }
    }

    /// Browser headers, plus a cookie when one is given
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) => Self::anonymous().with_cookie(token),
            None => Self::anonymous(),
        }
    }

    /// Return a copy of these headers carrying the given session cookie
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Session cookie, if any
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Whether requests will be sent with a session cookie
    pub fn is_authenticated(&self) -> bool {
        self.cookie.is_some()
    }

    /// Look up a header value by (case-insensitive) name
    pub fn get(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case("cookie") {
            return self.cookie();
        }
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over every header, cookie last
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(self.cookie.as_deref().map(|c| ("cookie", c)))
    }
}

impl Default for SessionHeaders {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Debug for SessionHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHeaders")
            .field("headers", &self.headers.len())
            .field("has_cookie", &self.cookie.is_some())
            .finish()
    }
}

/// A single page request, ready to send
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    /// Search keyword
    pub keyword: String,
    /// Index of the first item requested
    pub offset: u32,
    /// Items requested
    pub count: u32,
    /// Endpoint with the full encoded query string
    pub url: Url,
    /// Headers to send
    pub headers: &'a SessionHeaders,
}

impl SearchRequest<'_> {
    /// Whether this is a scroll continuation rather than the initial search
    pub fn is_continuation(&self) -> bool {
        self.offset > 0
    }

    /// Value of a query parameter on the built URL
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Builds [`SearchRequest`]s against one endpoint
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: Url,
}

impl RequestBuilder {
    /// Builder for the given scheme and host (the search path is appended)
    pub fn new(base_url: &str) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}{SEARCH_PATH}"))?;
        Ok(Self { endpoint })
    }

    /// Endpoint without query
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request for one page
    ///
    /// Performs no validation; an empty keyword is sent as-is.
    pub fn build<'a>(
        &self,
        keyword: &str,
        offset: u32,
        count: u32,
        headers: &'a SessionHeaders,
    ) -> SearchRequest<'a> {
        let focus_state = if offset > 0 { "true" } else { "false" };
        let web_id_last_time = chrono::Utc::now().timestamp().to_string();
        let offset_str = offset.to_string();
        let count_str = count.to_string();

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("WebIdLastTime", &web_id_last_time)
            .extend_pairs(FINGERPRINT_PARAMS.iter().copied())
            .append_pair("count", &count_str)
            .append_pair("focus_state", focus_state)
            .append_pair("keyword", keyword)
            .append_pair("offset", &offset_str);

        SearchRequest {
            keyword: keyword.to_string(),
            offset,
            count,
            url,
            headers,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(&format!("{DEFAULT_BASE_URL}{SEARCH_PATH}"))
                .expect("default search endpoint is a valid URL"),
        }
    }
}
