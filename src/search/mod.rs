//! Search request builder
//!
//! Builds fully parameterized page requests for the general search endpoint.
//!
//! # Overview
//!
//! Almost every query parameter is a fixed browser/device fingerprint
//! (see [`FINGERPRINT_PARAMS`]). Per page only four values change:
//! `keyword`, `offset`, `count` and `focus_state`, the continuation flag
//! that is `false` for the first page and `true` for every later one.
//!
//! Headers live in [`SessionHeaders`], built once per scrape and passed by
//! reference into every [`RequestBuilder::build`] call.

mod profile;
mod request;

pub use profile::{
    BROWSER_HEADERS, DEFAULT_BASE_URL, FINGERPRINT_PARAMS, PAGE_SIZE, SEARCH_PATH,
};
pub use request::{RequestBuilder, SearchRequest, SessionHeaders};
