//! Response decoding
//!
//! Parses the search API's JSON envelope into an explicit schema.
//!
//! # Overview
//!
//! The upstream payload is undocumented and loosely typed: fields go
//! missing, come back as `null`, or switch between numbers and numeric
//! strings. Every field of the schema therefore carries a default and a
//! lenient deserializer, so shape problems are settled here once and the
//! extraction code never has to look inside a `serde_json::Value`.
//!
//! Entries are classified by their `type` discriminator into
//! [`SearchEntry::Video`] or [`SearchEntry::Other`].

mod envelope;
mod lenient;
mod types;

pub use envelope::{decode_envelope, ResponseEnvelope, SearchEntry, VIDEO_ENTRY_TYPE};
pub use types::{RawAuthor, RawItem, RawMusic, RawStats, RawVideo, TextExtra, HASHTAG_TYPE};
