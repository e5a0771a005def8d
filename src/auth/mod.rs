//! Session credentials
//!
//! Loads a browser session cookie from a side file. Token acquisition is
//! out of scope: the cookie is copied from a logged-in browser by hand.
//!
//! The file is free-form notes; the token is the line right after a line
//! reading `cookie` (any case, surrounding whitespace ignored):
//!
//! ```text
//! request headers
//! Cookie
//! tt_chain_token=...; sessionid=...
//! ```
//!
//! A missing file or marker means "no token", never an error.

mod token;

pub use token::{load_session_token, parse_session_token, DEFAULT_COOKIE_FILE};
