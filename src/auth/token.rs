//! Cookie side-file parsing

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Where the CLI looks for the cookie file by default
pub const DEFAULT_COOKIE_FILE: &str = "docs/damn.md";

const COOKIE_MARKER: &str = "cookie";

/// Extract the session token from side-file contents
///
/// A marker followed by a blank line is passed over and the search goes on.
pub fn parse_session_token(contents: &str) -> Option<String> {
    let lines: Vec<&str> = contents.lines().collect();
    lines
        .windows(2)
        .filter(|pair| pair[0].trim().eq_ignore_ascii_case(COOKIE_MARKER))
        .map(|pair| pair[1].trim())
        .find(|token| !token.is_empty())
        .map(str::to_string)
}

/// Read the session token from a side file
///
/// Returns `None` (and logs why) when the file cannot be read or holds no token.
pub fn load_session_token(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Cookie file not found: {}", path.display());
            return None;
        }
        Err(e) => {
            warn!("Error loading cookies from {}: {e}", path.display());
            return None;
        }
    };

    let token = parse_session_token(&contents);
    if token.is_none() {
        debug!("No cookie marker in {}", path.display());
    }
    token
}
