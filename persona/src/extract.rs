//! Username extraction from Reddit profile URLs.

use once_cell::sync::Lazy;
use regex::Regex;

static USER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reddit\.com/user/([A-Za-z0-9_\-]+)").expect("valid regex"));

/// Pull the username out of a profile URL like
/// `https://www.reddit.com/user/kojied`.
///
/// The match is unanchored, so trailing slashes, extra path segments or a
/// query string after the username are tolerated; the run of allowed
/// characters (letters, digits, underscore, hyphen) ends at the first
/// character outside that set. Returns `None` when the URL carries no
/// `/user/` segment at all.
pub fn extract_username(url: &str) -> Option<String> {
    USER_RE
        .captures(url)
        .map(|caps| caps[1].to_string())
}
