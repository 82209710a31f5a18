//! Resolution of tweet references.
//!
//! A reference is either a permalink such as `https://twitter.com/jack/status/20` (the `statuses`
//! spelling and subdomains like `mobile.` are accepted too) or a bare status id such as `20`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// An optional permalink prefix followed by the status id. The username segment is not captured.
const PATTERN: &str = r"(?:https?://(?:[^./]+\.)?twitter\.com/[^/]*/status(?:es)?/)?([0-9]+)";

static RE_ANCHORED: OnceLock<Regex> = OnceLock::new();
static RE_SEARCH: OnceLock<Regex> = OnceLock::new();

/// Where in the input a reference may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The reference must start at the beginning of the input.
    Anchored,
    /// The first reference anywhere in the input is used.
    Search,
}

/// The numeric id of a status, kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusId(String);

impl StatusId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the status id that `input` refers to.
///
/// Returns `None` if there is no reference. Nothing is validated beyond the shape of the input;
/// the id may not exist.
#[must_use]
pub fn resolve(input: &str, mode: Mode) -> Option<StatusId> {
    let captures = regex(mode).captures(input)?;

    captures.get(1).map(|m| StatusId(m.as_str().to_string()))
}

fn regex(mode: Mode) -> &'static Regex {
    match mode {
        Mode::Anchored => RE_ANCHORED
            .get_or_init(|| Regex::new(&format!("^{PATTERN}")).expect("invalid regex")),
        Mode::Search => RE_SEARCH.get_or_init(|| Regex::new(PATTERN).expect("invalid regex")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(input: &str) -> Option<String> {
        resolve(input, Mode::Anchored).map(|id| id.to_string())
    }

    fn search(input: &str) -> Option<String> {
        resolve(input, Mode::Search).map(|id| id.to_string())
    }

    #[test]
    fn it_should_resolve_permalinks() {
        let tests = [
            ("https://twitter.com/jack/status/20", "20"),
            ("http://twitter.com/jack/status/20", "20"),
            ("https://twitter.com/jack/statuses/20", "20"),
            ("https://mobile.twitter.com/jack/status/20", "20"),
            ("https://twitter.com/j.a-c_k/status/1234567890123456789", "1234567890123456789"),
            ("https://twitter.com/jack/status/20?s=21", "20"),
        ];

        for (input, expected) in tests {
            assert_eq!(anchored(input).as_deref(), Some(expected), "{input}");
        }
    }

    #[test]
    fn it_should_ignore_the_username() {
        assert_eq!(anchored("https://twitter.com/123/status/456").as_deref(), Some("456"));
        assert_eq!(anchored("https://twitter.com//status/456").as_deref(), Some("456"));
    }

    #[test]
    fn it_should_resolve_bare_ids() {
        assert_eq!(anchored("20").as_deref(), Some("20"));
        // Only the start has to match.
        assert_eq!(anchored("20abc").as_deref(), Some("20"));
    }

    #[test]
    fn it_should_reject_non_numeric_ids() {
        assert_eq!(anchored("https://twitter.com/jack/status/abc"), None);
        assert_eq!(search("https://twitter.com/jack/status/abc"), None);
        assert_eq!(anchored("https://twitter.com/jack"), None);
        assert_eq!(anchored(""), None);
    }

    #[test]
    fn anchored_mode_rejects_leading_text() {
        assert_eq!(anchored("id 20"), None);
        assert_eq!(anchored(" 20"), None);
        assert_eq!(anchored("see https://twitter.com/jack/status/20"), None);
    }

    #[test]
    fn search_mode_finds_embedded_references() {
        assert_eq!(
            search("check this out https://twitter.com/x/status/42 thanks").as_deref(),
            Some("42")
        );
        assert_eq!(search("twitter says 42").as_deref(), Some("42"));
    }

    #[test]
    fn search_mode_uses_the_first_match() {
        assert_eq!(
            search("https://twitter.com/a/status/1 https://twitter.com/b/status/2").as_deref(),
            Some("1")
        );
        assert_eq!(
            search("3 and https://twitter.com/b/status/2").as_deref(),
            Some("3")
        );
    }

    #[test]
    fn it_should_only_accept_ascii_digits() {
        assert_eq!(anchored("٤٢"), None);
    }
}
