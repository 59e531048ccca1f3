//! Repository reference parsing
//!
//! Accepts the URL shapes people actually paste: full web URLs, scheme-less
//! `github.com/...` forms, and the bare `owner/repo` shorthand.

use regex::Regex;
use std::sync::LazyLock;

/// Web URL ending in `owner/repo`, with optional `.git` and trailing slash
static WEB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/\s]+)/([^/\s]+?)(?:\.git)?/?$").unwrap()
});

/// Bare `owner/repo` shorthand
static SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/\s]+)/([^/\s]+)$").unwrap());

/// Reference to a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Extract a repository reference from user input.
    ///
    /// Patterns are tried in order and the first match wins. Input is
    /// trimmed, and a single trailing `.git` is stripped from the captured
    /// name. Returns `None` when no pattern matches, so callers can abort
    /// before making any network call.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        for pattern in [&*WEB_URL_RE, &*SHORTHAND_RE] {
            if let Some(captures) = pattern.captures(input) {
                let owner = captures.get(1)?.as_str();
                let name = captures.get(2)?.as_str();
                let name = name.strip_suffix(".git").unwrap_or(name);
                if name.is_empty() {
                    return None;
                }
                return Some(RepoRef {
                    owner: owner.to_string(),
                    name: name.to_string(),
                });
            }
        }
        None
    }

    /// `owner/name`, as used in API paths
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> RepoRef {
        RepoRef::parse(input).unwrap_or_else(|| panic!("should parse: {input}"))
    }

    #[test]
    fn test_parse_full_url() {
        let reference = parsed("https://github.com/rust-lang/rust");
        assert_eq!(reference.owner, "rust-lang");
        assert_eq!(reference.name, "rust");
    }

    #[test]
    fn test_parse_accepted_forms_agree() {
        let expected = RepoRef {
            owner: "rust-lang".to_string(),
            name: "rust".to_string(),
        };
        for input in [
            "https://github.com/rust-lang/rust",
            "https://github.com/rust-lang/rust.git",
            "https://github.com/rust-lang/rust/",
            "http://github.com/rust-lang/rust",
            "github.com/rust-lang/rust",
            "rust-lang/rust",
            "rust-lang/rust.git",
        ] {
            assert_eq!(RepoRef::parse(input), Some(expected.clone()), "{input}");
        }
    }

    #[test]
    fn test_parse_trims_input() {
        let reference = parsed("  https://github.com/rust-lang/rust \n");
        assert_eq!(reference.full_name(), "rust-lang/rust");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(RepoRef::parse(""), None);
        assert_eq!(RepoRef::parse("   "), None);
        assert_eq!(RepoRef::parse("no-slash-here"), None);
        assert_eq!(RepoRef::parse("https://example.com/owner/repo"), None);
    }

    #[test]
    fn test_parse_rejects_deep_paths() {
        assert_eq!(RepoRef::parse("https://github.com/rust-lang/rust/issues"), None);
        assert_eq!(
            RepoRef::parse("https://github.com/rust-lang/rust/blob/master/README.md"),
            None
        );
    }

    #[test]
    fn test_parse_rejects_empty_name_after_git_strip() {
        assert_eq!(RepoRef::parse("owner/.git"), None);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(parsed("octocat/hello-world").full_name(), "octocat/hello-world");
    }
}
