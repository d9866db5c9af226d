//! Repository reference normalization

use serde::{Deserialize, Serialize};

/// Canonical reference to a GitHub repository
///
/// Derived on demand from a raw CSV cell; never stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Canonical `owner/repo` form, exactly one separating slash
    pub owner_repo: String,
    /// Canonical `https://github.com/owner/repo` URL
    pub url: String,
}

impl RepoRef {
    /// Normalize a free-form repository identifier
    ///
    /// Accepts full GitHub URLs, bare `github.com/owner/repo` paths and
    /// plain `owner/repo` values, tolerating stray quotes, surrounding
    /// whitespace, trailing slashes and a `.git` suffix. Returns `None`
    /// for anything else; callers fall back to showing the raw text
    /// unlinked rather than treating that as an error.
    pub fn normalize(raw: &str) -> Option<RepoRef> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '"' | '\'' | '`'))
            .collect();
        let mut rest = cleaned.trim();
        if rest.is_empty() {
            return None;
        }

        rest = rest.trim_end_matches('/');
        if rest.to_ascii_lowercase().ends_with(".git") {
            rest = &rest[..rest.len() - 4];
        }
        let rest = rest.trim_end_matches('/');

        let lowered = rest.to_ascii_lowercase();
        for scheme in ["https://", "http://"] {
            if lowered.starts_with(scheme) {
                return Self::from_host_path(&rest[scheme.len()..]);
            }
        }

        if lowered.starts_with("github.com/") || lowered.starts_with("www.github.com/") {
            return Self::from_host_path(rest);
        }

        // Plain owner/repo: exactly one separating slash, no whitespace
        let mut parts = rest.split('/');
        if let (Some(owner), Some(repo), None) = (parts.next(), parts.next(), parts.next()) {
            if !owner.is_empty() && !repo.is_empty() && !rest.chars().any(char::is_whitespace) {
                return Some(Self::canonical(owner, repo));
            }
        }
        None
    }

    /// Extract owner and repo from a `host/path` form rooted at github.com
    ///
    /// The repo segment is truncated at the next path separator or
    /// whitespace, so browser URLs like `/owner/repo/tree/main` resolve.
    fn from_host_path(rest: &str) -> Option<RepoRef> {
        let (host, path) = rest.split_once('/')?;
        let host = host.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        if host != "github.com" {
            return None;
        }
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let repo = segments.next()?.split_whitespace().next()?;
        Some(Self::canonical(owner, repo))
    }

    fn canonical(owner: &str, repo: &str) -> RepoRef {
        RepoRef {
            owner_repo: format!("{}/{}", owner, repo),
            url: format!("https://github.com/{}/{}", owner, repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(raw: &str) -> RepoRef {
        RepoRef::normalize(raw).unwrap()
    }

    #[test]
    fn test_plain_owner_repo() {
        let repo = ok("OSeMOSYS/MUIO");
        assert_eq!(repo.owner_repo, "OSeMOSYS/MUIO");
        assert_eq!(repo.url, "https://github.com/OSeMOSYS/MUIO");
    }

    #[test]
    fn test_full_url_with_git_suffix_and_slash() {
        let repo = ok("https://github.com/foo/bar.git/");
        assert_eq!(repo.owner_repo, "foo/bar");
        assert_eq!(repo.url, "https://github.com/foo/bar");
    }

    #[test]
    fn test_http_and_www() {
        assert_eq!(ok("http://www.github.com/foo/bar").owner_repo, "foo/bar");
        assert_eq!(ok("HTTPS://GitHub.com/Foo/Bar").owner_repo, "Foo/Bar");
    }

    #[test]
    fn test_bare_domain_path() {
        assert_eq!(ok("github.com/foo/bar").owner_repo, "foo/bar");
        assert_eq!(ok("www.github.com/foo/bar").owner_repo, "foo/bar");
    }

    #[test]
    fn test_browser_url_truncates_at_next_segment() {
        let repo = ok("https://github.com/foo/bar/tree/main/src");
        assert_eq!(repo.owner_repo, "foo/bar");
        assert_eq!(repo.url, "https://github.com/foo/bar");
    }

    #[test]
    fn test_stray_quotes_stripped() {
        assert_eq!(ok(r#""foo/bar""#).owner_repo, "foo/bar");
        assert_eq!(ok("'foo/bar'").owner_repo, "foo/bar");
        assert_eq!(ok("`foo/bar`").owner_repo, "foo/bar");
        assert_eq!(ok("  foo/bar  ").owner_repo, "foo/bar");
    }

    #[test]
    fn test_git_suffix_case_insensitive() {
        assert_eq!(ok("foo/bar.GIT").owner_repo, "foo/bar");
    }

    #[test]
    fn test_too_many_slashes_rejected() {
        assert!(RepoRef::normalize("not-a-repo-ref-with/too/many/slashes").is_none());
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert!(RepoRef::normalize("").is_none());
        assert!(RepoRef::normalize("   ").is_none());
        assert!(RepoRef::normalize("\"\"").is_none());
    }

    #[test]
    fn test_no_slash_rejected() {
        assert!(RepoRef::normalize("just-a-name").is_none());
    }

    #[test]
    fn test_whitespace_inside_plain_form_rejected() {
        assert!(RepoRef::normalize("foo / bar").is_none());
        assert!(RepoRef::normalize("some label/with space").is_none());
    }

    #[test]
    fn test_other_hosts_rejected() {
        assert!(RepoRef::normalize("https://gitlab.com/foo/bar").is_none());
        assert!(RepoRef::normalize("bitbucket.org/foo/bar").is_none());
    }

    #[test]
    fn test_url_without_repo_segment_rejected() {
        assert!(RepoRef::normalize("https://github.com/onlyowner").is_none());
        assert!(RepoRef::normalize("https://github.com/").is_none());
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(ok("https://github.com//foo//bar").owner_repo, "foo/bar");
    }
}
