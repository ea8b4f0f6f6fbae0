use serde::Deserialize;
use url::Url;

/// A GitHub repository reference extracted from a source document.
///
/// Owner and repo keep the casing they had in the URL; [`RepoRef::key`]
/// produces the canonical lowercase form used for caching and aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Interpret a raw URL string as a GitHub repository link.
    ///
    /// Accepts only absolute URLs whose host is exactly `github.com` and
    /// whose path has at least two non-empty segments (owner and repo).
    /// Organization pages, other hosts, and scheme-less strings are rejected.
    pub fn from_url(raw: &str) -> Option<Self> {
        let parsed = Url::parse(raw).ok()?;
        if parsed.host_str() != Some("github.com") {
            return None;
        }

        let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let repo = segments.next()?;

        Some(RepoRef {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Canonical lowercase `owner/repo` cache and aggregation key.
    pub fn key(&self) -> String {
        format!("{}/{}", self.owner, self.repo).to_lowercase()
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

/// Outcome of resolving one repository's star count.
///
/// Failures are captured as data rather than propagated: a repository that
/// answered with a non-200 status or never answered at all is `Excluded`
/// and omitted from the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Stars(i64),
    Excluded { status: u16 },
}

/// Sentinel status for transport-level failures (timeout, connection error),
/// distinct from any real HTTP status.
pub const TRANSPORT_ERROR_STATUS: u16 = 0;

/// Per-repo result for one run, scoped to a single source.
#[derive(Debug, Clone)]
pub struct StarResult {
    pub repo: RepoRef,
    pub outcome: FetchOutcome,
}

// GitHub API response structure
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub stargazers_count: i64,
}
