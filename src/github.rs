use crate::error::Result;
use crate::models::{RepoRef, RepoResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the GitHub repos endpoint.
///
/// The credential is injected at construction; requests without one fall
/// under the remote service's stricter anonymous rate limits.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("starrank/0.1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GitHubClient { client, token })
    }

    /// One API call for one repository: returns the HTTP status and, on
    /// 200, the parsed star count. Transport-level failures surface as Err.
    pub async fn fetch_stars(&self, repo: &RepoRef) -> Result<(u16, Option<i64>)> {
        let url = format!("{}/repos/{}/{}", API_BASE_URL, repo.owner, repo.repo);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let data: RepoResponse = response.json().await?;
            Ok((status.as_u16(), Some(data.stargazers_count)))
        } else {
            Ok((status.as_u16(), None))
        }
    }
}
