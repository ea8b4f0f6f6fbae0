use crate::error::Result;
use crate::models::RepoRef;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Matches scheme-prefixed, www-prefixed, and bare host.tld/path URLs without
// swallowing the markdown punctuation around them.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#,
    )
    .expect("invalid regex")
});

/// Read the content of a source, which is either a local file path or a
/// remote `http(s)://` URL. A non-2xx response counts as a failed read.
pub async fn load_source(http: &reqwest::Client, source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = http.get(source).send().await?.error_for_status()?;
        Ok(response.text().await?)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

/// Extract every URL-looking substring from a body of text, in order.
/// Duplicates are preserved; deduplication happens in [`github_repos`].
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Filter raw URLs down to distinct GitHub repositories, preserving
/// first-seen order. Two URLs naming the same repo in different case
/// collapse onto one entry via the normalized key.
pub fn github_repos(urls: &[String]) -> Vec<RepoRef> {
    let mut seen = HashSet::new();
    let mut repos = Vec::new();

    for url in urls {
        if let Some(repo) = RepoRef::from_url(url) {
            if seen.insert(repo.key()) {
                repos.push(repo);
            }
        }
    }

    repos
}
