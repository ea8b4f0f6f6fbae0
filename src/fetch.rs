use crate::cache::StarCache;
use crate::github::GitHubClient;
use crate::limiter::RateLimiter;
use crate::models::{FetchOutcome, RepoRef, StarResult, TRANSPORT_ERROR_STATUS};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Resolve star counts for all pending repos of one source.
///
/// Every repo is fetched concurrently; the limiter paces the live API calls
/// while cache hits answer immediately. Failures never abort siblings, they
/// come back as `Excluded` results.
pub async fn star_counts(
    client: &GitHubClient,
    cache: &StarCache,
    limiter: &RateLimiter,
    repos: Vec<RepoRef>,
) -> Vec<StarResult> {
    let progress = ProgressBar::new(repos.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .expect("could not create progress bar style")
            .progress_chars("=> "),
    );
    progress.set_message("Fetching GitHub star data");

    let tasks = repos
        .into_iter()
        .map(|repo| star_count(client, cache, limiter, repo, &progress));
    let results = join_all(tasks).await;

    progress.finish_and_clear();
    results
}

/// The per-repo sequence: fresh cache hit short-circuits; otherwise take a
/// limiter slot, call the API, and record the answer in the cache.
async fn star_count(
    client: &GitHubClient,
    cache: &StarCache,
    limiter: &RateLimiter,
    repo: RepoRef,
    progress: &ProgressBar,
) -> StarResult {
    let key = repo.key();

    match cache.lookup(&key).await {
        Ok(Some(entry)) => {
            progress.inc(1);
            let outcome = match entry.stars {
                Some(stars) if entry.status == 200 => FetchOutcome::Stars(stars),
                _ => FetchOutcome::Excluded {
                    status: entry.status,
                },
            };
            return StarResult { repo, outcome };
        }
        Ok(None) => {}
        Err(e) => {
            warn!(repo = %key, error = %e, "cache lookup failed, fetching live");
        }
    }

    limiter.acquire().await;

    let outcome = match client.fetch_stars(&repo).await {
        Ok((status, stars)) => {
            if let Err(e) = cache.store(&key, stars, status).await {
                warn!(repo = %key, error = %e, "failed to update star cache");
            }
            match stars {
                Some(stars) => FetchOutcome::Stars(stars),
                None => FetchOutcome::Excluded { status },
            }
        }
        Err(e) => {
            warn!(repo = %key, error = %e, "error fetching star data");
            if let Err(e) = cache.store(&key, None, TRANSPORT_ERROR_STATUS).await {
                warn!(repo = %key, error = %e, "failed to update star cache");
            }
            FetchOutcome::Excluded {
                status: TRANSPORT_ERROR_STATUS,
            }
        }
    };

    progress.inc(1);
    StarResult { repo, outcome }
}
