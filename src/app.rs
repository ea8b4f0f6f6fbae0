use crate::cache::StarCache;
use crate::cli::Cli;
use crate::error::Result;
use crate::extract::{extract_urls, github_repos, load_source};
use crate::fetch;
use crate::github::GitHubClient;
use crate::limiter::RateLimiter;
use crate::models::StarResult;
use crate::report::{print_report, write_full_report, AggregateReport};
use colored::*;
use std::time::Duration;

const SOURCE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the whole pipeline: extract, fetch, aggregate, report.
pub async fn run(cli: Cli) -> Result<()> {
    let cache = StarCache::open(&cli.cache_path).await?;
    let limiter = RateLimiter::new(cli.max_requests, Duration::from_secs_f64(cli.time_period));
    let client = GitHubClient::new(cli.github_token.clone())?;
    let http = reqwest::Client::builder()
        .timeout(SOURCE_FETCH_TIMEOUT)
        .build()?;

    let mut report = AggregateReport::new();

    // Sources are independent: one that fails to load is reported and
    // skipped, and the run continues with the rest.
    for source in &cli.sources {
        match process_source(source, &http, &client, &cache, &limiter).await {
            Ok(results) => report.add_results(&results),
            Err(e) => eprintln!("{}", format!("Skipping {}: {}", source, e).red()),
        }
    }

    let ranked = report.into_ranked();
    if let Some(path) = &cli.output {
        write_full_report(path, &ranked)?;
    }
    print_report(&ranked, cli.top);

    Ok(())
}

/// Extract the distinct GitHub repos of one source and resolve their stars.
async fn process_source(
    source: &str,
    http: &reqwest::Client,
    client: &GitHubClient,
    cache: &StarCache,
    limiter: &RateLimiter,
) -> Result<Vec<StarResult>> {
    let content = load_source(http, source).await?;
    let urls = extract_urls(&content);
    let repos = github_repos(&urls);

    println!("Discovered {} GitHub links in {}", repos.len(), source);

    Ok(fetch::star_counts(client, cache, limiter, repos).await)
}
