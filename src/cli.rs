use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starrank")]
#[command(about = "Rank GitHub repositories mentioned in plaintext/markdown sources by star count")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// One or more plaintext/markdown file paths or URLs containing GitHub repository links
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Number of top repositories to display by stars
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// File path to write the full ranking report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of API requests in the given time period
    #[arg(long, default_value_t = 3)]
    pub max_requests: usize,

    /// Time period in seconds for rate limiting
    #[arg(long, default_value_t = 1.0)]
    pub time_period: f64,

    /// Path of the star cache database
    #[arg(long, default_value = "github_stars.db")]
    pub cache_path: PathBuf,

    /// GitHub API token; anonymous requests are subject to stricter rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}
