use clap::Parser;
use starrank::app;
use starrank::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    tokio::select! {
        result = app::run(cli) => {
            if let Err(e) = result {
                eprintln!("An unexpected error occurred: {}", e);
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nProgram interrupted by user");
            std::process::exit(130);
        }
    }
}
