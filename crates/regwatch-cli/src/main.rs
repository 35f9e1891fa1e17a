use std::time::Duration;

use clap::{Parser, Subcommand};
use regwatch_client::{ApiClient, ClientConfig, Dashboard, RefreshSchedule};
use regwatch_core::ScrapeRequest;

mod display;

#[derive(Parser)]
#[command(name = "regwatch", version, about = "Regulatory intelligence dashboard client")]
struct Cli {
    /// Backend origin, e.g. https://compliance.example.com
    #[arg(long, env = "REGWATCH_API_URL", global = true)]
    api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(
        long,
        env = "REGWATCH_API_TOKEN",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    api_token: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and display the regulation feed
    Feed {
        /// Case-insensitive title filter
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Start a scraping job on the backend
    Scrape {
        /// Site the backend should scrape
        #[arg(long, default_value = "https://www.federalregister.gov")]
        url: String,

        /// Jurisdiction code, e.g. US or EU
        #[arg(long, default_value = "US")]
        jurisdiction: String,

        /// Optional category hint for the scraper
        #[arg(long)]
        category: Option<String>,

        /// Seconds to wait before re-loading the feed (0 disables)
        #[arg(long, default_value_t = 5)]
        refresh_after: u64,

        /// Upper bound on best-effort feed re-loads
        #[arg(long, default_value_t = 1)]
        refresh_attempts: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    tracing::info!("regwatch v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::new(cli.api_url, cli.api_token)
        .with_timeout(Duration::from_secs(cli.timeout));
    let mut dashboard = Dashboard::new(ApiClient::new(config));

    match cli.command {
        Command::Feed { query } => {
            dashboard.refresh().await;
            display::print_status(dashboard.is_connected());
            display::print_feed(&dashboard.filtered(&query));
            display::print_log(dashboard.log());
        }
        Command::Scrape {
            url,
            jurisdiction,
            category,
            refresh_after,
            refresh_attempts,
        } => {
            let request = ScrapeRequest {
                url,
                jurisdiction,
                category,
            };
            let schedule = (refresh_after > 0).then_some(RefreshSchedule {
                delay: Duration::from_secs(refresh_after),
                attempts: refresh_attempts,
            });
            match dashboard.start_scrape(&request, schedule).await {
                Some(job) => println!("Scrape job {} in progress...", job.job_id),
                None => println!("Scraper failed to start"),
            }
            if !dashboard.regulations().is_empty() {
                display::print_feed(&dashboard.filtered(""));
            }
            display::print_log(dashboard.log());
        }
    }

    Ok(())
}
