mod cli;
mod config;
mod keywords;
mod pipeline;
mod report;
mod seranking;
mod verify;

pub const USER_AGENT: &str = concat!("kwscout/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use cli::Args;
use config::Config;
use seranking::SeRankingClient;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Per-request timeout covering connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kwscout=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args);

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let client = SeRankingClient::new(http, &config);

    let results = pipeline::research(&client, &config).await;

    if let Some(path) = &args.json {
        report::json::save_json(&results.store, path)
            .inspect_err(|e| tracing::error!("{e}"))?;
    }
    report::html::save_html(&results, &config.client_name, &config.competitors, &args.output)
        .inspect_err(|e| tracing::error!("{e}"))?;

    info!(
        keywords = results.summary.total_keywords,
        volume = results.summary.total_volume,
        "done"
    );
    println!("Done! Report saved to: {}", args.output.display());
    Ok(())
}
