use std::path::PathBuf;

use clap::Parser;

/// Competitor keyword research for the Hebrew market.
///
/// Pulls the keywords competitors rank for, expands a curated list of Hebrew
/// product terms with their inflections and compounds, verifies search volume,
/// and writes a categorized report.
#[derive(Parser, Debug)]
#[command(name = "kwscout", version, about)]
pub struct Args {
    /// Client name shown in the report
    #[arg(long)]
    pub client: String,

    /// Comma-separated competitor domains (e.g. "a.co.il,b.co.il")
    #[arg(long)]
    pub competitors: String,

    /// HTML report path
    #[arg(long, default_value = "keyword_research.html")]
    pub output: PathBuf,

    /// Also save the keyword database as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Token for the SE Ranking domain API
    #[arg(long, env = "SERANKING_PROJECT_TOKEN", hide_env_values = true)]
    pub project_token: String,

    /// Token for the SE Ranking keyword data API
    #[arg(long, env = "SERANKING_DATA_TOKEN", hide_env_values = true)]
    pub data_token: String,

    /// Market/source code passed to SE Ranking
    #[arg(long, default_value = crate::config::DEFAULT_SOURCE)]
    pub source: String,

    /// Delay between verification batches, in milliseconds
    #[arg(long, default_value_t = crate::config::DEFAULT_BATCH_DELAY.as_millis() as u64)]
    pub batch_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_arguments_are_rejected() {
        let err = Args::try_parse_from(["kwscout", "--client", "Aqua"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn optional_paths_parse() {
        let args = Args::try_parse_from([
            "kwscout",
            "--client",
            "Aqua",
            "--competitors",
            "a.co.il",
            "--project-token",
            "p",
            "--data-token",
            "d",
            "--output",
            "out.html",
            "--json",
            "db.json",
            "--batch-delay-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out.html"));
        assert_eq!(args.json, Some(PathBuf::from("db.json")));
        assert_eq!(args.batch_delay_ms, 0);
    }
}
