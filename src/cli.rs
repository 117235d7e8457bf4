use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::search::DEFAULT_MAX_DEPTH;
use crate::wiki::DEFAULT_BASE_URL;

/// Find a short chain of links between two encyclopedia pages.
#[derive(Parser, Debug)]
#[command(name = "wikipath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds between the starts of consecutive page fetches
    #[arg(default_value = "1", value_parser = parse_seconds, env = "WIKIPATH_RATE_LIMIT")]
    pub rate_limit: Duration,

    /// Largest number of hops a path may have
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "WIKIPATH_MAX_DEPTH")]
    pub max_depth: usize,

    /// Start page URL (random when omitted)
    #[arg(long)]
    pub start: Option<String>,

    /// End page URL (random when omitted)
    #[arg(long)]
    pub end: Option<String>,

    /// Site the pages live on
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "WIKIPATH_BASE_URL")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", value_parser = parse_seconds)]
    pub timeout: Duration,

    /// Attempts at picking a random page before giving up
    #[arg(long, default_value_t = 10)]
    pub max_attempts: usize,

    /// Read links from a `from,to` CSV edge list instead of the network
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Treat every edge of --graph as a link in both directions
    #[arg(long, requires = "graph")]
    pub symmetric: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Arrow-joined path with a header
    Text,
    /// One page per line
    Lines,
    Json,
}

// rejects negative, NaN, infinite and out-of-range values
fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", value))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("`{}` must be a non-negative number of seconds", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wikipath"]).unwrap();
        assert_eq!(cli.rate_limit, Duration::from_secs(1));
        assert_eq!(cli.max_depth, 5);
        assert_eq!(cli.base_url, "https://en.wikipedia.org");
        assert_eq!(cli.timeout, Duration::from_secs(10));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.graph.is_none());
    }

    #[test]
    fn test_positional_rate_limit() {
        let cli = Cli::try_parse_from(["wikipath", "0.25", "--max-depth", "3"]).unwrap();
        assert_eq!(cli.rate_limit, Duration::from_millis(250));
        assert_eq!(cli.max_depth, 3);
    }

    #[test]
    fn test_rejects_bad_rate_limit() {
        assert!(Cli::try_parse_from(["wikipath", "-1"]).is_err());
        assert!(Cli::try_parse_from(["wikipath", "soon"]).is_err());
        assert!(Cli::try_parse_from(["wikipath", "--timeout", "inf"]).is_err());
    }

    #[test]
    fn test_rejects_durations_out_of_range() {
        assert!(Cli::try_parse_from(["wikipath", "1e300"]).is_err());
        assert!(Cli::try_parse_from(["wikipath", "--timeout", "1e300"]).is_err());
        assert!(Cli::try_parse_from(["wikipath", "NaN"]).is_err());
    }

    #[test]
    fn test_symmetric_needs_graph() {
        assert!(Cli::try_parse_from(["wikipath", "--symmetric"]).is_err());
        let cli = Cli::try_parse_from(["wikipath", "--graph", "edges.csv", "--symmetric"]).unwrap();
        assert!(cli.symmetric);
        assert_eq!(cli.graph, Some(PathBuf::from("edges.csv")));
    }
}
