mod cli;
mod endpoints;
mod error;
mod frontier;
mod graph_file;
mod link_source;
mod path;
mod search;
mod wiki;

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Cli, OutputFormat};
use crate::endpoints::resolve_endpoint;
use crate::error::{Error, Result};
use crate::graph_file::AdjacencyGraph;
use crate::link_source::{LinkSource, Paced};
use crate::path::Path;
use crate::search::find_path;
use crate::wiki::{canonicalize, WikiClient};

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    start: &'a str,
    end: &'a str,
    max_depth: usize,
    path: Option<&'a Path>,
}

fn render(format: OutputFormat, report: &SearchReport<'_>) -> Result<String> {
    let text = match (format, report.path) {
        (OutputFormat::Json, _) => serde_json::to_string(report)?,
        (OutputFormat::Lines, Some(path)) => path.lines(),
        (OutputFormat::Text, Some(path)) => format!("Path from URL1 to URL2:\n{}", path),
        (OutputFormat::Text | OutputFormat::Lines, None) => format!(
            "No path found within {} transitions.",
            report.max_depth
        ),
    };
    Ok(text)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init(); // stdout only carries results
}

// both endpoints must be given up front when searching an edge list
fn fixed_endpoints(cli: &Cli) -> Result<(String, String)> {
    match (&cli.start, &cli.end) {
        (Some(start), Some(end)) => Ok((start.clone(), end.clone())),
        _ => Err(Error::Config("--graph needs both --start and --end".to_string())),
    }
}

// announces the endpoints up front since the search itself can take minutes
fn search_and_report<W: Write>(
    cli: &Cli,
    out: &mut W,
    start: &str,
    end: &str,
    source: impl LinkSource,
) -> Result<()> {
    if cli.format == OutputFormat::Text {
        writeln!(out, "URL1: {}\nURL2: {}", start, end)?;
        out.flush()?;
    }
    info!(start, end, max_depth = cli.max_depth, "searching");

    let mut paced = Paced::new(source, cli.rate_limit);
    let path = find_path(start, end, cli.max_depth, &mut paced);

    let report = SearchReport {
        start,
        end,
        max_depth: cli.max_depth,
        path: path.as_ref(),
    };
    writeln!(out, "{}", render(cli.format, &report)?)?;
    Ok(())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.graph {
        Some(file) => {
            let graph = AdjacencyGraph::load(file, cli.symmetric)?;
            let (start, end) = fixed_endpoints(cli)?;
            search_and_report(cli, out, &start, &end, graph)
        }
        None => {
            let client = WikiClient::new(&cli.base_url, cli.timeout)?;
            let pick = || client.random_page();
            let start = resolve_endpoint(cli.start.as_deref(), cli.max_attempts, pick)?;
            let end = resolve_endpoint(cli.end.as_deref(), cli.max_attempts, pick)?;
            let (start, end) = (canonicalize(&start), canonicalize(&end));
            search_and_report(cli, out, &start, &end, client)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())?;
    Ok(())
}
