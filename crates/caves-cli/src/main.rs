//! Caves CLI - Count paths through a cave layout

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

use caves_core::{Layout, PathEnumerator, PathQuery};
use config::Config;
use output::{render, OutputFormat, Report};

#[derive(Parser)]
#[command(name = "caves")]
#[command(author, version, about = "Count every path through a cave layout")]
pub struct Cli {
    /// Layout file, one `A-B` passage per line
    #[arg(short, long, env = "CAVES_INPUT")]
    pub input: PathBuf,

    /// Puzzle part: 1 (small caves once) or 2 (one small cave twice)
    #[arg(short, long, env = "CAVES_PART", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Print every path before the answer
    #[arg(long)]
    pub list_paths: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting caves CLI");

    let config = Config::from_cli(&cli)?;
    let input = config.read_input()?;

    let layout = Layout::parse(&input)?;
    tracing::info!(
        "Loaded {} caves and {} passages from {}",
        layout.cave_count(),
        layout.passage_count(),
        config.input.display()
    );

    let query = PathQuery::new(config.part.policy()).record_paths(config.list_paths);
    let result = PathEnumerator::execute(&layout, &query)?;
    tracing::info!(
        "Traversal entered {} caves, refused {} branches",
        result.stats.caves_entered,
        result.stats.branches_refused
    );

    let report = Report::new(config.part, result, config.list_paths);
    print!("{}", render(&report, config.format)?);

    Ok(())
}
