//! CLI configuration

use std::path::PathBuf;

use anyhow::Context;
use caves_core::Part;

use crate::output::OutputFormat;
use crate::Cli;

/// Settings resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub part: Part,
    pub format: OutputFormat,
    pub list_paths: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        if !cli.input.is_file() {
            anyhow::bail!("Input file not found: {}", cli.input.display());
        }

        let part = Part::try_from(cli.part).map_err(anyhow::Error::msg)?;

        Ok(Self {
            input: cli.input.clone(),
            part,
            format: cli.output_format(),
            list_paths: cli.list_paths,
        })
    }

    /// Read the whole layout file
    pub fn read_input(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input file {}", self.input.display()))
    }
}
