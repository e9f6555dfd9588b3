//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{PlayCommand, RunCommand, StepsCommand, ValidateCommand};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Step-by-step protocol walkthrough in the terminal
#[derive(Debug, Parser, Clone)]
#[command(name = "walkthrough")]
#[command(author = "Walkthrough Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A step-by-step terminal walkthrough of a request/response protocol", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Step through a script interactively
    Play(PlayCommand),

    /// Auto-play a script from start to finish without input
    Run(RunCommand),

    /// Validate a script file
    Validate(ValidateCommand),

    /// List the steps of a script
    Steps(StepsCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Log filter from `RUST_LOG`, falling back to info (debug with `--verbose`)
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.default_log_filter())
    }

    fn default_log_filter(&self) -> EnvFilter {
        EnvFilter::new(if self.verbose { "debug" } else { "info" })
    }
}
