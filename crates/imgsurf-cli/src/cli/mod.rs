//! CLI for the imgsurf page image downloader.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imgsurf_core::config::{self, ImgsurfConfig};
use std::path::PathBuf;

use commands::{run_fetch, run_list};

/// Top-level CLI. Without a subcommand, behaves like `fetch`.
#[derive(Debug, Parser)]
#[command(name = "imgsurf")]
#[command(about = "imgsurf: download every image a web page references", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FetchArgs {
    /// Page to scan. Prompted for when omitted; `https://` is added if no scheme is given.
    pub url: Option<String>,

    /// Output folder (created if missing). Defaults to the configured folder.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load a page and download every image it references.
    Fetch(FetchArgs),

    /// Load a page and print the image URLs it references, without downloading.
    List {
        /// Page to scan. Prompted for when omitted.
        url: Option<String>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("could not load config, using defaults: {:#}", e);
                ImgsurfConfig::default()
            }
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            Some(CliCommand::Fetch(args)) => run_fetch(&cfg, args)?,
            Some(CliCommand::List { url }) => run_list(&cfg, url)?,
            None => run_fetch(&cfg, cli.fetch)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
