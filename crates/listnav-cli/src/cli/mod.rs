//! CLI for listnav: compute listing navigations and inspect page fixtures.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listnav_core::config::{self, ListnavConfig};
use listnav_core::query::PageNumber;
use std::path::{Path, PathBuf};

use commands::{run_clear, run_filter, run_inspect, run_page};

/// Top-level CLI for listnav.
#[derive(Debug, Parser)]
#[command(name = "listnav")]
#[command(about = "listnav: query-string navigation for listing pages", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/listnav/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print where submitting the filter form navigates to.
    Filter {
        /// Current page URL (absolute, or /path?query).
        url: String,
        /// Checked tag value; repeat in form order.
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Selected sort option.
        #[arg(long)]
        sort: Option<String>,
    },

    /// Print where switching to another listing page navigates to.
    Page {
        /// Current page URL (absolute, or /path?query).
        url: String,
        /// Page number, starting at 1.
        page: PageNumber,
    },

    /// Print where clearing filter and sort navigates to.
    Clear {
        /// Current page URL (absolute, or /path?query).
        url: String,
    },

    /// Load a TOML page fixture, run its load-time scripts, and print the result.
    Inspect {
        /// Path to the page fixture.
        fixture: PathBuf,
        /// Scroll to this offset (pixels) after load.
        #[arg(long, value_name = "PX")]
        scroll: Option<f64>,
        /// Print the page state as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<ListnavConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output = match cli.command {
            CliCommand::Filter { url, tags, sort } => run_filter(&cfg, &url, tags, sort)?,
            CliCommand::Page { url, page } => run_page(&cfg, &url, page)?,
            CliCommand::Clear { url } => run_clear(&cfg, &url)?,
            CliCommand::Inspect {
                fixture,
                scroll,
                json,
            } => run_inspect(&cfg, &fixture, scroll, json)?,
        };
        println!("{output}");

        Ok(())
    }
}

#[cfg(test)]
mod tests;
