mod board;
mod config;
mod data;
mod html;
mod manager;
mod model;
mod render;
mod stats;
mod utils;

use crate::manager::Manager;
use crate::render::Format;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Roster file (TOML); the built-in roster is used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Display configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the full dashboard once.
    Report {
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read search terms from stdin and re-render the roster table after each.
    Browse,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(args.data.as_deref(), args.config.as_deref())
        .context("failed to construct mgr")?;

    match args.command {
        Command::Report {
            search,
            format,
            out,
        } => mgr.write_report(&search, format, out.as_deref(), io::stdout().lock())?,
        Command::Browse => mgr.browse(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
