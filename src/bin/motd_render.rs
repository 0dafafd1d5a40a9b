//! MOTD Renderer
//!
//! Renders formatting codes and status payloads from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Format a line
//! motd-render format '§6Welcome §lhome'
//!
//! # Format stdin line by line, printing fragments as JSON
//! printf '§aone\n§btwo\n' | motd-render format --json
//!
//! # Render a status payload with its roster
//! curl -s https://api.mcsrvstat.us/2/example.org | motd-render status --roster
//! ```

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use motd_render::app::{Config, ConfigError};
use motd_render::render::fragments;
use motd_render::status::{roster, PlayerEntry, ServerStatus, StatusView};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "motd-render")]
#[command(version)]
#[command(about = "Render game server MOTD formatting codes as HTML", long_about = None)]
struct Args {
    /// Configuration file (defaults to ~/.config/motd-render/config.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format text with formatting codes (stdin, line by line, if no TEXT)
    Format {
        text: Option<String>,
        /// Print the visible text without formatting
        #[arg(long, conflicts_with = "json")]
        plain: bool,
        /// Print fragments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a status API payload as JSON
    Status {
        /// Payload file (stdin if not specified)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Include the player roster
        #[arg(long)]
        roster: bool,
    },
}

/// Command-line error
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Serialize)]
struct StatusOutput {
    view: StatusView,
    #[serde(skip_serializing_if = "Option::is_none")]
    roster: Option<Vec<PlayerEntry>>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Format { text, plain, json } => {
            let render = |line: &str| -> Result<String, CliError> {
                Ok(if plain {
                    motd_render::plain_text(line)
                } else if json {
                    serde_json::to_string(&fragments(line))?
                } else {
                    motd_render::format(line)
                })
            };
            match text {
                Some(text) => writeln!(out, "{}", render(&text)?)?,
                None => {
                    for line in io::stdin().lock().lines() {
                        writeln!(out, "{}", render(&line?)?)?;
                    }
                }
            }
        }
        Command::Status { file, roster: with_roster } => {
            let input = match &file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let output = match ServerStatus::from_json(&input) {
                Ok(status) => StatusOutput {
                    view: StatusView::from_status(&status, &config.motd),
                    roster: with_roster.then(|| roster(&status, &config.roster)),
                },
                Err(e) => {
                    tracing::warn!("unusable status payload: {}", e);
                    StatusOutput {
                        view: StatusView::Unavailable,
                        roster: with_roster.then(Vec::new),
                    }
                }
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
