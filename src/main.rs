//! memeplot CLI
//!
//! Usage:
//!   memeplot list <FAMILY>
//!   memeplot position <NAME> [--size S [S]] [--margin M [M]]
//!   memeplot background <NAME>
//!   memeplot inset [--config <FILE>]
//!   memeplot theme [--theme <FILE>]
//!
//! Resolved records are printed as TOML. Set `MEMEPLOT_LOG=debug` for
//! diagnostics on stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use memeplot::template::{DEFAULT_MARGIN, DEFAULT_SIZE};
use memeplot::theme::ThemeError;
use memeplot::{
    list_templates, resolve_background, resolve_inset, resolve_position, ConfigError,
    InsetConfig, InsetTheme, TemplateError,
};

#[derive(Parser)]
#[command(name = "memeplot")]
#[command(about = "Layout templates for plots overlaid on meme images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the template names of a family (position or background)
    List { family: String },

    /// Resolve a position template to a layout record
    Position {
        name: String,

        /// Inset size: one value for both axes, or width and height
        #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = [DEFAULT_SIZE])]
        size: Vec<f64>,

        /// Edge margin: one value for both axes, or x and y
        #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = [DEFAULT_MARGIN])]
        margin: Vec<f64>,
    },

    /// Resolve a background template to a panel style
    Background { name: String },

    /// Resolve a full inset from a TOML configuration
    Inset {
        /// Inset configuration file (TOML format)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the inset plot theme
    Theme {
        /// Theme override file (TOML format)
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("failed to format output: {0}")]
    Output(#[from] toml::ser::Error),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("MEMEPLOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::List { family } => {
            let names = list_templates(&family)?;
            Ok(names.iter().map(|name| format!("{}\n", name)).collect())
        }
        Command::Position { name, size, margin } => {
            to_toml(&resolve_position(&name, &size, &margin)?)
        }
        Command::Background { name } => to_toml(&resolve_background(&name)?),
        Command::Inset { config } => {
            let config = match config {
                Some(path) => InsetConfig::from_file(&path)?,
                None => InsetConfig::default(),
            };
            to_toml(&resolve_inset(&config)?)
        }
        Command::Theme { theme } => {
            let theme = match theme {
                Some(path) => InsetTheme::from_file(&path)?,
                None => InsetTheme::default(),
            };
            to_toml(&theme)
        }
    }
}

fn to_toml<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(toml::to_string(value)?)
}
