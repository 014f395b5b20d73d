//! unitdrill CLI — play the quizzes and inspect the configuration.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unitdrill_core::config::load_config_from;
use unitdrill_core::hangman::Difficulty;
use unitdrill_tui::View;

mod commands;

#[derive(Parser)]
#[command(
    name = "unitdrill",
    version,
    about = "Terminal quiz for metric unit conversions"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the main menu
    Play {
        /// Seed for reproducible equations and words
        #[arg(long)]
        seed: Option<u64>,

        /// Summary format after leaving: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Go straight to the unit conversion quiz
    Quiz {
        /// Seed for reproducible equations
        #[arg(long)]
        seed: Option<u64>,

        /// Summary format after leaving: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Go straight to the word game
    Hangman {
        /// Seed for reproducible words
        #[arg(long)]
        seed: Option<u64>,

        /// easy, medium or hard (default from config)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Summary format after leaving: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the units in the configured catalog
    Units {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check the configuration for problems
    Validate,

    /// Create a starter unitdrill.toml
    Init,
}

impl Commands {
    fn is_interactive(&self) -> bool {
        matches!(
            self,
            Commands::Play { .. } | Commands::Quiz { .. } | Commands::Hangman { .. }
        )
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Init = cli.command {
        return commands::init::execute();
    }

    let config = load_config_from(cli.config.as_deref())?;
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    init_tracing(log_file, &config.logging.level, cli.command.is_interactive())?;

    match cli.command {
        Commands::Play { seed, format } => commands::play::execute(
            &config,
            commands::play::PlayArgs {
                start: View::MainMenu,
                seed,
                difficulty: None,
                format,
            },
        ),
        Commands::Quiz { seed, format } => commands::play::execute(
            &config,
            commands::play::PlayArgs {
                start: View::UnitQuiz,
                seed,
                difficulty: None,
                format,
            },
        ),
        Commands::Hangman {
            seed,
            difficulty,
            format,
        } => commands::play::execute(
            &config,
            commands::play::PlayArgs {
                start: View::Hangman,
                seed,
                difficulty,
                format,
            },
        ),
        Commands::Units { format } => commands::units::execute(&config, &format),
        Commands::Validate => commands::validate::execute(&config),
        Commands::Init => commands::init::execute(),
    }
}

/// Logs go to `log_file` when given. Otherwise interactive commands discard
/// them, since the views own the terminal, and the rest log to stderr.
fn init_tracing(log_file: Option<&Path>, level: &str, interactive: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("unitdrill={level}")
            .parse()
            .with_context(|| format!("invalid log level: {level}"))?,
    );

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
