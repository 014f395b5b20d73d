//! The `unitdrill play`, `quiz` and `hangman` commands.

use anyhow::{Context, Result};

use unitdrill_core::config::UnitdrillConfig;
use unitdrill_core::hangman::Difficulty;
use unitdrill_tui::{run_app, AppOptions, CrosstermSurface, RunSummary, View};

use super::OutputFormat;

pub struct PlayArgs {
    pub start: View,
    pub seed: Option<u64>,
    /// Overrides `[hangman] difficulty`.
    pub difficulty: Option<Difficulty>,
    pub format: String,
}

pub fn execute(config: &UnitdrillConfig, args: PlayArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let options = AppOptions {
        catalog: config.catalog().context("invalid [quiz] configuration")?,
        word_list: config
            .word_list()
            .context("invalid [hangman] configuration")?,
        difficulty: args.difficulty.unwrap_or(config.hangman.difficulty),
        seed: args.seed.or(config.seed),
        start: args.start,
    };

    tracing::info!(start = ?options.start, seed = ?options.seed, "starting");

    // The terminal is restored when the surface drops, before anything is
    // printed.
    let summary = {
        let mut surface = CrosstermSurface::new()?;
        run_app(&mut surface, &options)?
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print_summary(&summary),
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    use comfy_table::{Cell, Table};

    if !summary.quiz_sessions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Run", "Equations", "Correct", "Accuracy", "Duration"]);

        for (i, session) in summary.quiz_sessions.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(session.equations),
                Cell::new(session.correct_answers),
                Cell::new(
                    session
                        .accuracy_percent
                        .map(|p| format!("{p}%"))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(format!("{}s", session.duration_secs)),
            ]);
        }

        println!("Unit conversion\n{table}");
    }

    if let Some(hangman) = &summary.hangman {
        println!(
            "Word game: {} won of {} played",
            hangman.games_won, hangman.games_played
        );
    }
}
