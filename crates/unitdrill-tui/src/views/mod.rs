//! Interactive views and the loop that switches between them.

pub mod hangman;
pub mod menu;
pub mod unit_quiz;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use unitdrill_core::hangman::{Difficulty, WordList};
use unitdrill_core::{Catalog, Quiz, Session, SessionSummary};

use crate::surface::Surface;

pub use hangman::HangmanSummary;

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    MainMenu,
    UnitQuiz,
    Hangman,
}

/// Everything the views need to run.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub catalog: Catalog,
    pub word_list: WordList,
    pub difficulty: Difficulty,
    /// Seed for all randomness; entropy when `None`.
    pub seed: Option<u64>,
    /// The first view shown.
    pub start: View,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::metric(),
            word_list: WordList::default(),
            difficulty: Difficulty::default(),
            seed: None,
            start: View::MainMenu,
        }
    }
}

/// What the player did over one application run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// One entry per unit quiz run, in order.
    pub quiz_sessions: Vec<SessionSummary>,
    /// Present once the word game has been opened.
    pub hangman: Option<HangmanSummary>,
}

/// Run views on `surface` until the player quits.
///
/// Starting in a game view skips the main menu entirely: leaving the game
/// ends the run.
pub fn run_app<S: Surface + ?Sized>(surface: &mut S, options: &AppOptions) -> Result<RunSummary> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut summary = RunSummary::default();
    let mut current = Some(options.start);

    while let Some(view) = current {
        tracing::info!(?view, "entering view");

        let next = match view {
            View::MainMenu => menu::run(surface)?,
            View::UnitQuiz => {
                let session_rng = StdRng::seed_from_u64(rng.gen());
                let mut quiz = Quiz::new(Session::with_rng(options.catalog.clone(), session_rng));
                let outcome = unit_quiz::run(surface, &mut quiz);

                let session = quiz.session().summary();
                tracing::info!(
                    equations = session.equations,
                    correct = session.correct_answers,
                    "quiz session finished"
                );
                summary.quiz_sessions.push(session);
                outcome?;
                Some(View::MainMenu)
            }
            View::Hangman => {
                let mut played = HangmanSummary::default();
                let outcome = hangman::run(
                    surface,
                    &mut rng,
                    &options.word_list,
                    options.difficulty,
                    &mut played,
                );
                summary
                    .hangman
                    .get_or_insert_with(HangmanSummary::default)
                    .absorb(&played);
                outcome?;
                Some(View::MainMenu)
            }
        };

        current = match next {
            Some(View::MainMenu) if options.start != View::MainMenu => None,
            other => other,
        };
    }

    tracing::info!(quiz_runs = summary.quiz_sessions.len(), "run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::ScriptedSurface;
    use crate::surface::Key;

    fn options(start: View) -> AppOptions {
        AppOptions {
            seed: Some(3),
            start,
            ..AppOptions::default()
        }
    }

    #[test]
    fn menu_exit_ends_the_run() {
        let mut surface = ScriptedSurface::new(80, 30, [Key::Char('x')]);
        let summary = run_app(&mut surface, &options(View::MainMenu)).unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn each_quiz_entry_is_a_new_session() {
        let mut surface = ScriptedSurface::new(
            80,
            30,
            [
                Key::Char('a'),
                Key::Esc,
                Key::Char('A'),
                Key::Esc,
                Key::Char('X'),
            ],
        );
        let summary = run_app(&mut surface, &options(View::MainMenu)).unwrap();
        assert_eq!(summary.quiz_sessions.len(), 2);
        assert!(summary.hangman.is_none());
    }

    #[test]
    fn direct_start_skips_the_menu() {
        let mut surface = ScriptedSurface::new(80, 30, [Key::Esc]);
        let summary = run_app(&mut surface, &options(View::Hangman)).unwrap();
        assert_eq!(summary.hangman, Some(HangmanSummary::default()));
        assert_eq!(surface.remaining_keys(), 0);
    }

    #[test]
    fn summary_serializes() {
        let summary = RunSummary::default();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["quiz_sessions"], serde_json::json!([]));
        assert!(json["hangman"].is_null());
    }
}
