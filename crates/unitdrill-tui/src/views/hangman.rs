//! The word-guessing game screen.

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

use unitdrill_core::hangman::{Difficulty, GameStatus, HangmanGame, WordList};

use crate::surface::{
    draw_frame, print_at, print_centered, print_line_at, Color, Key, Style, Surface,
};

const TITLE_SLOT: u8 = 1;
const PHRASE_SLOT: u8 = 3;
const WON_SLOT: u8 = 4;
const LOST_SLOT: u8 = 5;
const FIGURE_SLOT: u8 = 6;

const TITLE: &str = " W O R D   G A M E ";
const GALLOWS_TOP: u16 = 4;
const GALLOWS_LEFT: u16 = 6;
const GALLOWS: [&str; 9] = [
    "┌─────┐",
    "│",
    "│",
    "│",
    "│",
    "│",
    "│",
    "│",
    "┴────────",
];
/// Top-left of the figure; the rope hangs from the end of the beam.
const FIGURE_TOP: u16 = GALLOWS_TOP + 1;
const FIGURE_LEFT: u16 = GALLOWS_LEFT + 5;

const TEXT_LEFT: u16 = 24;
const PHRASE_ROW: u16 = 6;
const GUESSED_ROW: u16 = 9;
const MISSES_ROW: u16 = 10;
const BANNER_ROW: u16 = 15;
const HELP_ROW: u16 = 17;

/// Games finished over one visit to the word game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanSummary {
    pub games_played: u32,
    pub games_won: u32,
}

impl HangmanSummary {
    pub fn absorb(&mut self, other: &HangmanSummary) {
        self.games_played += other.games_played;
        self.games_won += other.games_won;
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
            }
            GameStatus::Lost => self.games_played += 1,
            GameStatus::Playing => {}
        }
    }
}

/// Play rounds until Esc or Ctrl-C. Finished games are counted into
/// `summary` as they end, so the count survives an error.
pub fn run<S, R>(
    surface: &mut S,
    rng: &mut R,
    words: &WordList,
    difficulty: Difficulty,
    summary: &mut HangmanSummary,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: Rng,
{
    surface.register_color_slot(TITLE_SLOT, Color::Yellow, Color::Black);
    surface.register_color_slot(PHRASE_SLOT, Color::Cyan, Color::Black);
    surface.register_color_slot(WON_SLOT, Color::Green, Color::Black);
    surface.register_color_slot(LOST_SLOT, Color::Red, Color::Black);
    surface.register_color_slot(FIGURE_SLOT, Color::White, Color::Black);

    loop {
        let mut game = HangmanGame::new(words.random_word(rng), difficulty);
        tracing::debug!(%difficulty, "new word game");

        draw_frame(surface, draw_static)?;

        while game.status() == GameStatus::Playing {
            draw_frame(surface, |s| draw_game(s, &game))?;

            match surface.read_key()? {
                Key::Esc | Key::Interrupt => return Ok(()),
                Key::Char(ch) => {
                    let outcome = game.add_guess(ch);
                    tracing::debug!(?outcome, guess = %ch, "guess");
                }
                _ => {}
            }
        }

        summary.record(game.status());
        tracing::info!(status = ?game.status(), misses = game.misses(), "word game finished");

        draw_frame(surface, |s| {
            draw_game(s, &game)?;
            draw_banner(s, &game)
        })?;

        if matches!(surface.read_key()?, Key::Esc | Key::Interrupt) {
            return Ok(());
        }
    }
}

fn draw_static<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
    surface.clear_screen()?;
    surface.set_cursor_visible(false)?;
    print_centered(surface, 1, TITLE, Style::slot(TITLE_SLOT).reversed())?;

    for (row, line) in (GALLOWS_TOP..).zip(GALLOWS) {
        print_at(surface, row, GALLOWS_LEFT, line, Style::PLAIN)?;
    }

    print_at(
        surface,
        HELP_ROW,
        TEXT_LEFT,
        "Type a letter to guess, Esc to leave",
        Style::PLAIN,
    )
}

fn draw_game<S: Surface + ?Sized>(surface: &mut S, game: &HangmanGame) -> Result<()> {
    for part in game.visible_parts() {
        let (col, row, glyph) = part.glyph();
        print_at(
            surface,
            FIGURE_TOP + row,
            FIGURE_LEFT + col,
            glyph,
            Style::slot(FIGURE_SLOT).bold(),
        )?;
    }

    let spaced: Vec<String> = game.masked_phrase().chars().map(String::from).collect();
    print_line_at(
        surface,
        PHRASE_ROW,
        TEXT_LEFT,
        &spaced.join(" "),
        Style::slot(PHRASE_SLOT).bold(),
    )?;

    print_line_at(
        surface,
        GUESSED_ROW,
        TEXT_LEFT,
        &format!("Guessed: {}", game.guessed_letters()),
        Style::PLAIN,
    )?;
    print_line_at(
        surface,
        MISSES_ROW,
        TEXT_LEFT,
        &format!(
            "Misses:  {} / {}",
            game.misses(),
            game.difficulty().max_misses()
        ),
        Style::PLAIN,
    )?;

    surface.move_cursor(BANNER_ROW, TEXT_LEFT)?;
    surface.clear_to_end_of_line()
}

fn draw_banner<S: Surface + ?Sized>(surface: &mut S, game: &HangmanGame) -> Result<()> {
    match game.status() {
        GameStatus::Won => print_at(
            surface,
            BANNER_ROW,
            TEXT_LEFT,
            " YOU WON! ",
            Style::slot(WON_SLOT).bold().reversed(),
        ),
        GameStatus::Lost => {
            print_at(
                surface,
                BANNER_ROW,
                TEXT_LEFT,
                " YOU LOST! ",
                Style::slot(LOST_SLOT).bold().reversed(),
            )?;
            surface.print(&format!(" The word was {}", game.phrase()), Style::PLAIN)
        }
        GameStatus::Playing => Ok(()),
    }
}
