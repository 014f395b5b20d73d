//! The main menu that picks between the two games.

use anyhow::Result;

use crate::surface::{draw_frame, print_at, print_centered, Color, Key, Style, Surface};
use crate::views::View;

const TITLE_SLOT: u8 = 1;
const MENU_SLOT: u8 = 2;
const MENU_LEFT: u16 = 25;

const TITLE: [&str; 3] = [
    " ┬ ┬┌┐┌┬┌┬┐  ┌┬┐┬─┐┬┬  ┬   ",
    " │ ││││ │ │   ││├┬┘││  │   ",
    " └─┘┘└┘┴ ┴   ─┴┘┴└─┴┴─┘┴─┘ ",
];

const OPTIONS: [(u16, &str, &str); 3] = [
    (10, "A", "Unit conversion"),
    (12, "S", "Something to relax with"),
    (14, "X", "Exit"),
];

/// Show the main menu and wait for a choice. `None` quits.
pub fn run<S: Surface + ?Sized>(surface: &mut S) -> Result<Option<View>> {
    surface.register_color_slot(TITLE_SLOT, Color::Yellow, Color::Black);
    surface.register_color_slot(MENU_SLOT, Color::White, Color::Black);

    draw_frame(surface, draw)?;

    loop {
        match surface.read_key()? {
            Key::Char('a' | 'A') => return Ok(Some(View::UnitQuiz)),
            Key::Char('s' | 'S') => return Ok(Some(View::Hangman)),
            Key::Char('x' | 'X') | Key::Esc | Key::Interrupt => return Ok(None),
            _ => {}
        }
    }
}

fn draw<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
    surface.clear_screen()?;
    surface.set_cursor_visible(false)?;

    let title_style = Style::slot(TITLE_SLOT).reversed();
    for (row, line) in (2..).zip(TITLE) {
        print_centered(surface, row, line, title_style)?;
    }

    for (row, key, description) in OPTIONS {
        print_at(
            surface,
            row,
            MENU_LEFT,
            &format!(" {key} "),
            Style::slot(MENU_SLOT).bold().reversed(),
        )?;
        print_at(surface, row, MENU_LEFT + 5, description, Style::PLAIN)?;
    }

    Ok(())
}
