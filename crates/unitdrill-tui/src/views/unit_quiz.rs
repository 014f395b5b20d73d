//! The unit-conversion quiz screen.
//!
//! The screen is a legend of unit prefixes followed by a three-row menu: the
//! equation being answered, "Show answer" and "Exit". Each loop iteration
//! redraws the menu, reads one key and feeds it to [`Quiz`]. Outcomes that
//! need the player's attention are shown as a banner that stays until the
//! next key press.

use anyhow::Result;
use rand::Rng;

use unitdrill_core::{Catalog, MenuOption, Quiz, QuizInput, Transition};

use crate::surface::{
    draw_frame, print_at, print_centered, print_line_at, restore_position, Color, Key, Style,
    Surface,
};

const TITLE_SLOT: u8 = 1;
const INPUT_SLOT: u8 = 3;
const CORRECT_SLOT: u8 = 4;
const WRONG_SLOT: u8 = 5;
const STATISTICS_SLOT: u8 = 6;

const TITLE: &str = " U N I T   C O N V E R S I O N ";
const LEGEND_TOP: u16 = 4;
const LEGEND_LEFT: u16 = 3;
/// Minimum legend box interior; the box grows for long names or scales.
const LEGEND_INNER_WIDTH: usize = 24;
const LEGEND_NAME_WIDTH: usize = 2;

/// Indent of the menu text, leaving room for the selection marker.
const OPTION_INDENT: u16 = 5;
/// Where the cursor rests when a non-input row is selected.
const ANSWER_COL: u16 = 24;
const MARKER: &str = " → ";
const SEPARATOR: &str = "--------------------------";

/// Row positions, fixed once the legend has been drawn.
#[derive(Debug, Clone, Copy)]
struct Layout {
    top: u16,
    left: u16,
}

impl Layout {
    fn below_legend(legend_bottom: u16) -> Self {
        Self {
            top: legend_bottom + 3,
            left: LEGEND_LEFT,
        }
    }

    fn option_row(&self, option: MenuOption) -> u16 {
        match option {
            MenuOption::EnterEquation => self.top + 4,
            MenuOption::ShowResult => self.top + 6,
            MenuOption::Exit => self.top + 7,
        }
    }

    fn option_col(&self) -> u16 {
        self.left + OPTION_INDENT
    }

    fn statistics_row(&self) -> u16 {
        self.option_row(MenuOption::Exit) + 2
    }
}

/// Run the quiz until the player picks "Exit" or presses Esc / Ctrl-C.
pub fn run<S, R>(surface: &mut S, quiz: &mut Quiz<R>) -> Result<()>
where
    S: Surface + ?Sized,
    R: Rng,
{
    surface.register_color_slot(TITLE_SLOT, Color::Yellow, Color::Black);
    surface.register_color_slot(INPUT_SLOT, Color::Cyan, Color::Black);
    surface.register_color_slot(CORRECT_SLOT, Color::Green, Color::Black);
    surface.register_color_slot(WRONG_SLOT, Color::Red, Color::Black);
    surface.register_color_slot(STATISTICS_SLOT, Color::Grey, Color::Black);

    let layout = draw_frame(surface, |s| draw_legend(s, quiz.session().catalog()))?;

    loop {
        draw_frame(surface, |s| draw_menu(s, &layout, quiz))?;

        let input = match surface.read_key()? {
            Key::Esc | Key::Interrupt => break,
            key => quiz_input(key),
        };

        match quiz.handle_input(input) {
            Transition::Continue => {}
            Transition::Exit => break,
            shown => {
                let dismissed_with = show_banner(surface, quiz, shown)?;
                quiz.acknowledge();
                if dismissed_with == Key::Interrupt {
                    break;
                }
            }
        }
    }

    surface.set_cursor_visible(false)?;
    Ok(())
}

fn quiz_input(key: Key) -> QuizInput {
    match key {
        Key::Up => QuizInput::Up,
        Key::Down => QuizInput::Down,
        Key::Enter => QuizInput::Confirm,
        Key::Backspace => QuizInput::Backspace,
        Key::Char(ch) => QuizInput::Char(ch),
        _ => QuizInput::Ignored,
    }
}

/// Clear the screen, draw the title and the legend box, and return where the
/// menu goes.
fn draw_legend<S: Surface + ?Sized>(surface: &mut S, catalog: &Catalog) -> Result<Layout> {
    surface.clear_screen()?;
    print_centered(surface, 2, TITLE, Style::slot(TITLE_SLOT).reversed())?;

    let entries: Vec<(&str, String)> = catalog
        .legend()
        .map(|unit| (unit.name(), unit.scale().to_string()))
        .collect();
    let name_width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(LEGEND_NAME_WIDTH);
    let scale_width = entries.iter().map(|(_, scale)| scale.len()).max().unwrap_or(0);
    // Inner columns: padding, name, gap, scale, padding.
    let inner_width = LEGEND_INNER_WIDTH.max(2 + name_width + 2 + scale_width + 2);
    let name_col = LEGEND_LEFT + 3;
    let scale_col = name_col + u16::try_from(name_width + 2).unwrap_or(u16::MAX);

    let border = "─".repeat(inner_width);
    let blank = " ".repeat(inner_width);
    let mut row = LEGEND_TOP;

    print_at(surface, row, LEGEND_LEFT, &format!("┌{border}┐"), Style::PLAIN)?;
    row += 1;

    for (name, scale) in &entries {
        print_at(surface, row, LEGEND_LEFT, &format!("│{blank}│"), Style::PLAIN)?;
        print_at(surface, row, name_col, name, Style::BOLD)?;
        print_at(surface, row, scale_col, scale, Style::PLAIN)?;
        row += 1;
    }

    print_at(surface, row, LEGEND_LEFT, &format!("└{border}┘"), Style::PLAIN)?;

    Ok(Layout::below_legend(row))
}

fn draw_menu<S, R>(surface: &mut S, layout: &Layout, quiz: &Quiz<R>) -> Result<()>
where
    S: Surface + ?Sized,
    R: Rng,
{
    let left = layout.left;
    let col = layout.option_col();

    print_at(surface, layout.top, left, "↓↑ Move between options", Style::PLAIN)?;
    print_at(surface, layout.top + 2, left, SEPARATOR, Style::PLAIN)?;

    let input_end = draw_equation(surface, layout, quiz)?;

    print_at(
        surface,
        layout.option_row(MenuOption::ShowResult),
        col,
        "Show answer",
        Style::PLAIN,
    )?;
    print_at(surface, layout.option_row(MenuOption::Exit), col, "Exit", Style::PLAIN)?;

    for option in MenuOption::ALL {
        print_at(surface, layout.option_row(option), left, "   ", Style::PLAIN)?;
    }
    print_at(
        surface,
        layout.option_row(quiz.selected()),
        left,
        MARKER,
        Style::BOLD.reversed(),
    )?;

    draw_statistics(surface, layout, quiz)?;

    if quiz.selected() == MenuOption::EnterEquation {
        surface.move_cursor(layout.option_row(MenuOption::EnterEquation), input_end)?;
        surface.set_cursor_visible(true)
    } else {
        surface.move_cursor(layout.option_row(quiz.selected()), ANSWER_COL)?;
        surface.set_cursor_visible(false)
    }
}

/// Draw `quantity unit → unit = input` and return the column after the input.
fn draw_equation<S, R>(surface: &mut S, layout: &Layout, quiz: &Quiz<R>) -> Result<u16>
where
    S: Surface + ?Sized,
    R: Rng,
{
    let equation = quiz.equation();
    let measure = equation.measure();

    print_at(
        surface,
        layout.option_row(MenuOption::EnterEquation),
        layout.option_col(),
        &equation.quantity().to_string(),
        Style::BOLD,
    )?;
    surface.print(
        &format!(
            " {} → {} = ",
            equation.from_unit().symbol(measure),
            equation.to_unit().symbol(measure)
        ),
        Style::PLAIN,
    )?;
    surface.print(equation.input(), Style::slot(INPUT_SLOT).reversed())?;

    let (_, input_end) = surface.cursor_position();
    surface.clear_to_end_of_line()?;
    Ok(input_end)
}

fn draw_statistics<S, R>(surface: &mut S, layout: &Layout, quiz: &Quiz<R>) -> Result<()>
where
    S: Surface + ?Sized,
    R: Rng,
{
    let session = quiz.session();
    let style = Style::slot(STATISTICS_SLOT);
    let row = layout.statistics_row();

    print_at(surface, row, layout.left, &format!("{SEPARATOR}-"), style)?;

    let equations = format!("Equations: {}", session.completed_equations());
    print_line_at(surface, row + 2, layout.left, &equations, style)?;

    let mut correct = format!("Correct:   {}", session.correct_answers());
    if let Some(percent) = session.accuracy_percent() {
        correct.push_str(&format!(" ({percent}%)"));
    }
    print_line_at(surface, row + 3, layout.left, &correct, style)
}

/// Draw the banner for `shown` at the cursor, wait for a key, then erase it.
/// Returns the key that dismissed the banner.
fn show_banner<S, R>(surface: &mut S, quiz: &Quiz<R>, shown: Transition) -> Result<Key>
where
    S: Surface + ?Sized,
    R: Rng,
{
    let equation = quiz.equation();

    draw_frame(surface, |s| {
        restore_position(s, |s| match shown {
            Transition::Valid => {
                s.set_cursor_visible(false)?;
                s.print(" ", Style::PLAIN)?;
                s.print(" BRAVO! ", Style::slot(CORRECT_SLOT).bold().reversed())?;
                let message = match equation.attempts() {
                    1 => " Got it on the first try!".to_string(),
                    n => format!(" Got it in {n} attempts"),
                };
                s.print(&message, Style::PLAIN)
            }
            Transition::Wrong => {
                s.set_cursor_visible(false)?;
                s.print(" ", Style::PLAIN)?;
                s.print(" Wrong! ", Style::slot(WRONG_SLOT).bold().reversed())
            }
            Transition::ShowResult => {
                let answer = format!(
                    "{} {}",
                    equation.solution(),
                    equation.to_unit().symbol(equation.measure())
                );
                s.print(&answer, Style::slot(INPUT_SLOT).reversed())
            }
            Transition::Continue | Transition::Exit => Ok(()),
        })
    })?;

    let key = surface.read_key()?;
    surface.clear_to_end_of_line()?;
    tracing::debug!(?shown, "banner dismissed");
    Ok(key)
}
