//! The terminal surface the views draw on.
//!
//! [`Surface`] is small: positioned text in a style, clearing,
//! cursor control and blocking key reads. The crossterm backend implements
//! it for real terminals and [`ScriptedSurface`](crate::scripted::ScriptedSurface)
//! implements it in memory for tests.

use anyhow::Result;

/// Terminal colors available to color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

/// How a piece of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// A slot registered with [`Surface::register_color_slot`].
    pub color_slot: Option<u8>,
    pub bold: bool,
    pub reversed: bool,
    pub underline: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color_slot: None,
        bold: false,
        reversed: false,
        underline: false,
    };

    pub const BOLD: Style = Style {
        bold: true,
        ..Style::PLAIN
    };

    pub const fn slot(color_slot: u8) -> Style {
        Style {
            color_slot: Some(color_slot),
            ..Style::PLAIN
        }
    }

    pub const fn bold(self) -> Style {
        Style { bold: true, ..self }
    }

    pub const fn reversed(self) -> Style {
        Style {
            reversed: true,
            ..self
        }
    }
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Esc,
    /// Ctrl-C; raw mode swallows the signal, so views treat it as "leave".
    Interrupt,
    Char(char),
    Other,
}

/// An exclusively owned drawing target.
///
/// Positions are zero-based `(row, col)`. Printing advances the column by the
/// number of characters printed.
pub trait Surface {
    /// Bind a color pair to a slot number used by [`Style::color_slot`].
    fn register_color_slot(&mut self, slot: u8, foreground: Color, background: Color);

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    fn cursor_position(&self) -> (u16, u16);

    /// Draw `text` at the cursor in the given style, then restore the
    /// default style.
    fn print(&mut self, text: &str, style: Style) -> Result<()>;

    /// Blank everything from the cursor to the end of the line. The cursor
    /// does not move.
    fn clear_to_end_of_line(&mut self) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Push pending output to the screen.
    fn flush(&mut self) -> Result<()>;

    /// Block until a key is pressed.
    fn read_key(&mut self) -> Result<Key>;

    /// `(width, height)` in cells.
    fn size(&self) -> (u16, u16);
}

/// Run `draw`, then flush so the frame appears at once.
pub fn draw_frame<S, F, T>(surface: &mut S, draw: F) -> Result<T>
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> Result<T>,
{
    let value = draw(surface)?;
    surface.flush()?;
    Ok(value)
}

/// Run `draw` and put the cursor back where it was, whether `draw`
/// succeeded or not.
pub fn restore_position<S, F, T>(surface: &mut S, draw: F) -> Result<T>
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> Result<T>,
{
    let (row, col) = surface.cursor_position();
    let result = draw(surface);
    let restored = surface.move_cursor(row, col);
    let value = result?;
    restored?;
    Ok(value)
}

pub fn print_at<S: Surface + ?Sized>(
    surface: &mut S,
    row: u16,
    col: u16,
    text: &str,
    style: Style,
) -> Result<()> {
    surface.move_cursor(row, col)?;
    surface.print(text, style)
}

/// Print `text` horizontally centered on `row`.
pub fn print_centered<S: Surface + ?Sized>(
    surface: &mut S,
    row: u16,
    text: &str,
    style: Style,
) -> Result<()> {
    let (width, _) = surface.size();
    let len = text.chars().count() as u16;
    let col = width.saturating_sub(len) / 2;
    print_at(surface, row, col, text, style)
}

/// Print `text` at `(row, col)` and blank the rest of the line, so a shorter
/// value never leaves characters of a longer one behind.
pub fn print_line_at<S: Surface + ?Sized>(
    surface: &mut S,
    row: u16,
    col: u16,
    text: &str,
    style: Style,
) -> Result<()> {
    print_at(surface, row, col, text, style)?;
    surface.clear_to_end_of_line()
}
