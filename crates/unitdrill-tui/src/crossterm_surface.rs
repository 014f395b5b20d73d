//! Real terminal backend built on crossterm.

use std::collections::HashMap;
use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::surface::{Color, Key, Style, Surface};

/// Raw mode, alternate screen and a hidden cursor for as long as it lives.
///
/// Dropping the guard restores the terminal, including while unwinding from
/// a panic.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter the alternate screen")?;
        tracing::debug!("terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

/// [`Surface`] over the process's stdout.
pub struct CrosstermSurface {
    out: Stdout,
    cursor: (u16, u16),
    size: (u16, u16),
    colors: HashMap<u8, (Color, Color)>,
    // Dropped last; restores the terminal.
    _guard: TerminalGuard,
}

impl CrosstermSurface {
    pub fn new() -> Result<Self> {
        let guard = TerminalGuard::acquire()?;
        let size = terminal::size().context("failed to query terminal size")?;
        Ok(Self {
            out: io::stdout(),
            cursor: (0, 0),
            size,
            colors: HashMap::new(),
            _guard: guard,
        })
    }
}

fn terminal_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    match color {
        Color::Black => C::Black,
        Color::Red => C::Red,
        Color::Green => C::Green,
        Color::Yellow => C::Yellow,
        Color::Blue => C::Blue,
        Color::Magenta => C::Magenta,
        Color::Cyan => C::Cyan,
        Color::White => C::White,
        Color::Grey => C::Grey,
    }
}

fn decode_key(event: KeyEvent) -> Key {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C'))
    {
        return Key::Interrupt;
    }

    match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => Key::Other,
    }
}

impl Surface for CrosstermSurface {
    fn register_color_slot(&mut self, slot: u8, foreground: Color, background: Color) {
        self.colors.insert(slot, (foreground, background));
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        self.cursor = (row, col);
        Ok(())
    }

    fn cursor_position(&self) -> (u16, u16) {
        self.cursor
    }

    fn print(&mut self, text: &str, style: Style) -> Result<()> {
        if let Some((fg, bg)) = style.color_slot.and_then(|slot| self.colors.get(&slot)) {
            queue!(
                self.out,
                SetForegroundColor(terminal_color(*fg)),
                SetBackgroundColor(terminal_color(*bg))
            )?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.reversed {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }

        queue!(self.out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;

        let advance = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.cursor.1 = self.cursor.1.saturating_add(advance);
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            queue!(self.out, Show)?;
        } else {
            queue!(self.out, Hide)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("failed to flush terminal output")
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(decode_key(key));
                }
                Event::Resize(width, height) => {
                    self.size = (width, height);
                }
                _ => {}
            }
        }
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }
}
