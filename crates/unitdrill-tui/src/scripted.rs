//! In-memory surface for tests.

use std::collections::{HashMap, VecDeque};

use anyhow::Result;

use crate::surface::{Color, Key, Style, Surface};

/// A character grid that plays back a fixed key script.
///
/// Reading past the end of the script is an error, which ends any view loop
/// that is still waiting for input.
pub struct ScriptedSurface {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    styles: Vec<Vec<Style>>,
    cursor: (u16, u16),
    cursor_visible: bool,
    colors: HashMap<u8, (Color, Color)>,
    keys: VecDeque<Key>,
    flush_count: usize,
    keys_read: usize,
}

impl ScriptedSurface {
    pub fn new(width: u16, height: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            styles: vec![vec![Style::PLAIN; width as usize]; height as usize],
            cursor: (0, 0),
            cursor_visible: true,
            colors: HashMap::new(),
            keys: keys.into_iter().collect(),
            flush_count: 0,
            keys_read: 0,
        }
    }

    /// Queue more keys at the end of the script.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Queue each character of `text` as a key press.
    pub fn push_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(Key::Char));
    }

    /// Row contents with trailing blanks trimmed.
    pub fn line(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// The whole screen, one trimmed line per row.
    pub fn screen(&self) -> String {
        (0..self.height)
            .map(|row| self.line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, text: &str) -> bool {
        (0..self.height).any(|row| self.line(row).contains(text))
    }

    /// First row containing `text`.
    pub fn find_row(&self, text: &str) -> Option<u16> {
        (0..self.height).find(|&row| self.line(row).contains(text))
    }

    pub fn style_at(&self, row: u16, col: u16) -> Style {
        self.styles
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn color_slot(&self, slot: u8) -> Option<(Color, Color)> {
        self.colors.get(&slot).copied()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Surface for ScriptedSurface {
    fn register_color_slot(&mut self, slot: u8, foreground: Color, background: Color) {
        self.colors.insert(slot, (foreground, background));
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor = (row, col);
        Ok(())
    }

    fn cursor_position(&self) -> (u16, u16) {
        self.cursor
    }

    fn print(&mut self, text: &str, style: Style) -> Result<()> {
        let (row, mut col) = self.cursor;
        for ch in text.chars() {
            if row < self.height && col < self.width {
                self.cells[row as usize][col as usize] = ch;
                self.styles[row as usize][col as usize] = style;
            }
            col = col.saturating_add(1);
        }
        self.cursor = (row, col);
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        let (row, col) = self.cursor;
        if row < self.height {
            for c in col..self.width {
                self.cells[row as usize][c as usize] = ' ';
                self.styles[row as usize][c as usize] = Style::PLAIN;
            }
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        for row in 0..self.height {
            self.cursor = (row, 0);
            self.clear_to_end_of_line()?;
        }
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_count += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("key script exhausted"))?;
        self.keys_read += 1;
        Ok(key)
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printing_clips_at_right_edge() {
        let mut surface = ScriptedSurface::new(5, 1, []);
        surface.print("abcdefgh", Style::PLAIN).unwrap();
        assert_eq!(surface.line(0), "abcde");
        assert_eq!(surface.cursor_position(), (0, 8));
    }

    #[test]
    fn key_script_runs_out() {
        let mut surface = ScriptedSurface::new(5, 1, [Key::Enter]);
        assert_eq!(surface.read_key().unwrap(), Key::Enter);
        assert!(surface.read_key().is_err());
        assert_eq!(surface.keys_read(), 1);
    }

    #[test]
    fn styles_are_recorded() {
        let mut surface = ScriptedSurface::new(5, 1, []);
        surface.print("ab", Style::BOLD).unwrap();
        assert!(surface.style_at(0, 1).bold);
        assert!(!surface.style_at(0, 2).bold);
    }
}
