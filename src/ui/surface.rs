//! Character display surface
//!
//! A fixed grid of glyph cells with a parallel color plane, addressed
//! `row * width + col` from the top-left corner.

use crate::models::constants::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::models::errors::{GameError, GameResult};

/// Anything the renderer and HUD can draw on.
pub trait DisplaySurface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Write one glyph and its color. Fails with `OutOfBounds` off the grid.
    fn write(&mut self, row: usize, col: usize, glyph: char, color: Color) -> GameResult<()>;

    /// Blank every cell to a space in the default color.
    fn clear(&mut self);

    /// Make the written frame visible. In-memory surfaces have nothing to do.
    fn present(&mut self) -> GameResult<()> {
        Ok(())
    }

    /// Write a string left to right starting at (row, col), one glyph per char.
    fn write_str(&mut self, row: usize, col: usize, text: &str, color: Color) -> GameResult<()> {
        for (i, ch) in text.chars().enumerate() {
            self.write(row, col + i, ch, color)?;
        }
        Ok(())
    }
}

/// In-memory surface with separate glyph and color planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
    colors: Vec<Color>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// A blank 40x25 screen.
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Screen {
            width,
            height,
            glyphs: vec![' '; width * height],
            colors: vec![Color::default(); width * height],
        }
    }

    fn address(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn glyph_at(&self, row: usize, col: usize) -> Option<char> {
        self.address(row, col).map(|a| self.glyphs[a])
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.address(row, col).map(|a| self.colors[a])
    }

    /// The glyphs of one row as a string, or empty past the last row.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = row * self.width;
        self.glyphs[start..start + self.width].iter().collect()
    }

    /// The whole glyph plane, one line per row, trailing blanks trimmed.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|row| self.row_text(row).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DisplaySurface for Screen {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn write(&mut self, row: usize, col: usize, glyph: char, color: Color) -> GameResult<()> {
        let addr = self
            .address(row, col)
            .ok_or(GameError::OutOfBounds { row, col })?;
        self.glyphs[addr] = glyph;
        self.colors[addr] = color;
        Ok(())
    }

    fn clear(&mut self) {
        self.glyphs.fill(' ');
        self.colors.fill(Color::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_screen_is_blank_40_by_25() {
        let screen = Screen::new();
        assert_eq!(screen.width(), 40);
        assert_eq!(screen.height(), 25);
        assert_eq!(screen.glyph_at(24, 39), Some(' '));
        assert_eq!(screen.color_at(0, 0), Some(Color::White));
    }

    #[test]
    fn write_sets_both_planes() {
        let mut screen = Screen::new();
        screen.write(3, 7, 'k', Color::LightRed).unwrap();
        assert_eq!(screen.glyph_at(3, 7), Some('k'));
        assert_eq!(screen.color_at(3, 7), Some(Color::LightRed));
        assert_eq!(screen.glyphs[3 * 40 + 7], 'k');
    }

    #[test]
    fn write_out_of_bounds_is_an_error() {
        let mut screen = Screen::new();
        let err = screen.write(25, 0, 'x', Color::White).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { row: 25, col: 0 }));
        assert!(screen.write(0, 40, 'x', Color::White).is_err());
    }

    #[test]
    fn write_str_stops_at_the_edge() {
        let mut screen = Screen::new();
        assert!(screen.write_str(0, 37, "abcd", Color::White).is_err());
        // Cells before the overflow were still written.
        assert_eq!(screen.glyph_at(0, 39), Some('c'));
    }

    #[test]
    fn clear_resets_everything() {
        let mut screen = Screen::new();
        screen.write_str(5, 2, "hello", Color::Yellow).unwrap();
        screen.clear();
        assert_eq!(screen, Screen::new());
    }

    #[test]
    fn to_text_trims_rows() {
        let mut screen = Screen::with_size(4, 2);
        screen.write_str(1, 0, "ab", Color::White).unwrap();
        assert_eq!(screen.to_text(), "\nab");
        assert_eq!(screen.row_text(1), "ab  ");
        assert_eq!(screen.row_text(2), "");
    }
}
