//! Crossterm-backed display surface
//!
//! Frames are composed in an in-memory `Screen` and pushed to the terminal
//! in one batch on `present`.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::models::constants::Color;
use crate::models::errors::GameResult;
use crate::ui::surface::{DisplaySurface, Screen};

fn term_color(color: Color) -> style::Color {
    let (r, g, b) = color.rgb();
    style::Color::Rgb { r, g, b }
}

/// Owns the terminal while the game runs. Dropping it restores the
/// terminal to its normal state.
pub struct TerminalSurface {
    screen: Screen,
    out: Stdout,
}

impl TerminalSurface {
    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter() -> GameResult<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(term_color(Color::Black)),
            Clear(ClearType::All)
        )?;
        Ok(TerminalSurface {
            screen: Screen::new(),
            out,
        })
    }
}

impl DisplaySurface for TerminalSurface {
    fn width(&self) -> usize {
        self.screen.width()
    }

    fn height(&self) -> usize {
        self.screen.height()
    }

    fn write(&mut self, row: usize, col: usize, glyph: char, color: Color) -> GameResult<()> {
        self.screen.write(row, col, glyph, color)
    }

    fn clear(&mut self) {
        self.screen.clear();
    }

    fn present(&mut self) -> GameResult<()> {
        for row in 0..self.screen.height() {
            queue!(self.out, MoveTo(0, row as u16))?;
            let mut current = None;
            for col in 0..self.screen.width() {
                let glyph = self.screen.glyph_at(row, col).unwrap_or(' ');
                let color = self.screen.color_at(row, col).unwrap_or_default();
                if current != Some(color) {
                    queue!(self.out, SetForegroundColor(term_color(color)))?;
                    current = Some(color);
                }
                queue!(self.out, Print(glyph))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
