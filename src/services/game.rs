use std::io::Write;

use log::info;

use crate::config::GameConfig;
use crate::game_engine::{ExitReason, GameEngine};
use crate::io::{ScriptedKeys, TerminalKeys};
use crate::models::constants::Color;
use crate::models::errors::GameResult;
use crate::ui::surface::{DisplaySurface, Screen};
use crate::ui::terminal::TerminalSurface;

/// In-memory screen that prints each presented frame as plain text.
struct PrintedScreen<'a> {
    screen: Screen,
    out: &'a mut dyn Write,
    frames: usize,
}

impl DisplaySurface for PrintedScreen<'_> {
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
        self.frames += 1;
        writeln!(self.out, "--- frame {} ---", self.frames)?;
        writeln!(self.out, "{}", self.screen.to_text())?;
        Ok(())
    }
}

pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Game {
            engine: GameEngine::new(config),
        }
    }

    /// Play on the terminal until a quit key or end of input.
    pub fn run(&mut self) -> GameResult<ExitReason> {
        info!("starting interactive game");
        let mut surface = TerminalSurface::enter()?;
        self.engine.run(&mut surface, &mut TerminalKeys)
    }

    /// Render `frames` turns without a terminal, printing each frame to `out`.
    pub fn run_headless(&mut self, frames: usize, out: &mut dyn Write) -> GameResult<ExitReason> {
        info!("starting headless game for {} frames", frames);
        let mut surface = PrintedScreen {
            screen: Screen::new(),
            out,
            frames: 0,
        };
        let mut keys = ScriptedKeys::spaces(frames.saturating_sub(1));
        self.engine.run(&mut surface, &mut keys)
    }
}
