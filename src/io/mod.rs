//! Input abstractions
//!
//! The game reads exactly one key per turn. `KeySource` lets the loop run
//! against the real terminal or a scripted sequence in tests and headless runs.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::models::errors::{GameError, GameResult};

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Escape, `q` and `Q` end the game; every other key advances the turn.
    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Escape | Key::Char('q') | Key::Char('Q'))
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// Trait for blocking single-key input
pub trait KeySource {
    /// Block until one key is pressed. Returns `InputClosed` once no more
    /// input can arrive.
    fn read_key(&mut self) -> GameResult<Key>;
}

/// Keyboard input from the terminal. Expects raw mode to be enabled.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> GameResult<Key> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    return Ok(key.code.into());
                }
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(GameError::InputClosed)
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// A fixed queue of keys. Reports `InputClosed` once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys: keys.into() }
    }

    /// `count` presses of the space bar.
    pub fn spaces(count: usize) -> Self {
        Self::new(vec![Key::Char(' '); count])
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> GameResult<Key> {
        self.keys.pop_front().ok_or(GameError::InputClosed)
    }
}
