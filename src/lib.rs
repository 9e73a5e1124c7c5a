//! Space Battle Game Engine
//!
//! A turn-based space exploration game drawn on a fixed 40x25
//! character screen with a parallel color plane.
//!
//! # Overview
//!
//! Each turn a 9x9 galaxy of star systems is generated, the player's
//! current system is expanded into a 20x20 sector, and the sector, ship
//! vitals and long range scan are drawn before the game waits for a key.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn phase state machine
//! - [`models`] - Domain models (Galaxy, Player, SectorMap, etc.)
//! - [`services`] - Sensor scans and the game driver
//! - [`io`] - Key input abstractions for testing
//! - [`ui`] - Display surface, tile renderer and HUD
//! - [`config`] - Game options
//!
//! # Example
//!
//! ```rust
//! use space_battle::config::GameConfig;
//! use space_battle::io::ScriptedKeys;
//! use space_battle::ui::surface::Screen;
//! use space_battle::{ExitReason, GameEngine};
//!
//! let mut engine = GameEngine::new(&GameConfig::with_seed(42));
//! let mut screen = Screen::new();
//! let reason = engine.run(&mut screen, &mut ScriptedKeys::spaces(2)).unwrap();
//! assert_eq!(reason, ExitReason::InputClosed);
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{ExitReason, GameEngine, Phase};
