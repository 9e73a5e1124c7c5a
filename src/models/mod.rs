//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod position;
pub mod player;
pub mod star_system;
pub mod sector_map;
pub mod galaxy;
pub mod game_state;
pub mod errors;
