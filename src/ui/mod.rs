//! User interface and presentation
//!
//! The display surface abstraction and everything that draws on it:
//! the sector tile renderer, the HUD overlay and the terminal backend.

pub mod hud;
pub mod surface;
pub mod terminal;
pub mod tiles;
