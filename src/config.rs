//! Game configuration

use crate::ui::tiles::Tileset;

/// When the galaxy is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalaxyPolicy {
    /// A fresh galaxy every turn.
    #[default]
    RegenerateEachTurn,
    /// Generated once at start and kept.
    Persistent,
}

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Seed for the random stream; None seeds from the OS.
    pub seed: Option<u64>,
    pub tileset: Tileset,
    pub monochrome: bool,
    pub galaxy_policy: GalaxyPolicy,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        GameConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
