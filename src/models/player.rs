use super::constants::{
    INITIAL_DAMAGE, INITIAL_POWER, INITIAL_SHIELDS, SECTOR_SIZE, STARTING_SYSTEM, STARTING_X,
    STARTING_Y,
};
use super::position::SectorPosition;

/// The player's ship.
///
/// Vitals are bytes, so they are bounded to 0-255 by construction. Nothing in
/// the game changes them after `reset`, and no further clamping is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: SectorPosition,
    /// Index 0-80 into the galaxy.
    pub current_system: usize,
    pub alive: bool,
    pub power: u8,
    pub shields: u8,
    pub damage: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: SectorPosition {
                x: STARTING_X,
                y: STARTING_Y,
            },
            current_system: STARTING_SYSTEM,
            alive: true,
            power: INITIAL_POWER,
            shields: INITIAL_SHIELDS,
            damage: INITIAL_DAMAGE,
        }
    }

    /// Restore the starting vitals and position.
    pub fn reset(&mut self) {
        *self = Player::new();
    }

    /// Pull the position back onto the sector grid.
    pub fn clamp_to_sector(&mut self) {
        self.position.x = self.position.x.min(SECTOR_SIZE - 1);
        self.position.y = self.position.y.min(SECTOR_SIZE - 1);
    }
}
