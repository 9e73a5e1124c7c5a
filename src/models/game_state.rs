use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::galaxy::{populate_sector, Galaxy};
use super::player::Player;
use super::sector_map::SectorMap;
use super::star_system::StarSystem;

/// Everything one turn reads and writes: the galaxy, the player, the local
/// sector and the random stream that feeds generation.
pub struct GameState {
    pub galaxy: Galaxy,
    pub player: Player,
    pub sector_map: SectorMap,
    rng: StdRng,
}

impl GameState {
    /// Create a state seeded for reproducible generation.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a state seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        GameState {
            galaxy: Galaxy::default(),
            player: Player::new(),
            sector_map: SectorMap::new(),
            rng,
        }
    }

    /// Replace the galaxy with a freshly generated one.
    pub fn regenerate_galaxy(&mut self) {
        self.galaxy = Galaxy::generate(&mut self.rng);
        debug!(
            "galaxy generated: {} klingons, {} bases",
            self.galaxy.total_klingons(),
            self.galaxy.total_bases()
        );
    }

    /// The system the player is in. An index past the galaxy reads as empty space.
    pub fn current_system(&self) -> StarSystem {
        self.galaxy
            .system(self.player.current_system)
            .copied()
            .unwrap_or_default()
    }

    /// Rebuild the sector map for the player's current system.
    pub fn enter_system(&mut self) {
        let system = self.current_system();
        populate_sector(
            &mut self.sector_map,
            &system,
            self.player.position,
            &mut self.rng,
        );
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GameState")
            .field("player", &self.player)
            .field("klingons", &self.galaxy.total_klingons())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::SectorContent;

    #[test]
    fn new_state_starts_with_default_player() {
        let state = GameState::new(0);
        assert_eq!(state.player, Player::new());
    }

    #[test]
    fn same_seed_generates_same_galaxy() {
        let mut a = GameState::new(5);
        let mut b = GameState::new(5);
        a.regenerate_galaxy();
        b.regenerate_galaxy();
        assert_eq!(a.galaxy, b.galaxy);
    }

    #[test]
    fn enter_system_places_player() {
        let mut state = GameState::new(5);
        state.regenerate_galaxy();
        state.enter_system();
        assert_eq!(
            state.sector_map.get(state.player.position),
            SectorContent::Player
        );
    }

    #[test]
    fn current_system_past_the_galaxy_is_empty_space() {
        let mut state = GameState::new(5);
        state.regenerate_galaxy();
        state.player.current_system = 200;
        assert_eq!(state.current_system(), StarSystem::default());
    }

    #[test]
    fn debug_hides_rng() {
        let state = GameState::new(1);
        let text = format!("{:?}", state);
        assert!(text.starts_with("GameState"));
        assert!(!text.contains("rng"));
    }
}
