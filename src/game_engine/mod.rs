//! Game state machine
//!
//! Drives one turn at a time: generate the galaxy, place the player, draw
//! the sector and HUD, then block for a key. The loop only ends on a quit
//! key or when input runs out.

use log::{info, trace};

use crate::config::{GalaxyPolicy, GameConfig};
use crate::io::KeySource;
use crate::models::errors::{GameError, GameResult};
use crate::models::game_state::GameState;
use crate::services::scan;
use crate::ui::hud;
use crate::ui::surface::DisplaySurface;
use crate::ui::tiles::TileRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    GenerateGalaxy,
    PlacePlayer,
    RenderSector,
    RenderHud,
    AwaitInput,
    Exited(ExitReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    QuitKey,
    InputClosed,
}

/// Core game engine that owns the game state and steps through the turn phases
pub struct GameEngine {
    state: GameState,
    phase: Phase,
    renderer: TileRenderer,
    galaxy_policy: GalaxyPolicy,
    galaxy_ready: bool,
    turns: u64,
}

impl GameEngine {
    /// Creates a new engine in the `Init` phase
    pub fn new(config: &GameConfig) -> Self {
        let state = match config.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        Self {
            state,
            phase: Phase::Init,
            renderer: TileRenderer::new(config.tileset, config.monochrome),
            galaxy_policy: config.galaxy_policy,
            galaxy_ready: false,
            turns: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed turns (keys accepted without quitting).
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Run the current phase and move to the next one.
    ///
    /// Only `AwaitInput` blocks. Once `Exited`, further steps do nothing.
    pub fn step(
        &mut self,
        surface: &mut dyn DisplaySurface,
        keys: &mut dyn KeySource,
    ) -> GameResult<Phase> {
        let next = match self.phase {
            Phase::Init => {
                self.state.player.reset();
                Phase::GenerateGalaxy
            }
            Phase::GenerateGalaxy => {
                if self.galaxy_policy == GalaxyPolicy::RegenerateEachTurn || !self.galaxy_ready {
                    self.state.regenerate_galaxy();
                    self.galaxy_ready = true;
                }
                Phase::PlacePlayer
            }
            Phase::PlacePlayer => {
                self.state.player.clamp_to_sector();
                Phase::RenderSector
            }
            Phase::RenderSector => {
                surface.clear();
                scan::short_range_scan(&mut self.state, &self.renderer, surface)?;
                Phase::RenderHud
            }
            Phase::RenderHud => {
                let lrs = scan::long_range_scan(&self.state);
                hud::render_hud(&self.state.player, &lrs, surface)?;
                surface.present()?;
                Phase::AwaitInput
            }
            Phase::AwaitInput => match keys.read_key() {
                Ok(key) if key.is_quit() => Phase::Exited(ExitReason::QuitKey),
                Ok(_) => {
                    self.turns += 1;
                    Phase::GenerateGalaxy
                }
                Err(GameError::InputClosed) => Phase::Exited(ExitReason::InputClosed),
                Err(e) => return Err(e),
            },
            Phase::Exited(reason) => Phase::Exited(reason),
        };
        trace!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
        Ok(next)
    }

    /// Step until the game exits.
    pub fn run(
        &mut self,
        surface: &mut dyn DisplaySurface,
        keys: &mut dyn KeySource,
    ) -> GameResult<ExitReason> {
        loop {
            if let Phase::Exited(reason) = self.step(surface, keys)? {
                info!("game over after {} turns: {:?}", self.turns, reason);
                return Ok(reason);
            }
        }
    }
}
