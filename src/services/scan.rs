use crate::models::errors::GameResult;
use crate::models::galaxy::{neighbor_indices, NEIGHBOR_OFFSETS};
use crate::models::game_state::GameState;
use crate::models::star_system::StarSystem;
use crate::ui::surface::DisplaySurface;
use crate::ui::tiles::TileRenderer;

/// Long range sensor readings: the 3x3 block of systems centred on the
/// player's, laid out as on the galaxy grid. Cells off the grid are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongRangeScan {
    pub cells: [[Option<StarSystem>; 3]; 3],
}

impl LongRangeScan {
    /// The system at the centre of the scan.
    pub fn center(&self) -> Option<StarSystem> {
        self.cells[1][1]
    }

    /// The eight surrounding readings in neighbour order.
    pub fn neighbors(&self) -> [Option<StarSystem>; 8] {
        NEIGHBOR_OFFSETS.map(|(d_row, d_col)| {
            self.cells[(1 + d_row) as usize][(1 + d_col) as usize]
        })
    }
}

/// Short Range Sensor Scan: rebuild the current system's sector and draw it.
pub fn short_range_scan(
    state: &mut GameState,
    renderer: &TileRenderer,
    surface: &mut dyn DisplaySurface,
) -> GameResult<()> {
    state.enter_system();
    renderer.render(&state.sector_map, surface)
}

/// Long Range Sensor Scan: read the systems around the player's.
///
/// Neighbours that would fall off the 9x9 grid come back as `None` (no data);
/// the index never wraps around a row or the galaxy. Galaxy state is not
/// touched.
pub fn long_range_scan(state: &GameState) -> LongRangeScan {
    let here = state.player.current_system;
    let mut cells = [[None; 3]; 3];
    cells[1][1] = state.galaxy.system(here).copied();
    for ((d_row, d_col), index) in NEIGHBOR_OFFSETS.iter().zip(neighbor_indices(here)) {
        cells[(1 + d_row) as usize][(1 + d_col) as usize] =
            index.and_then(|i| state.galaxy.system(i)).copied();
    }
    LongRangeScan { cells }
}
