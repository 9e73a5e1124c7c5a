use super::constants::{SectorContent, SECTOR_SIZE};
use super::position::SectorPosition;

/// The 20x20 sector grid for the player's current star system.
/// Rebuilt from scratch every short range scan; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorMap {
    /// Row-major: grid[y][x].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
        }
    }

    /// Get the content at a sector position.
    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        self.grid[pos.y][pos.x]
    }

    /// Set the content at a sector position, replacing whatever is there.
    pub fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[pos.y][pos.x] = content;
    }

    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    /// Iterate all cells as (position, content), row by row.
    pub fn cells(&self) -> impl Iterator<Item = (SectorPosition, SectorContent)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &content)| (SectorPosition { x, y }, content))
        })
    }

    /// Count cells holding the given content.
    pub fn count(&self, content: SectorContent) -> usize {
        self.cells().filter(|&(_, c)| c == content).count()
    }

    /// Count cells holding a planet, base, star or klingon.
    pub fn entity_count(&self) -> usize {
        self.cells().filter(|(_, c)| c.is_entity()).count()
    }
}
