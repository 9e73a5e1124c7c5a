use super::constants::GALAXY_WIDTH;

/// A position within the 20x20 sector grid.
/// Values range 0-19. X is the column, Y is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorPosition {
    pub x: usize,
    pub y: usize,
}

/// A system's coordinates on the 9x9 galaxy grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCoord {
    pub row: usize,
    pub col: usize,
}

impl SystemCoord {
    pub fn from_index(index: usize) -> Self {
        SystemCoord {
            row: index / GALAXY_WIDTH,
            col: index % GALAXY_WIDTH,
        }
    }

    pub fn index(&self) -> usize {
        self.row * GALAXY_WIDTH + self.col
    }

    /// Step by a row/column delta, or None when that leaves the grid.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<SystemCoord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < GALAXY_WIDTH && col < GALAXY_WIDTH {
            Some(SystemCoord { row, col })
        } else {
            None
        }
    }
}
