//! Galaxy model
//!
//! Represents the game universe as a 9x9 row-major grid of star systems,
//! each holding the resource counts that seed its local sector.

mod generation;
mod system_ops;

use rand::rngs::StdRng;

use super::constants::GALAXY_SYSTEMS;
use super::position::SystemCoord;
use super::star_system::StarSystem;

pub use generation::generate_systems;
pub use system_ops::populate_sector;

/// Row/column steps to the eight adjacent systems, in readout order:
/// the row above left to right, then left and right, then the row below.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Indices of the eight systems adjacent to `index`.
///
/// A neighbour that would fall off the 9x9 grid is `None`. Stepping left from
/// the first column or right from the last does not wrap into the adjacent
/// row. An `index` outside the galaxy has no neighbours at all.
pub fn neighbor_indices(index: usize) -> [Option<usize>; 8] {
    if index >= GALAXY_SYSTEMS {
        return [None; 8];
    }
    let here = SystemCoord::from_index(index);
    NEIGHBOR_OFFSETS.map(|(d_row, d_col)| here.offset(d_row, d_col).map(|c| c.index()))
}

/// The 81 star systems for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Galaxy {
    systems: [StarSystem; GALAXY_SYSTEMS],
}

impl Default for Galaxy {
    fn default() -> Self {
        Galaxy {
            systems: [StarSystem::default(); GALAXY_SYSTEMS],
        }
    }
}

impl Galaxy {
    /// Fill a fresh galaxy from the random stream.
    pub fn generate(rng: &mut StdRng) -> Self {
        Galaxy {
            systems: generate_systems(rng),
        }
    }

    pub fn from_systems(systems: [StarSystem; GALAXY_SYSTEMS]) -> Self {
        Galaxy { systems }
    }

    pub fn systems(&self) -> &[StarSystem; GALAXY_SYSTEMS] {
        &self.systems
    }

    /// The system at `index`, or None past the end of the galaxy.
    pub fn system(&self, index: usize) -> Option<&StarSystem> {
        self.systems.get(index)
    }

    pub fn total_klingons(&self) -> usize {
        self.systems.iter().map(|s| s.klingons as usize).sum()
    }

    pub fn total_bases(&self) -> usize {
        self.systems.iter().map(|s| s.bases as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sorted(neighbors: [Option<usize>; 8]) -> Vec<usize> {
        let mut v: Vec<usize> = neighbors.iter().flatten().copied().collect();
        v.sort_unstable();
        v
    }

    // ========== Neighbor arithmetic ==========

    #[test]
    fn interior_system_has_eight_neighbors() {
        assert_eq!(
            sorted(neighbor_indices(40)),
            vec![30, 31, 32, 39, 41, 48, 49, 50]
        );
    }

    #[test]
    fn neighbors_match_raw_offsets_in_the_interior() {
        let n = neighbor_indices(40);
        let raw = [40 - 10, 40 - 9, 40 - 8, 40 - 1, 40 + 1, 40 + 8, 40 + 9, 40 + 10];
        assert_eq!(n, raw.map(Some));
    }

    #[test]
    fn corner_system_reports_unknown_off_grid() {
        let n = neighbor_indices(0);
        assert_eq!(n.iter().filter(|i| i.is_none()).count(), 5);
        assert_eq!(sorted(n), vec![1, 9, 10]);
    }

    #[test]
    fn far_corner_system_reports_unknown_off_grid() {
        assert_eq!(sorted(neighbor_indices(80)), vec![70, 71, 79]);
    }

    #[test]
    fn left_edge_does_not_wrap_to_previous_row() {
        // 36 is row 4, column 0: raw offsets -10, -1 and +8 would land on row ends.
        let n = sorted(neighbor_indices(36));
        assert_eq!(n, vec![27, 28, 37, 45, 46]);
        assert!(!n.contains(&35));
    }

    #[test]
    fn out_of_range_index_has_no_neighbors() {
        assert_eq!(neighbor_indices(81), [None; 8]);
        assert_eq!(neighbor_indices(usize::MAX), [None; 8]);
    }

    // ========== Galaxy accessors ==========

    #[test]
    fn system_lookup_is_bounds_checked() {
        let galaxy = Galaxy::generate(&mut StdRng::seed_from_u64(1));
        assert!(galaxy.system(80).is_some());
        assert!(galaxy.system(81).is_none());
    }

    #[test]
    fn from_systems_keeps_counts() {
        let mut systems = [StarSystem::default(); GALAXY_SYSTEMS];
        systems[31].klingons = 2;
        let galaxy = Galaxy::from_systems(systems);
        assert_eq!(galaxy.system(31).map(|s| s.klingons), Some(2));
        assert_eq!(galaxy.total_klingons(), 2);
    }

    #[test]
    fn totals_sum_all_systems() {
        let galaxy = Galaxy::generate(&mut StdRng::seed_from_u64(42));
        let k: usize = galaxy.systems().iter().map(|s| s.klingons as usize).sum();
        assert_eq!(galaxy.total_klingons(), k);
        assert!(galaxy.total_bases() <= GALAXY_SYSTEMS);
    }
}
