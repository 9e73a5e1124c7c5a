use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::{GALAXY_SYSTEMS, MAX_BASES, MAX_KLINGONS, MAX_PLANETS, MAX_STARS};
use crate::models::star_system::StarSystem;

/// Generate every system of the 9x9 galaxy with bounded-random resource counts.
/// Draws are taken per system in planets, bases, stars, klingons order.
pub fn generate_systems(rng: &mut StdRng) -> [StarSystem; GALAXY_SYSTEMS] {
    let mut systems = [StarSystem::default(); GALAXY_SYSTEMS];
    for system in systems.iter_mut() {
        *system = StarSystem {
            planets: rng.gen_range(0..MAX_PLANETS),
            bases: rng.gen_range(0..MAX_BASES),
            stars: rng.gen_range(0..MAX_STARS),
            klingons: rng.gen_range(0..MAX_KLINGONS),
        };
    }
    systems
}
