use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::{SectorContent, DEBRIS_ODDS, SECTOR_SIZE};
use crate::models::position::SectorPosition;
use crate::models::sector_map::SectorMap;
use crate::models::star_system::StarSystem;

/// Rebuild the sector map for a star system.
///
/// Debris is scattered first, then planets, bases, stars and klingons are each
/// dropped on a random cell, then the player. Placement never checks whether a
/// cell is taken: a later write replaces an earlier one, so fewer entities may
/// be visible than the system lists. The player is written last and is always
/// visible at `player`.
pub fn populate_sector(
    sector_map: &mut SectorMap,
    system: &StarSystem,
    player: SectorPosition,
    rng: &mut StdRng,
) {
    *sector_map = SectorMap::new();

    for y in 0..SECTOR_SIZE {
        for x in 0..SECTOR_SIZE {
            if rng.gen_range(0..DEBRIS_ODDS) == 1 {
                sector_map.set(SectorPosition { x, y }, SectorContent::Debris);
            }
        }
    }

    let placements = [
        (SectorContent::Planet, system.planets),
        (SectorContent::Base, system.bases),
        (SectorContent::Star, system.stars),
        (SectorContent::Klingon, system.klingons),
    ];
    for (content, count) in placements {
        for _ in 0..count {
            let pos = random_sector(rng);
            sector_map.set(pos, content);
        }
    }

    sector_map.set(player, SectorContent::Player);

    debug!(
        "sector populated: {} entities requested, {} visible",
        system.entity_count(),
        sector_map.entity_count()
    );
}

fn random_sector(rng: &mut StdRng) -> SectorPosition {
    SectorPosition {
        x: rng.gen_range(0..SECTOR_SIZE),
        y: rng.gen_range(0..SECTOR_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const CENTER: SectorPosition = SectorPosition { x: 10, y: 10 };

    fn busy_system() -> StarSystem {
        StarSystem { planets: 8, bases: 1, stars: 1, klingons: 2 }
    }

    #[test]
    fn player_is_always_visible() {
        for seed in 0..50 {
            let mut map = SectorMap::new();
            let mut rng = StdRng::seed_from_u64(seed);
            populate_sector(&mut map, &busy_system(), CENTER, &mut rng);
            assert_eq!(map.get(CENTER), SectorContent::Player, "seed {}", seed);
            assert_eq!(map.count(SectorContent::Player), 1);
        }
    }

    #[test]
    fn visible_entities_never_exceed_requested() {
        for seed in 0..50 {
            let mut map = SectorMap::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let system = busy_system();
            populate_sector(&mut map, &system, CENTER, &mut rng);
            assert!(map.entity_count() <= system.entity_count());
            assert!(map.count(SectorContent::Planet) <= system.planets as usize);
            assert!(map.count(SectorContent::Klingon) <= system.klingons as usize);
        }
    }

    #[test]
    fn empty_system_holds_only_debris_and_player() {
        let mut map = SectorMap::new();
        let mut rng = StdRng::seed_from_u64(3);
        populate_sector(&mut map, &StarSystem::default(), CENTER, &mut rng);
        assert_eq!(map.entity_count(), 0);
        let accounted = map.count(SectorContent::Empty)
            + map.count(SectorContent::Debris)
            + map.count(SectorContent::Player);
        assert_eq!(accounted, SECTOR_SIZE * SECTOR_SIZE);
    }

    #[test]
    fn repopulating_discards_the_previous_sector() {
        let mut map = SectorMap::new();
        let mut rng = StdRng::seed_from_u64(9);
        populate_sector(&mut map, &busy_system(), CENTER, &mut rng);
        let corner = SectorPosition { x: 0, y: 0 };
        populate_sector(&mut map, &StarSystem::default(), corner, &mut rng);
        assert_eq!(map.entity_count(), 0);
        assert_eq!(map.get(corner), SectorContent::Player);
        assert_ne!(map.get(CENTER), SectorContent::Player);
    }

    #[test]
    fn same_seed_same_sector() {
        let mut a = SectorMap::new();
        let mut b = SectorMap::new();
        populate_sector(&mut a, &busy_system(), CENTER, &mut StdRng::seed_from_u64(11));
        populate_sector(&mut b, &busy_system(), CENTER, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
