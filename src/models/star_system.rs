/// Resource counts for a single star system in the galaxy.
/// Stores only counts; sector positions are rebuilt on every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarSystem {
    pub planets: u8,
    pub bases: u8,
    pub stars: u8,
    pub klingons: u8,
}

impl StarSystem {
    /// Long range sensor readout: `klingons:bases:stars`.
    pub fn readout(&self) -> String {
        format!("{}:{}:{}", self.klingons, self.bases, self.stars)
    }

    /// Number of entities the local sector generator will place.
    pub fn entity_count(&self) -> usize {
        [self.planets, self.bases, self.stars, self.klingons]
            .iter()
            .map(|&n| n as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_orders_klingons_bases_stars() {
        let s = StarSystem { planets: 5, bases: 1, stars: 0, klingons: 2 };
        assert_eq!(s.readout(), "2:1:0");
        assert_eq!(s.entity_count(), 8);
    }
}
