use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform rejection sampling: each mine draws random cells until it lands outside the safe zone on a cell that
/// has no mine yet.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: SmallRng,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinefieldGenerator for RandomGenerator {
    fn generate(&mut self, config: &GameConfig, safe: Coord2) -> Minefield {
        let (rows, cols) = config.size;
        let safe_zone = iter_coords(config.size)
            .filter(|&coords| within_one(coords, safe))
            .count() as CellCount;
        let available = config.total_cells() - safe_zone;

        let mines = if config.mines > available {
            log::warn!(
                "Cannot fit {} mines outside the safe zone, placing {} instead",
                config.mines,
                available
            );
            available
        } else {
            config.mines
        };

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for _ in 0..mines {
            loop {
                let candidate = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
                if within_one(candidate, safe) || mine_mask[candidate.to_nd_index()] {
                    continue;
                }
                mine_mask[candidate.to_nd_index()] = true;
                break;
            }
        }

        let minefield = Minefield::from_mine_mask(&mine_mask);
        if minefield.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                minefield.mine_count(),
                config.mines
            );
        }
        minefield
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mines_near(minefield: &Minefield, center: Coord2) -> usize {
        iter_coords(minefield.size())
            .filter(|&coords| within_one(coords, center) && minefield.contains_mine(coords))
            .count()
    }

    #[test]
    fn places_exact_count_outside_safe_zone() {
        let config = GameConfig::DEFAULT;
        for seed in 0..64 {
            let safe = ((seed % 10) as Coord, (seed / 7 % 10) as Coord);
            let minefield = RandomGenerator::new(seed).generate(&config, safe);

            assert_eq!(minefield.mine_count(), config.mines);
            assert_eq!(mines_near(&minefield, safe), 0);
            assert_eq!(minefield[safe], Truth::Count(0));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::DEFAULT;
        let a = RandomGenerator::new(7).generate(&config, (1, 1));
        let b = RandomGenerator::new(7).generate(&config, (1, 1));

        assert_eq!(a, b);
    }

    #[test]
    fn densest_allowed_board_fills_everything_but_the_safe_zone() {
        let config = GameConfig::new((4, 4), 7).unwrap();
        let minefield = RandomGenerator::new(3).generate(&config, (1, 1));

        assert_eq!(minefield.mine_count(), 7);
        assert_eq!(mines_near(&minefield, (1, 1)), 0);
    }

    #[test]
    fn overfull_unchecked_config_is_clamped() {
        let config = GameConfig::new_unchecked((3, 3), 5);
        let minefield = RandomGenerator::new(0).generate(&config, (1, 1));

        assert_eq!(minefield.mine_count(), 0);
    }
}
