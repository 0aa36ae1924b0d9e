use super::*;

/// Draw budget per cell before falling back to probing.
const DRAWS_PER_CELL: CellCount = 16;

/// Uniform rejection sampling over the whole grid, only the seed cell is kept free.
///
/// Every draw is an index in `0..size`. Draws landing on the seed or on an existing hazard are
/// redrawn. The number of draws is bounded: once the budget is spent, a draw that lands on a taken
/// cell probes forward (wrapping) to the next free one instead of being redrawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomPlacer {
    draws_per_cell: CellCount,
}

impl RandomPlacer {
    pub const fn new() -> Self {
        Self {
            draws_per_cell: DRAWS_PER_CELL,
        }
    }

    pub const fn with_draws_per_cell(draws_per_cell: CellCount) -> Self {
        Self { draws_per_cell }
    }
}

impl Default for RandomPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl HazardPlacer for RandomPlacer {
    fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        seed: Coord2,
        hazards: CellCount,
        rng: &mut R,
    ) -> Result<()> {
        let seed = grid.validate_coords(seed)?;
        self.validate(grid, hazards)?;
        let total_cells = grid.size();

        let seed_index = grid.index_of(seed);
        let mut budget = total_cells.saturating_mul(self.draws_per_cell);
        let mut remaining = hazards;

        while remaining > 0 {
            let mut index = rng.random_range(0..total_cells);
            if budget > 0 {
                budget -= 1;
                if budget == 0 {
                    log::warn!(
                        "Draw budget spent with {} hazards left, probing for free cells",
                        remaining
                    );
                }
            } else {
                index = next_free(grid, index, seed_index)?;
            }

            if index == seed_index {
                continue;
            }
            let coords = grid.coords_of(index);
            if grid[coords].is_hazard {
                continue;
            }

            mark_hazard(grid, coords);
            remaining -= 1;
        }

        log::debug!("Placed {} hazards around seed {:?}", hazards, seed);
        log_layout(grid);
        Ok(())
    }
}

/// First index at or after `start` (wrapping) that is neither the seed nor a hazard.
fn next_free(grid: &Grid, start: CellCount, seed_index: CellCount) -> Result<CellCount> {
    let total_cells = grid.size();
    // widened so start + offset cannot overflow on grids past 2^31 cells
    let wrap = |offset: CellCount| {
        let index = (u64::from(start) + u64::from(offset)) % u64::from(total_cells);
        index as CellCount
    };
    (0..total_cells)
        .map(wrap)
        .find(|&index| index != seed_index && !grid[grid.coords_of(index)].is_hazard)
        .ok_or(GameError::InvalidConfiguration)
}

#[cfg(test)]
mod tests {
    use super::super::tests::assert_counts_consistent;
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn grid(size: Coord2, hazards: CellCount) -> Grid {
        Grid::new(GameConfig::new(size, hazards).unwrap()).unwrap()
    }

    #[test]
    fn places_exact_count_and_spares_seed() {
        for seed in 0..64 {
            let mut grid = grid((9, 9), 10);
            let mut rng = SmallRng::seed_from_u64(seed);
            let start = ((seed % 9) as Coord, (seed / 9 % 9) as Coord);

            RandomPlacer::new()
                .place(&mut grid, start, 10, &mut rng)
                .unwrap();

            assert_eq!(grid.placed_hazards(), 10);
            assert!(!grid[start].is_hazard);
            assert_counts_consistent(&grid);
        }
    }

    #[test]
    fn fills_everything_but_the_seed() {
        let mut grid = grid((4, 4), 15);
        let mut rng = SmallRng::seed_from_u64(7);

        RandomPlacer::new()
            .place(&mut grid, (2, 1), 15, &mut rng)
            .unwrap();

        assert_eq!(grid.placed_hazards(), 15);
        assert!(!grid[(2, 1)].is_hazard);
        assert_eq!(grid[(2, 1)].neighbor_hazards, 8);
    }

    #[test]
    fn probing_fallback_still_places_all() {
        let mut grid = grid((5, 5), 24);
        let mut rng = SmallRng::seed_from_u64(3);

        RandomPlacer::with_draws_per_cell(0)
            .place(&mut grid, (0, 0), 24, &mut rng)
            .unwrap();

        assert_eq!(grid.placed_hazards(), 24);
        assert!(!grid[(0, 0)].is_hazard);
        assert_counts_consistent(&grid);
    }

    #[test]
    fn leaves_reveal_and_flag_state_alone() {
        let mut grid = grid((6, 6), 20);
        grid[(5, 5)].is_flagged = true;
        let mut rng = SmallRng::seed_from_u64(11);

        RandomPlacer::new()
            .place(&mut grid, (0, 0), 20, &mut rng)
            .unwrap();

        assert!(grid[(5, 5)].is_flagged);
        assert_eq!(grid.flagged_count(), 1);
        assert_eq!(grid.revealed_count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut first = grid((16, 16), 40);
        let mut second = grid((16, 16), 40);

        RandomPlacer::new()
            .place(&mut first, (8, 8), 40, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        RandomPlacer::new()
            .place(&mut second, (8, 8), 40, &mut SmallRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn next_free_wraps_past_the_last_cell() {
        let mut grid = grid((3, 2), 2);
        mark_hazard(&mut grid, (1, 1));
        mark_hazard(&mut grid, (2, 1));

        assert_eq!(next_free(&grid, 5, 0), Ok(1));
        assert_eq!(next_free(&grid, 4, 3), Ok(0));
    }

    #[test]
    fn rejects_bad_requests() {
        let mut grid = grid((3, 3), 1);
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(
            RandomPlacer::new().place(&mut grid, (3, 0), 1, &mut rng),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            RandomPlacer::new().place(&mut grid, (0, 0), 9, &mut rng),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(grid.placed_hazards(), 0);
    }
}
