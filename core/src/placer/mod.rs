use alloc::string::String;
use rand::Rng;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Seeds hazards into a freshly reset grid and keeps neighbor counts in sync.
pub trait HazardPlacer {
    /// Checks that `hazards` can be placed on `grid`, without touching it.
    ///
    /// Called once when a round controller is built, so setup mistakes surface there.
    fn validate(&self, grid: &Grid, hazards: CellCount) -> Result<()> {
        if hazards >= grid.size() {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(())
    }

    /// Marks `hazards` cells as hazards, `seed` is the coordinate of the first reveal of the round.
    fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        seed: Coord2,
        hazards: CellCount,
        rng: &mut R,
    ) -> Result<()>;
}

/// Marks a single hazard and bumps the count of each of its neighbors.
fn mark_hazard(grid: &mut Grid, coords: Coord2) {
    grid[coords].is_hazard = true;
    for pos in grid.iter_neighbors(coords) {
        grid[pos].neighbor_hazards += 1;
    }
}

fn log_layout(grid: &Grid) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| if grid[(x, y)].is_hazard { '#' } else { '.' })
            .collect();
        log::trace!("{row}");
    }
}
