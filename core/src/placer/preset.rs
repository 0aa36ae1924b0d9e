use alloc::collections::BTreeSet;

use super::*;

/// Places a fixed hazard layout, for scripted boards.
///
/// The layout is used verbatim: the seed is not excluded, so revealing a preset hazard as the
/// first move loses the round.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetPlacer {
    hazards: BTreeSet<Coord2>,
}

impl PresetPlacer {
    pub fn new(hazards: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            hazards: hazards.into_iter().collect(),
        }
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazards.len().try_into().unwrap_or(CellCount::MAX)
    }
}

impl HazardPlacer for PresetPlacer {
    fn validate(&self, grid: &Grid, hazards: CellCount) -> Result<()> {
        if hazards >= grid.size() || hazards != self.hazard_count() {
            return Err(GameError::InvalidConfiguration);
        }
        for &coords in &self.hazards {
            grid.validate_coords(coords)?;
        }
        Ok(())
    }

    fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        seed: Coord2,
        hazards: CellCount,
        _rng: &mut R,
    ) -> Result<()> {
        grid.validate_coords(seed)?;
        self.validate(grid, hazards)?;

        for &coords in &self.hazards {
            mark_hazard(grid, coords);
        }
        log_layout(grid);
        Ok(())
    }
}
