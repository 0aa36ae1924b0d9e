use alloc::vec::Vec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// `count` cells were revealed, the target included.
    Revealed {
        count: CellCount,
    },
    HazardTriggered,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn revealed_count(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Revealed { count } => count,
            Self::HazardTriggered => 1,
        }
    }
}

/// Cascading reveal over a [`Grid`].
///
/// The worklist is kept between calls so repeated reveals do not reallocate.
#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    worklist: Vec<Coord2>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveals `coords` and floods through zero-count cells.
    ///
    /// Revealed or flagged targets are left untouched. A hazard target is revealed and reported,
    /// ending the round is up to the caller.
    pub fn reveal(&mut self, grid: &mut Grid, coords: Coord2) -> Result<RevealOutcome> {
        let coords = grid.validate_coords(coords)?;
        let target = grid[coords];

        if target.is_revealed || target.is_flagged {
            return Ok(RevealOutcome::NoChange);
        }

        grid[coords].is_revealed = true;
        if target.is_hazard {
            log::debug!("Hazard triggered at {:?}", coords);
            return Ok(RevealOutcome::HazardTriggered);
        }

        let mut count: CellCount = 1;
        log::debug!(
            "Revealed {:?}, neighbor hazards: {}",
            coords,
            target.neighbor_hazards
        );

        self.worklist.clear();
        if target.neighbor_hazards == 0 {
            self.worklist.push(coords);
        }

        // is_revealed doubles as the visited marker, each cell is pushed at most once
        while let Some(current) = self.worklist.pop() {
            for pos in grid.iter_neighbors(current) {
                let neighbor = grid[pos];
                if neighbor.is_revealed || neighbor.is_flagged || neighbor.is_hazard {
                    continue;
                }

                grid[pos].is_revealed = true;
                count += 1;
                log::trace!(
                    "Flood revealed {:?}, neighbor hazards: {}",
                    pos,
                    neighbor.neighbor_hazards
                );

                if neighbor.neighbor_hazards == 0 {
                    self.worklist.push(pos);
                }
            }
        }

        Ok(RevealOutcome::Revealed { count })
    }
}
