#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use event::*;
pub use grid::*;
pub use placer::*;
pub use reveal::*;
pub use round::*;
pub use types::*;

mod cell;
mod error;
mod event;
mod grid;
mod placer;
mod reveal;
mod round;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub hazards: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, hazards: CellCount) -> Self {
        Self { size, hazards }
    }

    pub fn new(size: Coord2, hazards: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, hazards);
        config.validate()?;
        Ok(config)
    }

    /// 9x9 with 10 hazards
    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    /// 16x16 with 40 hazards
    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    /// 30x16 with 99 hazards
    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazards)
    }

    /// At least one cell, and at least one of them must stay hazard-free.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 || self.hazards >= self.total_cells() {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::expert()
    }
}
