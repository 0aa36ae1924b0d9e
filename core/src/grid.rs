use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell storage for one configured board, reused across rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    config: GameConfig,
}

impl Grid {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.size;
        Ok(Self {
            cells: Array2::default((usize::from(height), usize::from(width))),
            config,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> Coord {
        self.config.size.0
    }

    pub fn height(&self) -> Coord {
        self.config.size.1
    }

    pub fn dimensions(&self) -> Coord2 {
        self.config.size
    }

    /// Total number of cells.
    pub fn size(&self) -> CellCount {
        self.config.total_cells()
    }

    /// Zeroes every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn is_valid_coordinate(&self, (x, y): Coord2) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_valid_coordinate(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn cell_at(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self[coords])
    }

    /// Converts a row-major flat index into coordinates.
    pub fn coords_of(&self, index: CellCount) -> Coord2 {
        let width = CellCount::from(self.width());
        // both fit in Coord as long as index < size()
        ((index % width) as Coord, (index / width) as Coord)
    }

    pub fn index_of(&self, (x, y): Coord2) -> CellCount {
        CellCount::from(y) * CellCount::from(self.width()) + CellCount::from(x)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn placed_hazards(&self) -> CellCount {
        self.count_where(|cell| cell.is_hazard)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    /// Whether every non-hazard cell has been revealed, flags are not considered.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_hazard || cell.is_revealed)
    }

    /// Row-major `(coords, view)` pairs for drawing, call again to restart.
    pub fn view(&self) -> impl Iterator<Item = (Coord2, CellView)> + Clone + '_ {
        (0..self.size()).map(move |index| {
            let coords = self.coords_of(index);
            (coords, self[coords].view())
        })
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|&cell| pred(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(size: Coord2, hazards: CellCount) -> Grid {
        Grid::new(GameConfig::new(size, hazards).unwrap()).unwrap()
    }

    #[test]
    fn new_grid_is_zeroed() {
        let grid = grid((4, 3), 2);

        assert_eq!(grid.size(), 12);
        assert_eq!(grid.placed_hazards(), 0);
        assert!(grid.view().all(|(_, view)| view == CellView::Hidden));
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let mut grid = grid((4, 3), 2);

        assert_eq!(grid.cell_at((4, 0)).err(), Some(GameError::OutOfBounds));
        assert_eq!(grid.cell_at((0, 3)).err(), Some(GameError::OutOfBounds));
        assert_eq!(grid.cell((3, 2)), Ok(Cell::default()));
        assert!(grid.is_valid_coordinate((3, 2)));
        assert!(!grid.is_valid_coordinate((3, 3)));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut grid = grid((2, 2), 1);
        *grid.cell_at((1, 0)).unwrap() = Cell {
            is_hazard: true,
            is_revealed: true,
            is_flagged: true,
            neighbor_hazards: 3,
        };

        grid.reset();

        assert_eq!(grid[(1, 0)], Cell::default());
    }

    #[test]
    fn flat_index_is_row_major() {
        let grid = grid((5, 3), 1);

        assert_eq!(grid.coords_of(7), (2, 1));
        assert_eq!(grid.index_of((2, 1)), 7);
        let order: Vec<_> = grid.view().map(|(coords, _)| coords).take(6).collect();
        assert_eq!(order, [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1)]);
    }

    #[test]
    fn view_is_restartable() {
        let grid = grid((3, 3), 1);
        let view = grid.view();

        assert_eq!(view.clone().count(), 9);
        assert_eq!(view.count(), 9);
    }

    #[test]
    fn all_safe_revealed_ignores_flags() {
        let mut grid = grid((2, 1), 1);
        grid[(0, 0)].is_hazard = true;
        assert!(!grid.all_safe_revealed());

        grid[(1, 0)].is_revealed = true;
        assert!(grid.all_safe_revealed());

        grid[(0, 0)].is_flagged = true;
        assert!(grid.all_safe_revealed());
    }
}
