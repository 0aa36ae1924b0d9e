use ndarray::Array2;

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u16;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Grids are stored as `(row, column)` so the flat slice is row-major.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(cols).unwrap_or(Coord::MAX),
            Coord::try_from(rows).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(coords, bounds)
    }
}

/// Walks the clamped 3x3 window around a cell in row-major order, skipping the cell itself.
///
/// A center outside `bounds` has no neighbors.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    left: Coord,
    last: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let (width, height) = bounds;
        let inside = x < width && y < height;
        Self {
            center,
            left: x.saturating_sub(1),
            last: (
                x.saturating_add(1).min(width.saturating_sub(1)),
                y.saturating_add(1).min(height.saturating_sub(1)),
            ),
            cursor: inside.then_some((x.saturating_sub(1), y.saturating_sub(1))),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos @ (x, y)) = self.cursor {
            self.cursor = if x < self.last.0 {
                Some((x + 1, y))
            } else if y < self.last.1 {
                Some((self.left, y + 1))
            } else {
                None
            };

            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
