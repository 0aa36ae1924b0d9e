use serde::{Deserialize, Serialize};

/// State of a single grid position.
///
/// `neighbor_hazards` is only meaningful once hazards were placed for the round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_hazard: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_hazards: u8,
}

impl Cell {
    /// What a renderer should draw for this cell.
    pub const fn view(self) -> CellView {
        match (self.is_revealed, self.is_flagged) {
            (true, _) if self.is_hazard => CellView::Hazard,
            (true, _) if self.neighbor_hazards == 0 => CellView::Empty,
            (true, _) => CellView::Count(self.neighbor_hazards),
            (false, true) => CellView::Flagged,
            (false, false) => CellView::Hidden,
        }
    }
}

/// Player-visible kind of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Empty,
    /// Revealed with 1 to 8 adjacent hazards
    Count(u8),
    Hazard,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
