use std::io::{self, Write};
use tilesweep_core::{CellView, GameEvent, HazardPlacer, RoundController, RoundState};

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Empty => '.',
        CellView::Count(count) => char::from(b'0' + count.min(9)),
        CellView::Hazard => '*',
    }
}

/// Draws the board with a column ruler, row numbers and a status line.
pub fn draw<P: HazardPlacer>(round: &RoundController<P>, out: &mut impl Write) -> io::Result<()> {
    let (width, _) = round.config().size;

    write!(out, "   ")?;
    for x in 0..width {
        write!(out, "{}", x % 10)?;
    }
    writeln!(out)?;

    for ((x, y), view) in round.view() {
        if x == 0 {
            write!(out, "{y:>2} ")?;
        }
        write!(out, "{}", glyph(view))?;
        if x + 1 == width {
            writeln!(out)?;
        }
    }

    let status = match round.state() {
        RoundState::Playing => "playing",
        RoundState::Won => "won, reveal any cell to play again",
        RoundState::Lost => "lost, reveal any cell to play again",
    };
    writeln!(out, "{status} | hazards left: {}", round.hazards_left())
}

/// Stand-in for a sound cue.
pub fn cue(event: &GameEvent) -> String {
    match *event {
        GameEvent::Revealed { coords, count: 1 } => format!("~ click {coords:?}"),
        GameEvent::Revealed { coords, count } => format!("~ swoosh {coords:?}, {count} cells"),
        GameEvent::Flagged(coords) => format!("~ flag planted at {coords:?}"),
        GameEvent::Unflagged(coords) => format!("~ flag pulled at {coords:?}"),
        GameEvent::HazardTriggered(coords) => format!("~ BOOM at {coords:?}"),
        GameEvent::RoundWon => "~ fanfare".to_string(),
    }
}
