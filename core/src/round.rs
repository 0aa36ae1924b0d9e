use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - Won -> Playing
/// - Lost -> Playing
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    ToggleFlag,
}

/// A discrete action on a cell, as delivered by an input collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub coords: Coord2,
    pub action: Action,
}

impl InputEvent {
    pub const fn reveal(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Reveal,
        }
    }

    pub const fn toggle_flag(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::ToggleFlag,
        }
    }
}

/// Outcome of applying an action
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Revealed { count: CellCount },
    Flagged,
    Unflagged,
    Lost,
    Won,
    /// The round had ended, the grid was reset and hazards placed around the action's cell
    NewRound,
}

impl ActionOutcome {
    /// Whether a renderer needs to redraw
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owns the grid and the round state, and applies one action at a time.
#[derive(Clone, Debug)]
pub struct RoundController<P = RandomPlacer> {
    grid: Grid,
    placer: P,
    rng: SmallRng,
    engine: RevealEngine,
    state: RoundState,
    hazards_placed: bool,
}

impl RoundController<RandomPlacer> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomPlacer::new(), seed)
    }
}

impl<P: HazardPlacer> RoundController<P> {
    pub fn with_placer(config: GameConfig, placer: P, seed: u64) -> Result<Self> {
        let grid = Grid::new(config)?;
        placer.validate(&grid, config.hazards)?;
        log::debug!(
            "New controller for {:?} with {} hazards, seed {}",
            config.size,
            config.hazards,
            seed
        );
        Ok(Self {
            grid,
            placer,
            rng: SmallRng::seed_from_u64(seed),
            engine: RevealEngine::new(),
            state: RoundState::Playing,
            hazards_placed: false,
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn config(&self) -> GameConfig {
        self.grid.config()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hazards_placed(&self) -> bool {
        self.hazards_placed
    }

    /// How many hazards have not been flagged yet, negative when over-flagged
    pub fn hazards_left(&self) -> i64 {
        i64::from(self.grid.config().hazards) - i64::from(self.grid.flagged_count())
    }

    /// Row-major `(coords, view)` pairs of the current board.
    pub fn view(&self) -> impl Iterator<Item = (Coord2, CellView)> + Clone + '_ {
        self.grid.view()
    }

    /// Applies an input event, coordinates outside the grid are ignored.
    pub fn handle_input<S: EventSink + ?Sized>(
        &mut self,
        input: InputEvent,
        sink: &mut S,
    ) -> Result<ActionOutcome> {
        if !self.grid.is_valid_coordinate(input.coords) {
            log::debug!("Ignoring {:?} outside of the grid", input);
            return Ok(ActionOutcome::NoChange);
        }

        match input.action {
            Action::Reveal => self.reveal(input.coords, sink),
            Action::ToggleFlag => self.toggle_flag(input.coords, sink),
        }
    }

    /// Reveals a cell, or starts a new round around it if the current one has ended.
    pub fn reveal<S: EventSink + ?Sized>(
        &mut self,
        coords: Coord2,
        sink: &mut S,
    ) -> Result<ActionOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            // the finished board stays in place until the new layout is ready
            let hazards = self.grid.config().hazards;
            let mut fresh = Grid::new(self.grid.config())?;
            self.placer.place(&mut fresh, coords, hazards, &mut self.rng)?;
            self.grid = fresh;
            self.hazards_placed = true;
            self.set_state(RoundState::Playing);
            return Ok(ActionOutcome::NewRound);
        }

        // flags block the reveal, and do not count as the first reveal of the round
        if self.grid[coords].is_flagged {
            return Ok(ActionOutcome::NoChange);
        }

        if !self.hazards_placed {
            self.place_hazards(coords)?;
        }

        Ok(match self.engine.reveal(&mut self.grid, coords)? {
            RevealOutcome::NoChange => ActionOutcome::NoChange,
            RevealOutcome::HazardTriggered => {
                sink.notify(GameEvent::HazardTriggered(coords));
                self.end_round(RoundState::Lost);
                ActionOutcome::Lost
            }
            RevealOutcome::Revealed { count } => {
                sink.notify(GameEvent::Revealed { coords, count });
                if self.grid.all_safe_revealed() {
                    self.end_round(RoundState::Won);
                    sink.notify(GameEvent::RoundWon);
                    ActionOutcome::Won
                } else {
                    ActionOutcome::Revealed { count }
                }
            }
        })
    }

    /// Flips the flag of a hidden cell, ignored once the round has ended.
    pub fn toggle_flag<S: EventSink + ?Sized>(
        &mut self,
        coords: Coord2,
        sink: &mut S,
    ) -> Result<ActionOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            log::debug!("Round is over, ignoring flag at {:?}", coords);
            return Ok(ActionOutcome::NoChange);
        }

        let cell = &mut self.grid[coords];
        if cell.is_revealed {
            return Ok(ActionOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        Ok(if cell.is_flagged {
            sink.notify(GameEvent::Flagged(coords));
            ActionOutcome::Flagged
        } else {
            sink.notify(GameEvent::Unflagged(coords));
            ActionOutcome::Unflagged
        })
    }

    /// Resets the grid and defers placement to the next reveal.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.hazards_placed = false;
        self.set_state(RoundState::Playing);
    }

    fn place_hazards(&mut self, seed: Coord2) -> Result<()> {
        let hazards = self.grid.config().hazards;
        self.placer.place(&mut self.grid, seed, hazards, &mut self.rng)?;
        self.hazards_placed = true;
        Ok(())
    }

    fn end_round(&mut self, state: RoundState) {
        if state == RoundState::Lost {
            // flagged hazards stay hidden
            for cell in self.grid.cells_mut() {
                if cell.is_hazard && !cell.is_flagged {
                    cell.is_revealed = true;
                }
            }
            self.hazards_placed = false;
        }
        self.set_state(state);
    }

    fn set_state(&mut self, state: RoundState) {
        if self.state != state {
            log::debug!("Round state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
