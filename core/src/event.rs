use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Notifications emitted while an action is applied, in the order they happen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A reveal action opened `count` cells starting at `coords`
    Revealed { coords: Coord2, count: CellCount },
    Flagged(Coord2),
    Unflagged(Coord2),
    HazardTriggered(Coord2),
    RoundWon,
}

/// Receiver for [`GameEvent`]s, called synchronously from inside the action.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Discards every event.
impl EventSink for () {
    fn notify(&mut self, _event: GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: GameEvent) {
        (**self).notify(event);
    }
}
