//! Read-only snapshot for rendering.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Cell, Pool};
use crate::core::Phase;

use super::event::Outcome;

/// Which intents the front end should enable.
///
/// The game still rejects a disabled intent if it is called anyway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub resume: bool,
    pub restart: bool,
    pub toggle_cells: bool,
    pub claim_bingo: bool,
}

impl Controls {
    /// Controls for `phase`; `player_card_full` is whether every player cell
    /// is self-marked.
    #[must_use]
    pub fn for_phase(phase: Phase, player_card_full: bool) -> Self {
        Self {
            start: phase == Phase::New,
            pause: phase == Phase::Running,
            resume: phase == Phase::Paused,
            restart: phase != Phase::New,
            toggle_cells: phase.is_in_play(),
            claim_bingo: phase == Phase::Running && player_card_full,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub generation: u64,
    pub elapsed: Duration,
    pub last_announced: Option<Cell>,
    pub pool: Pool,
    pub player: Card,
    pub enemies: Vec<Card>,
    pub controls: Controls,
}
