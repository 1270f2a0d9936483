//! Game events for front ends.
//!
//! The controller buffers one event per observable change; the front end
//! drains them after each intent or `advance` call to redraw and play cues.

use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::cards::{Cell, EnemyId};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player claimed bingo with every value announced.
    PlayerWon,
    /// The player claimed bingo too early.
    BingoRejected,
    /// An enemy filled its card first.
    EnemyWon(EnemyId),
    /// The game was ended with an explicit `lose`.
    Conceded,
}

impl Outcome {
    #[must_use]
    pub fn is_player_win(self) -> bool {
        matches!(self, Outcome::PlayerWon)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWon => write!(f, "player won"),
            Outcome::BingoRejected => write!(f, "bingo rejected"),
            Outcome::EnemyWon(enemy) => write!(f, "{enemy} won"),
            Outcome::Conceded => write!(f, "conceded"),
        }
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    /// A fresh deal replaced every card.
    Restarted { generation: u64 },
    /// A pool cell was announced.
    Announced(Cell),
    /// An enemy marked one of its cells.
    EnemyMarked { enemy: EnemyId, value: u8 },
    /// The player toggled one of their cells.
    PlayerToggled { value: u8, marked: bool },
    Finished(Outcome),
}

impl GameEvent {
    /// Sound to play for this event, if any.
    #[must_use]
    pub fn cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::Announced(_) => Some(SoundCue::Alert),
            GameEvent::PlayerToggled { .. } => Some(SoundCue::Mark),
            GameEvent::Finished(outcome) if outcome.is_player_win() => Some(SoundCue::Success),
            GameEvent::Finished(_) => Some(SoundCue::Failure),
            _ => None,
        }
    }
}
