//! Game lifecycle phases and the transition table.
//!
//! ```text
//! new ──start──▶ running ◀──resume── paused
//!                  │  └────pause────────▲
//!                  └──win/lose──▶ finished ◀──win/lose── paused
//! any ──restart──▶ running
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Dealt but not started.
    #[default]
    New,
    /// Numbers are being announced.
    Running,
    /// Announcements are on hold.
    Paused,
    /// Someone won.
    Finished,
}

impl Phase {
    /// Whether the player's card accepts toggles in this phase.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    /// Phase reached by applying `operation`, or the rejection.
    pub fn after(self, operation: Operation) -> GameResult<Phase> {
        use Operation::*;
        use Phase::*;

        let next = match (operation, self) {
            (Start, New) => Ok(Running),
            (Start, _) => Err("already started"),

            (Pause, Running) => Ok(Paused),
            (Pause, _) => Err("not running"),

            (Resume, Paused) => Ok(Running),
            (Resume, _) => Err("not paused"),

            (Win | Lose, Running | Paused) => Ok(Finished),
            (Win | Lose, New) => Err("not started"),
            (Win | Lose, Finished) => Err("already finished"),

            (Restart, _) => Ok(Running),

            (Toggle, Running | Paused) => Ok(self),
            (Toggle, _) => Err("card is not in play"),
        };

        next.map_err(|reason| GameError::InvalidTransition {
            operation,
            phase: self,
            reason,
        })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::New => write!(f, "new"),
            Phase::Running => write!(f, "running"),
            Phase::Paused => write!(f, "paused"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// A phase-gated operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Start,
    Pause,
    Resume,
    Win,
    Lose,
    Restart,
    /// Marking or unmarking a player cell.
    Toggle,
}

impl Operation {
    /// Every operation, for exhaustive checks.
    pub const ALL: [Operation; 7] = [
        Operation::Start,
        Operation::Pause,
        Operation::Resume,
        Operation::Win,
        Operation::Lose,
        Operation::Restart,
        Operation::Toggle,
    ];
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Start => "start",
            Operation::Pause => "pause",
            Operation::Resume => "resume",
            Operation::Win => "win",
            Operation::Lose => "lose",
            Operation::Restart => "restart",
            Operation::Toggle => "toggle a cell in",
        };
        f.write_str(name)
    }
}
