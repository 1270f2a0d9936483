//! Error types for the game core.

use super::phase::{Operation, Phase};

/// Errors returned by game operations.
///
/// Every variant is a synchronous rejection; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The operation is not allowed from the current phase.
    #[error("cannot {operation} the game: {reason}")]
    InvalidTransition {
        /// What was attempted.
        operation: Operation,
        /// Phase at the time of the attempt.
        phase: Phase,
        /// Why the phase rules it out.
        reason: &'static str,
    },

    /// Every pool cell has already been announced.
    #[error("no unmarked numbers available")]
    PoolExhausted,

    /// The player's card has no cell with this value.
    #[error("number {0} is not on the card")]
    CellNotOnCard(u8),

    /// A value outside 1..=75.
    #[error("number {0} is outside 1..=75")]
    InvalidValue(u8),

    /// A card listed the same value twice.
    #[error("number {0} appears more than once")]
    DuplicateValue(u8),

    /// A random source drew a card that breaks the card layout.
    #[error("invalid deal: {0}")]
    InvalidDeal(String),

    /// The game configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
