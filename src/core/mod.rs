//! Core engine types: phases, errors, RNG, configuration.
//!
//! Nothing in here knows about cards or timers; the game controller
//! combines these pieces.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;

pub use config::{GameConfig, MAX_ENEMIES};
pub use error::{GameError, GameResult};
pub use phase::{Operation, Phase};
pub use rng::{GameRng, RandomSource};
