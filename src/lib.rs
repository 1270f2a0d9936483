//! # rust-bingo
//!
//! A single-player Bingo game core. The player's card races four
//! computer-controlled cards while numbers are announced on a timer.
//!
//! ## Design Principles
//!
//! 1. **Virtual Time**: Every delay is a task on a [`schedule::Scheduler`].
//!    Front ends pass in elapsed time; nothing sleeps or spawns threads.
//!
//! 2. **Deterministic**: All randomness goes through [`core::RandomSource`].
//!    The same seed replays the same game.
//!
//! 3. **One Card Type**: Player and enemy cards are the same [`cards::Card`]
//!    with an [`cards::Owner`] tag.
//!
//! 4. **Headless**: The crate emits views, events and sound cues. It never
//!    draws or plays audio.
//!
//! ## Modules
//!
//! - `core`: Phases, errors, RNG, configuration
//! - `cards`: Categories, cells, the pool, cards and the bingo check
//! - `schedule`: Virtual-time task scheduler
//! - `game`: Controller, enemy reactor, events, view snapshots
//! - `audio`: Sound cues and sinks

pub mod audio;
pub mod cards;
pub mod core;
pub mod game;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameResult, GameRng, Operation, Phase, RandomSource};

pub use crate::cards::{evaluate_claim, Card, Category, Cell, ClaimVerdict, EnemyId, Owner, Pool};

pub use crate::schedule::{Scheduler, TaskHandle};

pub use crate::game::{BingoGame, Controls, GameEvent, GameView, Outcome};

pub use crate::audio::{play_cues, AudioSink, SoundBoard, SoundCue};
