//! The Bingo game: controller, enemy reactor, events and view.
//!
//! ## Flow
//!
//! 1. `start` announces a number and arms the ticker
//! 2. every tick announces another number from the pool
//! 3. each announcement schedules one delayed reaction per enemy
//! 4. an enemy filling its card ends the game as a loss
//! 5. the player ends it by claiming bingo, judged against the pool

pub mod controller;
pub mod event;
pub mod reactor;
pub mod view;

pub use controller::{BingoGame, TimerAction};
pub use event::{GameEvent, Outcome};
pub use reactor::{EnemyReactor, Reaction, ReactionOutcome};
pub use view::{Controls, GameView};
