//! Card model: categories, cells, the master pool and cards.
//!
//! ## Key Types
//!
//! - `Category`: B, I, N, G or O, each owning a band of 15 values
//! - `Cell`: a (category, value) pair with a mark
//! - `Pool`: all 75 cells; announcements mark it
//! - `Card`: 25 cells dealt to the player or an enemy
//! - `evaluate_claim`: the bingo check against the pool

pub mod card;
pub mod cell;
pub mod claim;
pub mod pool;

pub use card::{Card, EnemyId, Owner, CARD_SIZE, CELLS_PER_CATEGORY};
pub use cell::{Category, Cell, MAX_VALUE, VALUES_PER_CATEGORY};
pub use claim::{evaluate_claim, ClaimVerdict};
pub use pool::Pool;
