//! Game configuration.
//!
//! Front ends build a `GameConfig` once and hand it to
//! [`BingoGame::new`](crate::game::BingoGame::new). Timing values are virtual;
//! the game only sees the elapsed time passed to `advance`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Most enemies a single game supports.
pub const MAX_ENEMIES: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed for deterministic games.
    pub seed: u64,

    /// Period of the number announcement ticker.
    pub announce_interval: Duration,

    /// Shortest enemy reaction delay (inclusive).
    pub reaction_delay_min: Duration,

    /// Longest enemy reaction delay (exclusive).
    pub reaction_delay_max: Duration,

    /// Number of computer-controlled cards racing the player.
    pub enemy_count: usize,

    /// Volume hint for the audio sink, `0.0..=1.0`.
    pub sound_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            announce_interval: Duration::from_secs(5),
            reaction_delay_min: Duration::from_millis(500),
            reaction_delay_max: Duration::from_millis(2000),
            enemy_count: 4,
            sound_volume: 0.5,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the announcement period.
    #[must_use]
    pub fn with_announce_interval(mut self, interval: Duration) -> Self {
        self.announce_interval = interval;
        self
    }

    /// Set the enemy reaction delay range `[min, max)`.
    #[must_use]
    pub fn with_reaction_delay(mut self, min: Duration, max: Duration) -> Self {
        self.reaction_delay_min = min;
        self.reaction_delay_max = max;
        self
    }

    /// Set the number of enemies.
    #[must_use]
    pub fn with_enemy_count(mut self, count: usize) -> Self {
        self.enemy_count = count;
        self
    }

    /// Set the volume hint.
    #[must_use]
    pub fn with_sound_volume(mut self, volume: f32) -> Self {
        self.sound_volume = volume;
        self
    }

    /// Reject configurations the game cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        if self.announce_interval.is_zero() {
            return Err(GameError::InvalidConfig(
                "announce interval must be greater than zero".into(),
            ));
        }
        if self.reaction_delay_min >= self.reaction_delay_max {
            return Err(GameError::InvalidConfig(format!(
                "reaction delay range is empty: {:?}..{:?}",
                self.reaction_delay_min, self.reaction_delay_max
            )));
        }
        if self.enemy_count == 0 || self.enemy_count > MAX_ENEMIES {
            return Err(GameError::InvalidConfig(format!(
                "enemy count must be 1-{MAX_ENEMIES}, got {}",
                self.enemy_count
            )));
        }
        if !(0.0..=1.0).contains(&self.sound_volume) {
            return Err(GameError::InvalidConfig(format!(
                "sound volume must be within 0.0..=1.0, got {}",
                self.sound_volume
            )));
        }
        Ok(())
    }
}
