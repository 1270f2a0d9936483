//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use rust_bingo::{BingoGame, GameConfig, RandomSource};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Fully predictable random source.
///
/// - always picks the first candidate, so the pool announces 1, 2, 3, ...
/// - deals the lowest five values of every band, so every card holds
///   1-5, 16-20, 31-35, 46-50 and 61-65
/// - hands out reaction delays from `delays` in a cycle (or `min` if empty)
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    delays: Vec<Duration>,
    next_delay: usize,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delays(delays: &[u64]) -> Self {
        Self {
            delays: delays.iter().map(|&ms| Duration::from_millis(ms)).collect(),
            next_delay: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn index_below(&mut self, _len: usize) -> usize {
        0
    }

    fn sample_indices(&mut self, _len: usize, amount: usize) -> Vec<usize> {
        (0..amount).collect()
    }

    fn duration_between(&mut self, min: Duration, _max: Duration) -> Duration {
        if self.delays.is_empty() {
            return min;
        }
        let delay = self.delays[self.next_delay % self.delays.len()];
        self.next_delay += 1;
        delay
    }
}

/// Values on every card dealt by [`Scripted`].
pub fn scripted_card_values() -> Vec<u8> {
    [1u8, 16, 31, 46, 61]
        .iter()
        .flat_map(|&start| start..start + 5)
        .collect()
}

/// Scripted game with default timing.
pub fn scripted_game(delays: &[u64]) -> BingoGame<Scripted> {
    init_tracing();
    BingoGame::with_rng(GameConfig::default(), Scripted::with_delays(delays)).unwrap()
}

/// Seeded game with default timing.
pub fn seeded_game(seed: u64) -> BingoGame {
    init_tracing();
    BingoGame::new(GameConfig::default().with_seed(seed)).unwrap()
}

/// Number of announced pool cells.
pub fn announced<R: RandomSource>(game: &BingoGame<R>) -> usize {
    game.pool().len() - game.pool().unmarked_count()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}
