//! The bingo check.
//!
//! A claim is judged against what the pool has announced, never against the
//! player's own marks. Self-marking is only a visual aid until the claim.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::pool::Pool;

/// Result of checking a bingo claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimVerdict {
    /// Every card value has been announced.
    Valid,
    /// Some card values were never announced, in card order.
    Invalid { missing: Vec<u8> },
}

impl ClaimVerdict {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ClaimVerdict::Valid)
    }
}

/// Check `card` against the pool's announced values.
#[must_use]
pub fn evaluate_claim(card: &Card, pool: &Pool) -> ClaimVerdict {
    let announced = pool.marked_values();
    let missing: Vec<u8> = card.values().filter(|v| !announced.contains(v)).collect();

    if missing.is_empty() {
        ClaimVerdict::Valid
    } else {
        ClaimVerdict::Invalid { missing }
    }
}
