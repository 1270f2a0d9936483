//! Enemy reactions to announcements.
//!
//! Every announcement schedules one delayed reaction per enemy. The delays
//! are drawn independently, so enemies resolve in no fixed order. All
//! pending reactions are tracked here so they can be dropped together.

use std::time::Duration;

use tracing::trace;

use crate::cards::{Card, EnemyId};
use crate::core::{Phase, RandomSource};
use crate::schedule::{Scheduler, TaskHandle};

use super::controller::TimerAction;

/// A pending enemy reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reaction {
    /// The enemy reacting.
    pub enemy: EnemyId,
    /// The announced value.
    pub value: u8,
    /// Deal epoch the announcement belonged to.
    pub generation: u64,
}

/// What applying a reaction did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The game finished or was re-dealt since the reaction was scheduled.
    Discarded,
    /// The enemy's card does not hold the value (or it was already marked).
    Missed,
    /// The value was marked; `completed` if that filled the card.
    Marked { completed: bool },
}

/// Schedules and applies enemy reactions.
#[derive(Clone, Debug)]
pub struct EnemyReactor {
    delay_min: Duration,
    delay_max: Duration,
    pending: Vec<TaskHandle>,
}

impl EnemyReactor {
    /// Create a reactor drawing delays from `[delay_min, delay_max)`.
    pub fn new(delay_min: Duration, delay_max: Duration) -> Self {
        Self {
            delay_min,
            delay_max,
            pending: Vec::new(),
        }
    }

    /// Handles of reactions that have not fired or been cancelled.
    #[must_use]
    pub fn pending(&self) -> &[TaskHandle] {
        &self.pending
    }

    /// Schedule one reaction per enemy to `value`.
    pub fn react<R: RandomSource + ?Sized>(
        &mut self,
        scheduler: &mut Scheduler<TimerAction>,
        rng: &mut R,
        enemy_count: usize,
        value: u8,
        generation: u64,
    ) {
        for enemy in EnemyId::all(enemy_count) {
            let delay = rng.duration_between(self.delay_min, self.delay_max);
            let reaction = Reaction {
                enemy,
                value,
                generation,
            };
            let handle = scheduler.schedule(delay, TimerAction::React(reaction));
            trace!(%enemy, value, ?delay, "reaction scheduled");
            self.pending.push(handle);
        }
    }

    /// Drop a handle that has just fired.
    pub fn forget(&mut self, handle: TaskHandle) {
        self.pending.retain(|&h| h != handle);
    }

    /// Cancel every pending reaction. Returns how many were cancelled.
    pub fn cancel_all(&mut self, scheduler: &mut Scheduler<TimerAction>) -> usize {
        let cancelled = self
            .pending
            .drain(..)
            .filter(|&h| scheduler.cancel(h))
            .count();
        if cancelled > 0 {
            trace!(cancelled, "pending reactions cancelled");
        }
        cancelled
    }

    /// Apply a fired reaction to the enemy cards.
    ///
    /// Reactions that outlived their game (finished, or from an earlier
    /// deal) leave the cards untouched.
    pub fn apply(
        reaction: Reaction,
        enemies: &mut [Card],
        phase: Phase,
        generation: u64,
    ) -> ReactionOutcome {
        if phase == Phase::Finished || reaction.generation != generation {
            return ReactionOutcome::Discarded;
        }
        let Some(card) = enemies.get_mut(reaction.enemy.index()) else {
            return ReactionOutcome::Discarded;
        };
        if card.generation() != generation {
            return ReactionOutcome::Discarded;
        }

        if card.mark_value(reaction.value) {
            ReactionOutcome::Marked {
                completed: card.is_complete(),
            }
        } else {
            ReactionOutcome::Missed
        }
    }
}
