//! The game controller.
//!
//! `BingoGame` owns the phase, the pool, the five cards and the timers.
//! Front ends call the intent methods on user input and [`BingoGame::advance`]
//! with the real time that has passed; both run to completion before
//! returning.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::cards::{evaluate_claim, Card, Cell, ClaimVerdict, EnemyId, Owner, Pool};
use crate::core::{GameConfig, GameError, GameResult, GameRng, Operation, Phase, RandomSource};
use crate::schedule::{Fired, Scheduler, TaskHandle};

use super::event::{GameEvent, Outcome};
use super::reactor::{EnemyReactor, Reaction, ReactionOutcome};
use super::view::{Controls, GameView};

/// Payload of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Periodic announcement tick.
    Announce,
    /// Delayed enemy reaction.
    React(Reaction),
}

/// A single-player Bingo game racing a set of enemy cards.
///
/// ## Timing
///
/// - While `Running`, a number is announced every `announce_interval`.
/// - Each announcement schedules one reaction per enemy, delayed by a random
///   amount in `[reaction_delay_min, reaction_delay_max)`.
/// - Reactions keep firing while `Paused`; only announcements stop.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_bingo::{BingoGame, GameConfig, Phase};
///
/// let mut game = BingoGame::new(GameConfig::default()).unwrap();
/// game.start().unwrap();
/// assert_eq!(game.phase(), Phase::Running);
/// assert!(game.last_announced().is_some());
///
/// game.advance(Duration::from_secs(5)).unwrap();
/// assert_eq!(game.pool().len() - game.pool().unmarked_count(), 2);
/// ```
#[derive(Debug)]
pub struct BingoGame<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    outcome: Option<Outcome>,
    generation: u64,
    pool: Pool,
    player: Card,
    enemies: Vec<Card>,
    last_announced: Option<Cell>,
    scheduler: Scheduler<TimerAction>,
    ticker: Option<TaskHandle>,
    reactor: EnemyReactor,
    events: Vec<GameEvent>,
}

impl BingoGame<GameRng> {
    /// Create a game seeded from `config.seed`.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> BingoGame<R> {
    /// Create a game drawing every random decision from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> GameResult<Self> {
        config.validate()?;

        let generation = 1;
        let (pool, player, enemies) = deal(&mut rng, config.enemy_count, generation)?;
        let reactor = EnemyReactor::new(config.reaction_delay_min, config.reaction_delay_max);

        Ok(Self {
            config,
            rng,
            phase: Phase::New,
            outcome: None,
            generation,
            pool,
            player,
            enemies,
            last_announced: None,
            scheduler: Scheduler::new(),
            ticker: None,
            reactor,
            events: Vec::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How the game ended, once `Finished`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Current deal epoch; starts at 1 and grows on every restart.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    #[must_use]
    pub fn player_card(&self) -> &Card {
        &self.player
    }

    #[must_use]
    pub fn enemy_cards(&self) -> &[Card] {
        &self.enemies
    }

    #[must_use]
    pub fn enemy_card(&self, enemy: EnemyId) -> Option<&Card> {
        self.enemies.get(enemy.index())
    }

    #[must_use]
    pub fn last_announced(&self) -> Option<Cell> {
        self.last_announced
    }

    /// Virtual time since the game was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Whether the announcement ticker is live.
    #[must_use]
    pub fn ticker_active(&self) -> bool {
        self.ticker.is_some_and(|h| self.scheduler.is_scheduled(h))
    }

    /// Number of enemy reactions still waiting to fire.
    #[must_use]
    pub fn pending_reactions(&self) -> usize {
        self.reactor.pending().len()
    }

    /// Whether the front end should offer the bingo button.
    ///
    /// Only a hint: the claim itself is judged against the pool.
    #[must_use]
    pub fn can_claim_bingo(&self) -> bool {
        self.phase == Phase::Running && self.player.is_complete()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            outcome: self.outcome,
            generation: self.generation,
            elapsed: self.elapsed(),
            last_announced: self.last_announced,
            pool: self.pool.clone(),
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            controls: Controls::for_phase(self.phase, self.player.is_complete()),
        }
    }

    /// Take every event buffered since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Intents ===

    /// Announce the first number and start the ticker.
    pub fn start(&mut self) -> GameResult<()> {
        let next = self.phase.after(Operation::Start)?;
        self.phase = next;
        self.events.push(GameEvent::Started);
        info!(generation = self.generation, "game started");

        self.announce()?;
        self.start_ticker();
        Ok(())
    }

    /// Stop announcing. Pending enemy reactions still fire.
    pub fn pause(&mut self) -> GameResult<()> {
        self.phase = self.phase.after(Operation::Pause)?;
        self.stop_ticker();
        self.events.push(GameEvent::Paused);
        info!("game paused");
        Ok(())
    }

    /// Resume announcing; the next number comes one full interval later.
    pub fn resume(&mut self) -> GameResult<()> {
        self.phase = self.phase.after(Operation::Resume)?;
        self.start_ticker();
        self.events.push(GameEvent::Resumed);
        info!("game resumed");
        Ok(())
    }

    /// End the game as a player win.
    pub fn win(&mut self) -> GameResult<()> {
        self.finish(Operation::Win, Outcome::PlayerWon)
    }

    /// End the game as a player loss.
    pub fn lose(&mut self) -> GameResult<()> {
        self.finish(Operation::Lose, Outcome::Conceded)
    }

    /// Drop every timer, deal a fresh pool and cards, and run again.
    ///
    /// Allowed from any phase. Reactions scheduled before the restart can
    /// never touch the new cards.
    pub fn restart(&mut self) -> GameResult<()> {
        let next = self.phase.after(Operation::Restart)?;
        let generation = self.generation + 1;
        let (pool, player, enemies) = deal(&mut self.rng, self.config.enemy_count, generation)?;

        self.reactor.cancel_all(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.ticker = None;

        self.generation = generation;
        self.pool = pool;
        self.player = player;
        self.enemies = enemies;
        self.last_announced = None;
        self.outcome = None;

        self.phase = next;
        self.start_ticker();
        self.events.push(GameEvent::Restarted {
            generation: self.generation,
        });
        info!(generation = self.generation, "game restarted");
        Ok(())
    }

    /// Flip the player's mark on `value`; returns the new mark state.
    ///
    /// The player may mark any value on their card, announced or not.
    pub fn toggle_player_cell(&mut self, value: u8) -> GameResult<bool> {
        self.phase.after(Operation::Toggle)?;
        let marked = self.player.toggle(value)?;
        self.events.push(GameEvent::PlayerToggled { value, marked });
        debug!(value, marked, "player toggled cell");
        Ok(marked)
    }

    /// Judge the player's card against the announced numbers.
    ///
    /// Wins if every value on the card has been announced, loses otherwise.
    pub fn claim_bingo(&mut self) -> GameResult<Outcome> {
        // Reject before judging so a refused claim has no side effects.
        self.phase.after(Operation::Win)?;

        let outcome = match evaluate_claim(&self.player, &self.pool) {
            ClaimVerdict::Valid => {
                self.finish(Operation::Win, Outcome::PlayerWon)?;
                Outcome::PlayerWon
            }
            ClaimVerdict::Invalid { missing } => {
                debug!(?missing, "bingo claim rejected");
                self.finish(Operation::Lose, Outcome::BingoRejected)?;
                Outcome::BingoRejected
            }
        };
        Ok(outcome)
    }

    /// Change the announcement period.
    ///
    /// A live ticker is replaced, never duplicated; the next announcement
    /// comes one new interval from now.
    pub fn set_announce_interval(&mut self, interval: Duration) -> GameResult<()> {
        if interval.is_zero() {
            return Err(GameError::InvalidConfig(
                "announce interval must be greater than zero".into(),
            ));
        }
        self.config.announce_interval = interval;
        if self.ticker.is_some() {
            self.stop_ticker();
            self.start_ticker();
        }
        debug!(?interval, "announce interval changed");
        Ok(())
    }

    // === Time ===

    /// Let `elapsed` virtual time pass, firing every timer that comes due.
    ///
    /// The clock saturates at `Duration::MAX`, so `advance(Duration::MAX)`
    /// plays everything out. Timers fire one at a time in due order. If the pool runs dry on a
    /// tick, the ticker stops, the remaining timers still fire, and
    /// `PoolExhausted` is returned.
    pub fn advance(&mut self, elapsed: Duration) -> GameResult<()> {
        let until = self.scheduler.now().saturating_add(elapsed);
        let mut first_error = None;

        while let Some(fired) = self.scheduler.pop_due(until) {
            if let Err(err) = self.dispatch(fired) {
                first_error.get_or_insert(err);
            }
        }
        self.scheduler.advance_to(until);

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn dispatch(&mut self, fired: Fired<TimerAction>) -> GameResult<()> {
        match fired.action {
            TimerAction::Announce => {
                if self.phase != Phase::Running {
                    trace!(phase = %self.phase, "tick outside running phase ignored");
                    return Ok(());
                }
                if let Err(err) = self.announce() {
                    warn!(error = %err, "stopping announcements");
                    self.stop_ticker();
                    return Err(err);
                }
                Ok(())
            }
            TimerAction::React(reaction) => {
                self.reactor.forget(fired.handle);
                self.apply_reaction(reaction)
            }
        }
    }

    fn apply_reaction(&mut self, reaction: Reaction) -> GameResult<()> {
        match EnemyReactor::apply(reaction, &mut self.enemies, self.phase, self.generation) {
            ReactionOutcome::Discarded => {
                trace!(enemy = %reaction.enemy, value = reaction.value, "stale reaction discarded");
                Ok(())
            }
            ReactionOutcome::Missed => Ok(()),
            ReactionOutcome::Marked { completed } => {
                self.events.push(GameEvent::EnemyMarked {
                    enemy: reaction.enemy,
                    value: reaction.value,
                });
                debug!(enemy = %reaction.enemy, value = reaction.value, "enemy marked cell");
                if completed {
                    self.finish(Operation::Lose, Outcome::EnemyWon(reaction.enemy))?;
                }
                Ok(())
            }
        }
    }

    // === Internals ===

    fn announce(&mut self) -> GameResult<Cell> {
        let cell = self.pool.announce(&mut self.rng)?;
        self.last_announced = Some(cell);
        self.events.push(GameEvent::Announced(cell));
        debug!(%cell, remaining = self.pool.unmarked_count(), "number announced");

        self.reactor.react(
            &mut self.scheduler,
            &mut self.rng,
            self.enemies.len(),
            cell.value(),
            self.generation,
        );
        Ok(cell)
    }

    fn finish(&mut self, operation: Operation, outcome: Outcome) -> GameResult<()> {
        self.phase = self.phase.after(operation)?;
        let cancelled = self.reactor.cancel_all(&mut self.scheduler);
        self.stop_ticker();
        self.outcome = Some(outcome);
        self.events.push(GameEvent::Finished(outcome));
        info!(%outcome, cancelled, "game finished");
        Ok(())
    }

    fn start_ticker(&mut self) {
        if self.ticker_active() {
            return;
        }
        let handle = self
            .scheduler
            .schedule_repeating(self.config.announce_interval, TimerAction::Announce);
        self.ticker = Some(handle);
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// Deal a fresh pool, player card and enemy cards for `generation`.
fn deal<R: RandomSource + ?Sized>(
    rng: &mut R,
    enemy_count: usize,
    generation: u64,
) -> GameResult<(Pool, Card, Vec<Card>)> {
    let pool = Pool::new(generation);
    let player = Card::deal(Owner::Player, generation, rng)?;
    let enemies = EnemyId::all(enemy_count)
        .map(|id| Card::deal(Owner::Enemy(id), generation, rng))
        .collect::<GameResult<Vec<_>>>()?;
    Ok((pool, player, enemies))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> BingoGame {
        BingoGame::new(GameConfig::default()).unwrap()
    }

    fn announced(game: &BingoGame) -> usize {
        game.pool().len() - game.pool().unmarked_count()
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.phase(), Phase::New);
        assert_eq!(game.generation(), 1);
        assert_eq!(game.enemy_cards().len(), 4);
        assert!(game.last_announced().is_none());
        assert!(!game.ticker_active());
        assert_eq!(announced(&game), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_enemy_count(0);
        assert!(matches!(BingoGame::new(config), Err(GameError::InvalidConfig(_))));
    }

    /// Draws one index too few for every column.
    struct ShortDeal;

    impl RandomSource for ShortDeal {
        fn index_below(&mut self, _len: usize) -> usize {
            0
        }

        fn sample_indices(&mut self, _len: usize, amount: usize) -> Vec<usize> {
            (1..amount).collect()
        }

        fn duration_between(&mut self, min: Duration, _max: Duration) -> Duration {
            min
        }
    }

    #[test]
    fn test_broken_deal_is_an_error() {
        let result = BingoGame::with_rng(GameConfig::default(), ShortDeal);
        assert!(matches!(result, Err(GameError::InvalidDeal(_))));
    }

    #[test]
    fn test_start_announces_immediately() {
        let mut game = game();
        game.start().unwrap();

        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(announced(&game), 1);
        assert_eq!(game.pending_reactions(), 4);
        assert!(game.ticker_active());

        let events = game.drain_events();
        assert_eq!(events[0], GameEvent::Started);
        assert!(matches!(events[1], GameEvent::Announced(_)));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_ticker_cadence() {
        let mut game = game();
        game.start().unwrap();

        game.advance(Duration::from_millis(4999)).unwrap();
        assert_eq!(announced(&game), 1);
        game.advance(Duration::from_millis(1)).unwrap();
        assert_eq!(announced(&game), 2);
        game.advance(Duration::from_secs(10)).unwrap();
        assert_eq!(announced(&game), 4);
    }

    #[test]
    fn test_reactions_drain_before_next_tick() {
        let mut game = game();
        game.start().unwrap();
        game.advance(Duration::from_millis(2000)).unwrap();
        assert_eq!(game.pending_reactions(), 0);
    }

    #[test]
    fn test_win_cancels_reactions() {
        let mut game = game();
        game.start().unwrap();
        game.win().unwrap();

        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.outcome(), Some(Outcome::PlayerWon));
        assert_eq!(game.pending_reactions(), 0);
        assert!(!game.ticker_active());

        let before = game.view();
        game.advance(Duration::from_secs(60)).unwrap();
        let after = game.view();
        assert_eq!(before.enemies, after.enemies);
        assert_eq!(before.pool, after.pool);
    }

    #[test]
    fn test_set_interval_replaces_ticker() {
        let mut game = game();
        game.start().unwrap();
        game.set_announce_interval(Duration::from_secs(1)).unwrap();
        assert!(game.ticker_active());

        game.advance(Duration::from_secs(3)).unwrap();
        assert_eq!(announced(&game), 4);
        assert!(matches!(
            game.set_announce_interval(Duration::ZERO),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_set_interval_while_paused_does_not_start_ticker() {
        let mut game = game();
        game.start().unwrap();
        game.pause().unwrap();
        game.set_announce_interval(Duration::from_secs(1)).unwrap();
        assert!(!game.ticker_active());

        game.advance(Duration::from_secs(10)).unwrap();
        assert_eq!(announced(&game), 1);

        game.resume().unwrap();
        game.advance(Duration::from_secs(1)).unwrap();
        assert_eq!(announced(&game), 2);
    }

    #[test]
    fn test_view_controls_follow_phase() {
        let mut game = game();
        assert!(game.view().controls.start);
        game.start().unwrap();
        let view = game.view();
        assert!(view.controls.pause && view.controls.toggle_cells);
        assert!(!view.controls.claim_bingo);
        assert_eq!(view.last_announced, game.last_announced());
    }
}
