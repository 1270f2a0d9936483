//! The 75-cell master pool that announcements are drawn from.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, MAX_VALUE};
use crate::core::{GameError, GameResult, RandomSource};

/// All 75 cells, ascending by value.
///
/// Backed by `im::Vector` so view snapshots clone in O(1).
/// Marks only ever go from unmarked to marked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    cells: Vector<Cell>,
    generation: u64,
}

impl Pool {
    /// A fresh, fully unmarked pool for `generation`.
    #[must_use]
    pub fn new(generation: u64) -> Self {
        let cells = (1..=MAX_VALUE)
            .filter_map(|value| Cell::new(value).ok())
            .collect();
        Self { cells, generation }
    }

    /// A pool with exactly `values` already announced.
    pub fn from_marked(values: &[u8], generation: u64) -> GameResult<Self> {
        let mut pool = Self::new(generation);
        for &value in values {
            let index = Self::index_of(value)?;
            pool.mark(index);
        }
        Ok(pool)
    }

    fn index_of(value: u8) -> GameResult<usize> {
        if value == 0 || value > MAX_VALUE {
            return Err(GameError::InvalidValue(value));
        }
        Ok(usize::from(value - 1))
    }

    /// Deal epoch this pool belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells in value order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Whether `value` has been announced.
    #[must_use]
    pub fn is_marked(&self, value: u8) -> bool {
        Self::index_of(value)
            .ok()
            .and_then(|i| self.cells.get(i))
            .is_some_and(|c| c.marked)
    }

    /// Set of announced values.
    #[must_use]
    pub fn marked_values(&self) -> FxHashSet<u8> {
        self.cells
            .iter()
            .filter(|c| c.marked)
            .map(Cell::value)
            .collect()
    }

    #[must_use]
    pub fn unmarked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.marked).count()
    }

    /// Uniformly pick the index of an unmarked cell.
    ///
    /// Never returns a marked cell's index; fails once every cell is marked.
    pub fn pick_unmarked<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GameResult<usize> {
        let unmarked: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.marked)
            .map(|(i, _)| i)
            .collect();

        if unmarked.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let choice = rng.index_below(unmarked.len());
        unmarked.get(choice).copied().ok_or(GameError::PoolExhausted)
    }

    /// Mark the cell at `index` and return it.
    pub fn mark(&mut self, index: usize) -> Option<Cell> {
        let cell = self.cells.get_mut(index)?;
        cell.marked = true;
        Some(*cell)
    }

    /// Pick an unmarked cell, mark it and return it.
    pub fn announce<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> GameResult<Cell> {
        let index = self.pick_unmarked(rng)?;
        self.mark(index).ok_or(GameError::PoolExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::cell::Category;
    use crate::core::GameRng;

    #[test]
    fn test_new_pool_shape() {
        let pool = Pool::new(1);
        assert_eq!(pool.len(), 75);
        assert_eq!(pool.unmarked_count(), 75);
        assert!(pool.marked_values().is_empty());

        for category in Category::ALL {
            let count = pool.cells().filter(|c| c.category() == category).count();
            assert_eq!(count, 15);
        }

        let values: Vec<u8> = pool.cells().map(Cell::value).collect();
        assert_eq!(values, (1..=75).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_marked() {
        let pool = Pool::from_marked(&[3, 17, 34, 48, 62], 1).unwrap();
        assert!(pool.is_marked(3));
        assert!(pool.is_marked(62));
        assert!(!pool.is_marked(63));
        assert_eq!(pool.unmarked_count(), 70);
        assert_eq!(Pool::from_marked(&[80], 1), Err(GameError::InvalidValue(80)));
    }

    #[test]
    fn test_announce_never_repeats() {
        let mut pool = Pool::new(1);
        let mut rng = GameRng::new(5);
        let mut seen = FxHashSet::default();

        for _ in 0..75 {
            let cell = pool.announce(&mut rng).unwrap();
            assert!(cell.marked);
            assert!(seen.insert(cell.value()), "{} announced twice", cell.value());
        }
        assert_eq!(pool.unmarked_count(), 0);
    }

    #[test]
    fn test_exhausted_pool_errors() {
        let all: Vec<u8> = (1..=75).collect();
        let mut pool = Pool::from_marked(&all, 1).unwrap();
        let mut rng = GameRng::new(5);

        assert_eq!(pool.pick_unmarked(&mut rng), Err(GameError::PoolExhausted));
        assert_eq!(pool.announce(&mut rng), Err(GameError::PoolExhausted));
    }

    #[test]
    fn test_last_unmarked_is_forced() {
        let almost: Vec<u8> = (1..=75).filter(|&v| v != 40).collect();
        let pool = Pool::from_marked(&almost, 1).unwrap();
        let mut rng = GameRng::new(11);

        for _ in 0..10 {
            assert_eq!(pool.pick_unmarked(&mut rng).unwrap(), 39);
        }
    }
}
