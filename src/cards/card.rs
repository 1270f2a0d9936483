//! Player and enemy cards.
//!
//! One `Card` type serves every seat; the [`Owner`] tag says whose it is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Category, Cell, VALUES_PER_CATEGORY};
use crate::core::{GameError, GameResult, RandomSource};

/// Cells per category on a dealt card.
pub const CELLS_PER_CATEGORY: usize = 5;

/// Cells on a dealt card.
pub const CARD_SIZE: usize = CELLS_PER_CATEGORY * Category::ALL.len();

/// Enemy identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u8);

impl EnemyId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the enemies of a game with `count` enemies.
    pub fn all(count: usize) -> impl Iterator<Item = EnemyId> {
        (0..count as u8).map(EnemyId)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy {}", self.0)
    }
}

/// Who a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The human player; marks are toggled by hand.
    Player,
    /// A computer racer; marks follow announcements.
    Enemy(EnemyId),
}

/// A card: a set of distinct cells owned by one seat.
///
/// Dealt cards hold 25 cells, 5 per category, grouped in column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    owner: Owner,
    generation: u64,
    cells: SmallVec<[Cell; CARD_SIZE]>,
}

impl Card {
    /// Deal a random card: 5 distinct values from each category band.
    ///
    /// Fails if `rng` hands back indices outside the band, repeats an index,
    /// or draws the wrong number of them.
    pub fn deal<R: RandomSource + ?Sized>(
        owner: Owner,
        generation: u64,
        rng: &mut R,
    ) -> GameResult<Self> {
        let mut cells: SmallVec<[Cell; CARD_SIZE]> = SmallVec::new();

        for category in Category::ALL {
            let picks = rng.sample_indices(usize::from(VALUES_PER_CATEGORY), CELLS_PER_CATEGORY);
            if picks.len() != CELLS_PER_CATEGORY {
                return Err(GameError::InvalidDeal(format!(
                    "column {category} drew {} numbers, expected {CELLS_PER_CATEGORY}",
                    picks.len()
                )));
            }
            for offset in picks {
                let value = category.values().nth(offset).ok_or_else(|| {
                    GameError::InvalidDeal(format!("offset {offset} is outside column {category}"))
                })?;
                if cells.iter().any(|c| c.value() == value) {
                    return Err(GameError::DuplicateValue(value));
                }
                cells.push(Cell::new(value)?);
            }
        }

        Ok(Self {
            owner,
            generation,
            cells,
        })
    }

    /// Build a card from explicit values, unmarked.
    ///
    /// Any number of values is accepted; they must be in range and distinct.
    pub fn from_values(owner: Owner, generation: u64, values: &[u8]) -> GameResult<Self> {
        let mut cells: SmallVec<[Cell; CARD_SIZE]> = SmallVec::with_capacity(values.len());
        for &value in values {
            if cells.iter().any(|c| c.value() == value) {
                return Err(GameError::DuplicateValue(value));
            }
            cells.push(Cell::new(value)?);
        }
        Ok(Self {
            owner,
            generation,
            cells,
        })
    }

    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Deal epoch this card belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of one category, in card order.
    pub fn column(&self, category: Category) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.category() == category)
    }

    /// Values on the card, in card order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(Cell::value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.cells.iter().any(|c| c.value() == value)
    }

    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }

    /// Every cell is marked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.marked)
    }

    /// Mark the cell holding `value`.
    ///
    /// Returns `true` only if a cell changed from unmarked to marked.
    pub fn mark_value(&mut self, value: u8) -> bool {
        match self.cells.iter_mut().find(|c| c.value() == value) {
            Some(cell) if !cell.marked => {
                cell.marked = true;
                true
            }
            _ => false,
        }
    }

    /// Flip the mark on the cell holding `value`; returns the new state.
    pub fn toggle(&mut self, value: u8) -> GameResult<bool> {
        let cell = self
            .cells
            .iter_mut()
            .find(|c| c.value() == value)
            .ok_or(GameError::CellNotOnCard(value))?;
        cell.marked = !cell.marked;
        Ok(cell.marked)
    }
}
