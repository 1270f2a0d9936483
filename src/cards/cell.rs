//! Categories and numbered cells.
//!
//! The 1-75 range is split into five contiguous bands of 15, one per
//! letter of B-I-N-G-O.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameResult};

/// Values per category band.
pub const VALUES_PER_CATEGORY: u8 = 15;

/// Highest value in play.
pub const MAX_VALUE: u8 = 75;

/// One of the five column groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    B,
    I,
    N,
    G,
    O,
}

impl Category {
    /// All categories in column order.
    pub const ALL: [Category; 5] = [Category::B, Category::I, Category::N, Category::G, Category::O];

    /// Column index (0 for B through 4 for O).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inclusive value band owned by this category.
    #[must_use]
    pub fn values(self) -> std::ops::RangeInclusive<u8> {
        let start = self.index() as u8 * VALUES_PER_CATEGORY + 1;
        start..=start + VALUES_PER_CATEGORY - 1
    }

    /// Category that owns `value`.
    pub fn of(value: u8) -> GameResult<Self> {
        if value == 0 || value > MAX_VALUE {
            return Err(GameError::InvalidValue(value));
        }
        Ok(Self::ALL[usize::from((value - 1) / VALUES_PER_CATEGORY)])
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Category::B => 'B',
            Category::I => 'I',
            Category::N => 'N',
            Category::G => 'G',
            Category::O => 'O',
        };
        write!(f, "{letter}")
    }
}

/// A numbered cell with a mark.
///
/// Category and value never change after creation; only `marked` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    category: Category,
    value: u8,
    /// Whether the owner has marked this cell.
    pub marked: bool,
}

impl Cell {
    /// Create an unmarked cell, deriving the category from the value.
    pub fn new(value: u8) -> GameResult<Self> {
        Ok(Self {
            category: Category::of(value)?,
            value,
            marked: false,
        })
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands() {
        assert_eq!(Category::B.values(), 1..=15);
        assert_eq!(Category::I.values(), 16..=30);
        assert_eq!(Category::N.values(), 31..=45);
        assert_eq!(Category::G.values(), 46..=60);
        assert_eq!(Category::O.values(), 61..=75);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(Category::of(1).unwrap(), Category::B);
        assert_eq!(Category::of(15).unwrap(), Category::B);
        assert_eq!(Category::of(16).unwrap(), Category::I);
        assert_eq!(Category::of(45).unwrap(), Category::N);
        assert_eq!(Category::of(75).unwrap(), Category::O);
        assert_eq!(Category::of(0), Err(GameError::InvalidValue(0)));
        assert_eq!(Category::of(76), Err(GameError::InvalidValue(76)));
    }

    #[test]
    fn test_cell_display() {
        let cell = Cell::new(48).unwrap();
        assert_eq!(cell.to_string(), "G-48");
        assert!(!cell.marked);
    }
}
