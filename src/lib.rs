//! Pure Minesweeper engine, independent of any UI framework.
//!
//! The crate owns board generation (with a protected first click), the
//! flood-fill reveal, flag bookkeeping, and the session state machine.
//! A shell drives it through [`Session`] and redraws from the returned
//! state; nothing here renders, blocks, or performs I/O.

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod minefield;
mod session;
mod types;

/// Board shape and mine count of one game.
///
/// A config constructed through [`GameConfig::new`] is always playable:
/// positive dimensions and at least one safe cell, so generation can honor
/// the first-click exclusion. Violations are programmer errors caught at
/// construction, never at play time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Const constructor for statically-known-valid profiles.
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines > mult(rows, cols) - 1 {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(GameConfig::new(0, 9, 1), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(9, 0, 1), Err(GameError::InvalidSize));
    }

    #[test]
    fn rejects_mine_count_filling_the_board() {
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::TooManyMines));
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn mineless_config_is_valid() {
        let config = GameConfig::new(1, 1, 0).unwrap();
        assert_eq!(config.safe_cells(), 1);
    }
}
