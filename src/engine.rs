use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game over a fixed mine layout: the visible grid, reveal propagation,
/// flag bookkeeping, and win/loss detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    minefield: Minefield,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flag_count: CellCount,
    state: GameState,
}

impl Game {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        Self {
            minefield,
            grid: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flag_count: 0,
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ended(&self) -> bool {
        self.state.is_final()
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many mines have not been flagged yet. Negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.minefield.mine_count() as isize) - (self.flag_count as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.minefield.contains_mine(coords)
    }

    /// Flag or unflag a hidden cell. Revealed cells never change.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.minefield.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(match self.grid[coords.to_nd_index()] {
            Cell::Hidden => {
                self.grid[coords.to_nd_index()] = Cell::Flagged;
                self.flag_count += 1;
                Changed
            }
            Cell::Flagged => {
                self.grid[coords.to_nd_index()] = Cell::Hidden;
                self.flag_count -= 1;
                Changed
            }
            Cell::Revealed(_) => NoChange,
        })
    }

    /// Reveal a hidden cell, cascading across zero-count regions.
    ///
    /// Hitting a mine reveals every mine on the board and ends the game;
    /// revealing the last safe cell wins it. Flagged and already-revealed
    /// targets are a `NoChange`.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_in_progress()?;

        if !self.grid[coords.to_nd_index()].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.minefield.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.reveal_all_mines();
            self.state = GameState::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        let count = self.reveal_safe_cell(coords);
        if count == 0 {
            self.cascade_from(coords);
        }

        if self.revealed_count == self.minefield.safe_cell_count() {
            self.state = GameState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Marks a known-safe, known-hidden cell revealed and returns its count.
    fn reveal_safe_cell(&mut self, coords: Coord2) -> u8 {
        let count = self.minefield.adjacent_mine_count(coords);
        self.grid[coords.to_nd_index()] = Cell::Revealed(count);
        self.revealed_count += 1;
        log::trace!("revealed {:?}, adjacent mines: {}", coords, count);
        count
    }

    /// Breadth-first expansion from a zero-count cell. Revealing a cell
    /// before it is enqueued is the visited check: a cell that is no longer
    /// `Hidden` can never be processed again, so each cell is revealed at
    /// most once and the loop visits at most `rows * cols` cells.
    fn cascade_from(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.minefield.iter_neighbors(visit_coords) {
                if !self.grid[pos.to_nd_index()].is_hidden() || self.minefield.contains_mine(pos) {
                    continue;
                }
                if self.reveal_safe_cell(pos) == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    /// Loss sweep: every mine becomes visible, whether hidden or flagged.
    /// Flags on safe cells are left alone; the counter drops only for the
    /// flagged mines that just turned face-up.
    fn reveal_all_mines(&mut self) {
        for coords in self.minefield.iter_coords() {
            if !self.minefield.contains_mine(coords) {
                continue;
            }
            if self.grid[coords.to_nd_index()].is_flagged() {
                self.flag_count -= 1;
            }
            self.grid[coords.to_nd_index()] = Cell::Revealed(0);
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
