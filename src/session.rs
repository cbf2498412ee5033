use serde::{Deserialize, Serialize};

use crate::*;

/// Built-in difficulty tiers. Shells may also feed [`Session`] any custom
/// profile built through [`GameConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Normal, Self::Hard, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Normal => GameConfig::new_unchecked(9, 9, 10),
            Self::Hard => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal (9x9)",
            Self::Hard => "Hard (16x16)",
            Self::Expert => "Expert (16x30)",
        }
    }
}

/// Coarse lifecycle state a shell renders from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    DifficultySelection,
    Playing,
    Won,
    Lost,
}

/// One player's game session: the chosen profile, the (lazily generated)
/// board, and the selection/playing/terminal lifecycle.
///
/// The board does not exist until the first reveal. That reveal generates it
/// with [`StartPolicy::SafeCell`] excluding the clicked cell, so the first
/// click can never hit a mine. Anomalous input (out-of-range coordinates,
/// operations in the wrong phase) is a silent no-op: stale clicks from a UI
/// must never crash or corrupt the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    game: Option<Game>,
    selecting: bool,
    seed: u64,
}

impl Session {
    /// Fresh session in the difficulty-selection phase.
    pub fn new() -> Self {
        Self {
            config: Difficulty::Normal.config(),
            game: None,
            selecting: true,
            seed: rand::random(),
        }
    }

    /// Like [`Session::new`] followed by [`select_difficulty`](Self::select_difficulty),
    /// but with a pinned board seed. Boards become reproducible, which is
    /// what tests and replays want.
    pub fn seeded(profile: GameConfig, seed: u64) -> Self {
        let mut session = Self::new();
        session.select_difficulty(profile);
        session.seed = seed;
        session
    }

    pub fn phase(&self) -> Phase {
        if self.selecting {
            return Phase::DifficultySelection;
        }
        match &self.game {
            None => Phase::Playing,
            Some(game) => match game.state() {
                GameState::InProgress => Phase::Playing,
                GameState::Won => Phase::Won,
                GameState::Lost => Phase::Lost,
            },
        }
    }

    /// True from difficulty selection until the first reveal generates the
    /// board.
    pub fn awaiting_first_click(&self) -> bool {
        !self.selecting && self.game.is_none()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn flag_count(&self) -> CellCount {
        self.game.as_ref().map_or(0, Game::flag_count)
    }

    pub fn mines_left(&self) -> isize {
        self.game
            .as_ref()
            .map_or(self.config.mines as isize, Game::mines_left)
    }

    /// Cell state for rendering; `Hidden` while the board is still deferred
    /// or the coordinates are out of range.
    pub fn cell_at(&self, row: Coord, col: Coord) -> Cell {
        match &self.game {
            Some(game) if in_bounds((row, col), game.size()) => game.cell_at((row, col)),
            _ => Cell::Hidden,
        }
    }

    /// Whether the generated board holds a mine at `(row, col)`. `false`
    /// while the board is deferred; shells only need this to draw mine
    /// glyphs after a loss.
    pub fn has_mine_at(&self, row: Coord, col: Coord) -> bool {
        match &self.game {
            Some(game) if in_bounds((row, col), game.size()) => game.has_mine_at((row, col)),
            _ => false,
        }
    }

    /// Start playing the given profile: fresh deferred board, fresh seed,
    /// flag counter reset. Callable from any phase.
    pub fn select_difficulty(&mut self, profile: GameConfig) {
        log::debug!(
            "new game: {}x{}, {} mines",
            profile.rows,
            profile.cols,
            profile.mines
        );
        self.config = profile;
        self.game = None;
        self.selecting = false;
        self.seed = rand::random();
    }

    /// Same profile, fresh board.
    pub fn reset(&mut self) {
        self.select_difficulty(self.config);
    }

    /// Discard the board and return to difficulty selection.
    pub fn back_to_selection(&mut self) {
        self.game = None;
        self.selecting = true;
    }

    /// Reveal a cell, generating the board on the very first reveal so the
    /// clicked cell is guaranteed safe. Returns whether anything changed.
    pub fn reveal(&mut self, row: Coord, col: Coord) -> bool {
        if self.phase() != Phase::Playing {
            return false;
        }
        if !in_bounds((row, col), self.config.size()) {
            return false;
        }

        let Self {
            config,
            game,
            seed,
            ..
        } = self;
        let game = game.get_or_insert_with(|| {
            let generator =
                RandomMinefieldGenerator::new(*seed, (row, col), StartPolicy::SafeCell);
            Game::new(generator.generate(*config))
        });

        game.reveal((row, col)).is_ok_and(|r| r.has_update())
    }

    /// Toggle a flag. A no-op outside the playing phase, out of range, on
    /// revealed cells, and while the board is still deferred (there is
    /// nothing to flag before the first reveal).
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> bool {
        if self.phase() != Phase::Playing {
            return false;
        }
        match &mut self.game {
            None => false,
            Some(game) => game
                .toggle_flag((row, col))
                .is_ok_and(|r| r.has_update()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
