use serde::{Deserialize, Serialize};

/// Player-visible state of one grid position.
///
/// The `Revealed` payload is the number of mines among the cell's up-to-8
/// neighbors, fixed at reveal time. Mine membership itself lives in the
/// [`Minefield`](crate::Minefield), so a revealed mine carries a don't-care
/// count of 0 and shells draw it via [`Game::has_mine_at`](crate::Game::has_mine_at).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Hidden,
    Revealed(u8),
    Flagged,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
