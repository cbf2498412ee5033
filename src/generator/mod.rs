use crate::*;

pub use random::*;

mod random;

/// Strategy that turns a [`GameConfig`] into a concrete mine layout.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}

/// How much of the region around the starting cell is kept mine-free.
///
/// [`Session`](crate::Session) uses `SafeCell`: only the clicked cell itself
/// is protected, so the first reveal can still open next to a mine. The
/// whole-neighborhood `OpenArea` variant is available to callers that want a
/// guaranteed zero-count opening, but it is deliberately not the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartPolicy {
    /// No protection, the first reveal may hit a mine.
    Anywhere,
    /// The starting cell never holds a mine.
    SafeCell,
    /// The starting cell and its neighbors never hold mines.
    OpenArea,
}
