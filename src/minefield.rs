use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable mine layout of one board: which cells hold mines, and the
/// adjacency queries everything else is built on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .expect("mine count fits CellCount");
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly the given coordinates.
    /// Mainly useful for fixed-layout tests and puzzle setups.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig {
            rows,
            cols,
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        in_bounds(coords, self.size())
            .then_some(coords)
            .ok_or(GameError::InvalidCoords)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            rows.try_into().expect("row count fits Coord"),
            cols.try_into().expect("col count fits Coord"),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the up-to-8 neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        crate::types::iter_neighbors(coords, self.size())
    }

    pub(crate) fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        let err = Minefield::from_mine_coords((3, 3), &[(3, 0)]);
        assert_eq!(err, Err(GameError::InvalidCoords));
    }

    #[test]
    fn adjacent_counts_clip_at_the_border() {
        let field = Minefield::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        assert_eq!(field.adjacent_mine_count((0, 1)), 1);
        assert_eq!(field.adjacent_mine_count((1, 1)), 1);
        assert_eq!(field.adjacent_mine_count((2, 2)), 0);
        assert_eq!(field.adjacent_mine_count((0, 2)), 0);
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let field = Minefield::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(field.mine_count(), 1);
        assert_eq!(field.safe_cell_count(), 3);
    }

    #[test]
    fn config_round_trips_through_layout() {
        let field = Minefield::from_mine_coords((4, 7), &[(1, 2), (3, 6)]).unwrap();
        let config = field.game_config();
        assert_eq!(config.size(), (4, 7));
        assert_eq!(config.mines, 2);
    }
}
