/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) const fn in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    coords.0 < bounds.0 && coords.1 < bounds.1
}

/// The 8-connected neighborhood, row-major.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it remains in bounds.
fn apply_delta(center: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = center.0.checked_add_signed(delta.0)?;
    let col = center.1.checked_add_signed(delta.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// Iterates the up-to-8 in-bounds neighbors of `center`, clipped to `bounds`.
pub fn iter_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| apply_delta(center, delta, bounds))
}
