use core::fmt;
use smallvec::SmallVec;

/// A `(row, col)` position on the grid. Used as the hash key for all search
/// bookkeeping, so cells are never compared by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), the
    /// heuristic used by the search. Exact on an open grid.
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The in-bounds von Neumann neighbourhood on a `rows × rows` grid in the fixed
    /// order south, north, east, west. Obstacles are not filtered here.
    pub fn neumann_neighborhood(&self, rows: usize) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        if self.row + 1 < rows {
            out.push(Coord::new(self.row + 1, self.col));
        }
        if self.row > 0 {
            out.push(Coord::new(self.row - 1, self.col));
        }
        if self.col + 1 < rows {
            out.push(Coord::new(self.row, self.col + 1));
        }
        if self.col > 0 {
            out.push(Coord::new(self.row, self.col - 1));
        }
        out
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_is_south_north_east_west() {
        let n = Coord::new(1, 1).neumann_neighborhood(3);
        assert_eq!(
            n.as_slice(),
            &[
                Coord::new(2, 1),
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 0)
            ]
        );
    }

    #[test]
    fn corner_has_two_neighbours() {
        assert_eq!(Coord::new(0, 0).neumann_neighborhood(4).len(), 2);
        assert_eq!(Coord::new(3, 3).neumann_neighborhood(4).len(), 2);
        assert!(Coord::new(0, 0).neumann_neighborhood(1).is_empty());
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(4, 1);
        let b = Coord::new(0, 3);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
    }
}
