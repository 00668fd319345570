use core::fmt::Debug;

use crate::Coord;

/// A single cell on the unbounded lattice.
///
/// Equality and hashing go by the coordinate pair. Both coordinates take part
/// in the hash, so cells that differ along only one axis still spread across
/// buckets.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The 8 cells of the Moore neighborhood.
    ///
    /// Never includes `self`. A cell is not its own neighbor, so counting
    /// alive members of this array on an alive cell never counts the cell
    /// itself.
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;

        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }

    /// The inclusive 3x3 block centered on `self`, center included.
    pub fn block(self) -> [Cell; 9] {
        let Cell { x, y } = self;

        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::Cell;

    #[test]
    fn neighbors_exclude_self() {
        let cell = Cell::new(3, -7);

        assert!(!cell.neighbors().contains(&cell));
        assert_eq!(cell.neighbors().len(), 8);
    }

    #[test]
    fn block_includes_self() {
        let cell = Cell::new(0, 0);

        assert!(cell.block().contains(&cell));
        assert_eq!(cell.block().len(), 9);
    }
}
