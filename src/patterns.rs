use crate::Coord;
use crate::cell::Cell;
use crate::grid::CellGrid;

/// The canonical 5-cell glider, heading south-east.
///
/// Translates by (+1, +1) every 4 generations.
pub const GLIDER: &[(Coord, Coord)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// The 2x2 block, the smallest still life.
pub const BLOCK: &[(Coord, Coord)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Three cells in a row, oscillates with period 2.
pub const BLINKER: &[(Coord, Coord)] = &[(0, 0), (1, 0), (2, 0)];

/// Chaotic 5-cell methuselah, stabilizes after ~1100 generations.
pub const R_PENTOMINO: &[(Coord, Coord)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

/// Activate every cell of `pattern`, translated by `(dx, dy)`.
pub fn stamp(grid: &mut CellGrid, pattern: &[(Coord, Coord)], dx: Coord, dy: Coord) {
    for &(x, y) in pattern {
        grid.activate(Cell::new(x + dx, y + dy));
    }
}
