use std::collections::HashSet;

use crate::cell::Cell;

/// Sparse cell store for an unbounded world.
///
/// Two disjoint sets are tracked: the alive cells, and the border cells (empty
/// cells within one step of an alive cell). The border set is a derived cache:
/// it confines birth checks to a bounded candidate set instead of the whole
/// plane.
///
/// Both sets grow with the population and shrink as it dies off. There is no
/// hard cap; with an unbounded population the only failure mode is allocation
/// failure in the underlying sets.
#[derive(Default)]
pub struct CellGrid {
    alive: HashSet<Cell>,
    border: HashSet<Cell>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `cell` alive, removing it from the border set if it was there.
    ///
    /// Idempotent, and total over the coordinate space.
    pub fn activate(&mut self, cell: Cell) {
        self.border.remove(&cell);
        self.alive.insert(cell);
    }

    /// Empty both sets.
    pub fn clear(&mut self) {
        self.alive.clear();
        self.border.clear();
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    /// How many of the 8 Moore neighbors of `cell` are alive.
    ///
    /// `cell` itself never takes part in the count, alive or not.
    pub fn live_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors()
            .iter()
            .filter(|n| self.alive.contains(n))
            .count()
    }

    /// The cells of the inclusive 3x3 block around `cell` that are not alive.
    ///
    /// The center is part of the scan, so an empty `cell` shows up in its own
    /// output. Callers feed these into the border set, which dedupes across
    /// overlapping blocks.
    pub fn empty_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.block()
            .into_iter()
            .filter(|n| !self.alive.contains(n))
    }

    /// The alive set, for rendering and queries.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.alive
    }

    /// The border set. Disjoint from the alive set at all times.
    pub fn border(&self) -> &HashSet<Cell> {
        &self.border
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Add every empty cell around every alive cell to the border set.
    pub(crate) fn extend_border(&mut self) {
        for cell in &self.alive {
            for n in cell.block() {
                if !self.alive.contains(&n) {
                    self.border.insert(n);
                }
            }
        }
    }

    /// Remove `cell` from the alive set.
    pub(crate) fn kill(&mut self, cell: Cell) {
        self.alive.remove(&cell);
    }

    /// Drop `cell` from the border set.
    pub(crate) fn forget(&mut self, cell: Cell) {
        self.border.remove(&cell);
    }
}
