use tracing::debug;

use crate::cell::Cell;
use crate::grid::CellGrid;
use crate::rules::RuleSet;

/// The simulation: a [`CellGrid`] plus the stepper that advances it one
/// generation at a time.
///
/// All birth and death decisions for a generation are made against the alive
/// set as it stood when the generation began. Decisions are staged in the
/// pending lists and committed in one batch at the end of the step, so the
/// whole population updates simultaneously and the outcome does not depend on
/// iteration order.
pub struct World {
    grid: CellGrid,
    rules: RuleSet,

    /// Alive cells that die this generation.
    to_kill: Vec<Cell>,

    /// Border cells that come alive this generation.
    to_revive: Vec<Cell>,

    /// Border cells with no alive neighbor left, dropped from the border set.
    to_prune: Vec<Cell>,

    generation: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl World {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            grid: CellGrid::new(),
            rules,
            to_kill: Vec::new(),
            to_revive: Vec::new(),
            to_prune: Vec::new(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Mutable access to the store, for seeding between generations.
    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark a cell alive, e.g. from user input. Applied immediately, between
    /// generations.
    pub fn activate(&mut self, cell: Cell) {
        self.grid.activate(cell);
    }

    /// Reset to an empty simulation.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Advance the simulation by one generation.
    pub fn advance(&mut self) {
        debug_assert!(self.to_kill.is_empty());
        debug_assert!(self.to_revive.is_empty());
        debug_assert!(self.to_prune.is_empty());

        // Deaths: alive cells outside the survival band.
        for &cell in self.grid.cells() {
            let n = self.grid.live_neighbors(cell);

            if !self.rules.survives(n) {
                self.to_kill.push(cell);
            }
        }

        // Every empty cell next to an alive one is a birth candidate.
        self.grid.extend_border();

        // Births and stale-border pruning, still against the pre-step alive
        // set. A count of 0 means the candidate no longer borders anything.
        for &cell in self.grid.border() {
            let n = self.grid.live_neighbors(cell);

            if self.rules.born(n) {
                self.to_revive.push(cell);
            } else if n == 0 {
                self.to_prune.push(cell);
            }
        }

        // Commit. Nothing above mutated the alive set, so every decision saw
        // the same snapshot.
        for cell in self.to_revive.drain(..) {
            self.grid.activate(cell);
        }

        for cell in self.to_kill.drain(..) {
            self.grid.kill(cell);
        }

        for cell in self.to_prune.drain(..) {
            self.grid.forget(cell);
        }

        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation advanced"
        );
    }
}
