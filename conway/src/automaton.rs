// automaton.rs - Cell states and the B3/S23 rule on a torus

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Coord, GridSize};

/// Current-generation status of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not yet touched by a compute pass since the last allocation.
    #[default]
    Unset,
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn is_set(self) -> bool {
        self != CellState::Unset
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// One committed cell, with the number of alive cells committed so far
/// in row-major order (this cell included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub coord: Coord,
    pub alive: bool,
    pub alive_so_far: usize,
}

/// Everything a single commit changed, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFrame {
    pub generation: u32,
    pub size: GridSize,
    pub updates: Vec<CellUpdate>,
}

impl GenerationFrame {
    /// Final cumulative alive count of the frame.
    pub fn alive_total(&self) -> usize {
        self.updates.last().map_or(0, |update| update.alive_so_far)
    }
}

/// Conway's rule: survival on 2 or 3, birth on 3.
#[rustfmt::skip]
pub fn next_status(alive: bool, alive_neighbors: usize) -> bool {
    match (alive, alive_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// The N*N grid, double buffered: `current` is only read while a
/// generation is computed, `staged` is only read while it is committed.
pub struct Automaton {
    size: GridSize,
    current: Vec<CellState>,
    staged: Vec<bool>,
    rng: StdRng,
}

impl Automaton {
    pub fn new(size: GridSize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Same as [`Automaton::new`] but with a reproducible seeding sequence.
    pub fn with_seed(size: GridSize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, rng: StdRng) -> Self {
        Self {
            size,
            current: vec![CellState::Unset; size.cells()],
            staged: vec![false; size.cells()],
            rng,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Drop every cell and start over with an unset `size` x `size` grid.
    pub fn allocate(&mut self, size: GridSize) {
        debug!("allocating a fresh {} grid", size);
        self.size = size;
        self.current = vec![CellState::Unset; size.cells()];
        self.staged = vec![false; size.cells()];
    }

    pub fn reallocate(&mut self) {
        self.allocate(self.size);
    }

    /// Stage the next generation for every cell without touching the
    /// current one. Unset cells get a coin flip and skip the rule.
    pub fn compute_next_generation(&mut self) {
        for index in 0..self.size.cells() {
            let next = match self.current[index] {
                CellState::Unset => self.rng.gen_bool(0.5),
                state => {
                    let count = self.alive_neighbors(self.size.coord(index));
                    next_status(state.is_alive(), count)
                }
            };
            self.staged[index] = next;
        }
    }

    /// Move staged statuses into the current generation and clear them.
    pub fn commit_generation(&mut self, generation: u32) -> GenerationFrame {
        let mut alive_so_far = 0;
        let mut updates = Vec::with_capacity(self.size.cells());

        for index in 0..self.size.cells() {
            let alive = std::mem::take(&mut self.staged[index]);
            self.current[index] = CellState::from(alive);
            if alive {
                alive_so_far += 1;
            }
            updates.push(CellUpdate { coord: self.size.coord(index), alive, alive_so_far });
        }

        GenerationFrame { generation, size: self.size, updates }
    }

    pub fn neighbors_of(&self, coord: Coord) -> [Coord; 8] {
        self.size.neighbors_of(coord)
    }

    /// Alive cells among the 8 neighbors of `coord`; unset cells count as dead.
    pub fn alive_neighbors(&self, coord: Coord) -> usize {
        self.neighbors_of(coord)
            .iter()
            .filter(|&&neighbor| self.cell(neighbor).is_alive())
            .count()
    }

    pub fn cell(&self, coord: Coord) -> CellState {
        self.current[self.size.index(coord)]
    }

    pub fn staged(&self, coord: Coord) -> bool {
        self.staged[self.size.index(coord)]
    }

    /// Define one cell of the current generation.
    pub fn set_cell(&mut self, coord: Coord, alive: bool) {
        let index = self.size.index(coord);
        self.current[index] = CellState::from(alive);
    }

    /// Every cell dead, nothing staged.
    pub fn clear(&mut self) {
        self.current.fill(CellState::Dead);
        self.staged.fill(false);
    }

    pub fn alive_count(&self) -> usize {
        self.current.iter().filter(|state| state.is_alive()).count()
    }

    /// True once every cell has a defined status.
    pub fn is_materialized(&self) -> bool {
        self.current.iter().all(|state| state.is_set())
    }
}
