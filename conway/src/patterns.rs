use crate::automaton::Automaton;
use crate::grid::Coord;

/// A named shape, as (row, col) offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

impl Pattern {
    /// Absolute cells of the pattern placed at `origin`, wrapped onto an
    /// `side` x `side` torus.
    pub fn cells_at(&self, origin: Coord, side: usize) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .map(move |&(row, col)| Coord::new((origin.x + row) % side, (origin.y + col) % side))
    }

    /// Clear the grid and bring the pattern to life at `origin`.
    pub fn apply(&self, automaton: &mut Automaton, origin: Coord) {
        automaton.clear();
        let side = automaton.size().get();
        for coord in self.cells_at(origin, side) {
            automaton.set_cell(coord, true);
        }
    }
}
