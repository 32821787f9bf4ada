// grid.rs - Grid geometry for the toroidal Game of Life

use std::num::NonZeroUsize;

use anyhow::anyhow;

use crate::Result;

/// Side length of a square, wrap-around grid. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize(NonZeroUsize);

/// Cell position: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl GridSize {
    /// Positive sizes whose cell count fits in `usize`.
    pub fn new(size: i64) -> Result<Self> {
        let side = usize::try_from(size)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(anyhow!("grid size must be a positive integer, got {}", size))?;
        side.get()
            .checked_mul(side.get())
            .ok_or(anyhow!("grid size {} is too large", size))?;
        Ok(Self(side))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Total number of cells (N*N).
    pub fn cells(self) -> usize {
        self.get() * self.get()
    }

    /// Row-major index of `coord`. Callers pass in-range coordinates.
    #[inline]
    pub fn index(self, coord: Coord) -> usize {
        debug_assert!(
            coord.x < self.get() && coord.y < self.get(),
            "{:?} is outside a {} grid",
            coord,
            self
        );
        coord.x * self.get() + coord.y
    }

    #[inline]
    pub fn coord(self, index: usize) -> Coord {
        Coord::new(index / self.get(), index % self.get())
    }

    /// One step towards 0, wrapping to the last row/column.
    #[inline]
    pub fn dec(self, position: usize) -> usize {
        if position > 0 { position - 1 } else { self.get() - 1 }
    }

    /// One step away from 0, wrapping to the first row/column.
    #[inline]
    pub fn inc(self, position: usize) -> usize {
        if position + 1 == self.get() { 0 } else { position + 1 }
    }

    /// The 8 cells around `coord` on the torus, row-major from (x-1, y-1).
    ///
    /// On 1x1 and 2x2 grids a coordinate can show up more than once.
    #[rustfmt::skip]
    pub fn neighbors_of(self, coord: Coord) -> [Coord; 8] {
        let Coord { x, y } = coord;
        let (up, down) = (self.dec(x), self.inc(x));
        let (left, right) = (self.dec(y), self.inc(y));
        [
            Coord::new(up, left),   Coord::new(up, y),   Coord::new(up, right),
            Coord::new(x, left),                         Coord::new(x, right),
            Coord::new(down, left), Coord::new(down, y), Coord::new(down, right),
        ]
    }

    /// All coordinates in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.cells()).map(move |index| self.coord(index))
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.get(), self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(GridSize::new(0).is_err());
        assert!(GridSize::new(-4).is_err());
        assert_eq!(size(7).get(), 7);
        assert_eq!(size(7).cells(), 49);
    }

    #[test]
    fn rejects_sizes_whose_cell_count_overflows() {
        assert!(GridSize::new(1 << 32).is_err());
        assert!(GridSize::new(i64::MAX).is_err());
        assert!(GridSize::new(1 << 15).is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn index_rejects_out_of_range_coords() {
        size(3).index(Coord::new(0, 5));
    }

    #[test]
    fn neighbors_wrap_around_corner() {
        let got = size(3).neighbors_of(Coord::new(0, 0));
        let expected = [(2, 2), (2, 0), (2, 1), (0, 2), (0, 1), (1, 2), (1, 0), (1, 1)];
        assert_eq!(got, expected.map(Coord::from));
    }

    #[test]
    fn neighbors_wrap_around_far_corner() {
        let got = size(4).neighbors_of(Coord::new(3, 3));
        let expected = [(2, 2), (2, 3), (2, 0), (3, 2), (3, 0), (0, 2), (0, 3), (0, 0)];
        assert_eq!(got, expected.map(Coord::from));
    }

    #[test]
    fn neighbors_stay_in_bounds_for_every_size() {
        for n in 1..=6 {
            let grid = size(n);
            for coord in grid.coords() {
                let neighbors = grid.neighbors_of(coord);
                assert_eq!(neighbors.len(), 8);
                for neighbor in neighbors {
                    assert!(neighbor.x < grid.get() && neighbor.y < grid.get());
                }
            }
        }
    }

    #[test]
    fn single_cell_grid_is_its_own_neighbor() {
        let grid = size(1);
        assert_eq!(grid.neighbors_of(Coord::new(0, 0)), [Coord::new(0, 0); 8]);
    }

    #[test]
    fn coords_are_row_major() {
        let coords: Vec<Coord> = size(2).coords().collect();
        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)].map(Coord::from));
    }
}
