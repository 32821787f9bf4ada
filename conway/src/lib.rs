//! Conway's Game of Life (B3/S23) on a fixed-size torus, driven on a timer.

pub mod automaton;
pub mod driver;
pub mod errors;
pub mod grid;
pub mod patterns;
pub mod presenter;

pub use automaton::{Automaton, CellState, CellUpdate, GenerationFrame};
pub use driver::{Driver, DriverConfig, DriverHandle, DriverState, Tick};
pub use errors::LifeError;
pub use grid::{Coord, GridSize};
pub use presenter::{BoardSnapshot, LatestBoard, Notification, Presenter};

pub type Result<T> = std::result::Result<T, LifeError>;
