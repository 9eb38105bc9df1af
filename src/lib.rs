//! # grid_astar
//!
//! The engine behind an interactive pathfinding board. A square grid of cells is
//! edited by a front end (source, target, obstacles), every cell's walkable
//! neighbours are refreshed, and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic
//! finds a shortest four-directional path. Moves have unit cost.
//!
//! The search reports its progress through an observer closure that receives the grid
//! after every expanded cell and every path cell, which is where a front end redraws.
//! The observer can stop the search by returning [Cancelled].
//!
//! ```
//! use grid_astar::{search, CellState, Coord, Grid};
//!
//! let mut grid = Grid::new(5, 500);
//! let (source, target) = (Coord::new(0, 0), Coord::new(0, 4));
//! grid.set_state(source, CellState::Source);
//! grid.set_state(target, CellState::Target);
//! grid.set_state(Coord::new(0, 1), CellState::Obstacle);
//! grid.refresh_all_neighbours();
//! assert!(search(&mut grid, source, target, |_: &Grid| Ok(())));
//! ```
pub mod astar;
pub mod cell;
pub mod config;
pub mod coord;
pub mod editor;
pub mod error;
pub mod grid;

pub use astar::{search, search_path, SearchOutcome};
pub use cell::{Cell, CellState, Role, SearchStatus};
pub use config::GridConfig;
pub use coord::Coord;
pub use editor::Editor;
pub use error::{Cancelled, ConfigError, EditError, Error, Result};
pub use grid::Grid;

/// Cost of a single move between neighbouring cells.
pub const EDGE_COST: usize = 1;
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_WIDTH: u32 = 1000;
/// A cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
