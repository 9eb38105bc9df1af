//! Headless model of the interactive board: the placement rules behind mouse clicks
//! and key presses, without any drawing. A front end forwards its input here and
//! draws [Editor::grid] from the observer it passes to [Editor::run].
use crate::astar::{search_path, SearchOutcome};
use crate::config::GridConfig;
use crate::coord::Coord;
use crate::error::{Cancelled, EditError, Result};
use crate::grid::Grid;
use crate::CellState;
use log::{debug, info};

#[derive(Clone, Debug)]
pub struct Editor {
    config: GridConfig,
    grid: Grid,
    source: Option<Coord>,
    target: Option<Coord>,
}

impl Default for Editor {
    fn default() -> Editor {
        Editor::new(GridConfig::default())
    }
}

impl Editor {
    pub fn new(config: GridConfig) -> Editor {
        Editor {
            config,
            grid: Grid::from_config(&config),
            source: None,
            target: None,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn source(&self) -> Option<Coord> {
        self.source
    }
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// Maps a pointer position in pixels to a cell. The horizontal axis selects the row.
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Result<Coord> {
        let gap = self.config.cell_size().max(1);
        let coord = Coord::new((x / gap) as usize, (y / gap) as usize);
        if self.grid.in_bounds(coord) {
            Ok(coord)
        } else {
            Err(EditError::OffBoard { x, y }.into())
        }
    }

    fn check(&self, coord: Coord) -> Result<()> {
        if self.grid.in_bounds(coord) {
            Ok(())
        } else {
            Err(EditError::OutOfBounds(coord).into())
        }
    }

    /// Left click: places the source first, then the target, then obstacles. The
    /// source and target themselves are never overwritten.
    pub fn primary(&mut self, coord: Coord) -> Result<()> {
        self.check(coord)?;
        let is_source = self.source == Some(coord);
        let is_target = self.target == Some(coord);
        if self.source.is_none() && !is_target {
            debug!("Placing source at {}", coord);
            self.source = Some(coord);
            self.grid.set_state(coord, CellState::Source);
        } else if self.target.is_none() && !is_source {
            debug!("Placing target at {}", coord);
            self.target = Some(coord);
            self.grid.set_state(coord, CellState::Target);
        } else if !is_source && !is_target {
            self.grid.set_state(coord, CellState::Obstacle);
        }
        Ok(())
    }

    /// Right click: empties the cell, forgetting it as source or target.
    pub fn secondary(&mut self, coord: Coord) -> Result<()> {
        self.check(coord)?;
        self.grid.set_state(coord, CellState::Empty);
        if self.source == Some(coord) {
            self.source = None;
        } else if self.target == Some(coord) {
            self.target = None;
        }
        Ok(())
    }

    /// Discards the grid and starts over with an empty one.
    pub fn clear(&mut self) {
        debug!("Clearing the board");
        self.grid = Grid::from_config(&self.config);
        self.source = None;
        self.target = None;
    }

    /// Refreshes every neighbour list and searches from source to target. Marks of a
    /// previous run are cleared first. Returns `None` until both endpoints are placed.
    pub fn run<F>(&mut self, observer: F) -> Option<SearchOutcome>
    where
        F: FnMut(&Grid) -> std::result::Result<(), Cancelled>,
    {
        let (source, target) = (self.source?, self.target?);
        info!("Running search on a {0}x{0} board", self.grid.rows());
        self.grid.reset_search();
        self.grid.refresh_all_neighbours();
        Some(search_path(&mut self.grid, source, target, observer))
    }
}
