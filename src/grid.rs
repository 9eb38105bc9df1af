use crate::cell::{Cell, CellState, SearchStatus};
use crate::config::GridConfig;
use crate::coord::Coord;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] owns a square `rows × rows` matrix of [Cell]s in row-major order. Besides the
/// cells it keeps a [UnionFind] over walkable cells so a driver can tell up front
/// whether two cells are connected. The components are only rebuilt on request.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    width: u32,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds `rows × rows` empty cells. `width` is the pixel width of the board.
    pub fn new(rows: usize, width: u32) -> Grid {
        let cells = iproduct!(0..rows, 0..rows)
            .map(|(row, col)| Cell::new(Coord::new(row, col)))
            .collect();
        Grid {
            rows,
            width,
            cells,
            components: UnionFind::new(rows * rows),
        }
    }
    pub fn from_config(config: &GridConfig) -> Grid {
        Grid::new(config.rows, config.width)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn cell_size(&self) -> u32 {
        self.width / self.rows as u32
    }
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.rows
    }
    fn ix(&self, coord: Coord) -> usize {
        coord.row * self.rows + coord.col
    }
    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.rows, 0..self.rows).map(|(row, col)| Coord::new(row, col))
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Lookup without a bounds check on the coordinate pair; the caller guarantees
    /// `row, col < rows`. Panics otherwise.
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.rows + col]
    }
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.in_bounds(coord) {
            Some(&self.cells[self.ix(coord)])
        } else {
            None
        }
    }
    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.in_bounds(coord) {
            let ix = self.ix(coord);
            Some(&mut self.cells[ix])
        } else {
            None
        }
    }
    pub fn state(&self, coord: Coord) -> CellState {
        self.cells[self.ix(coord)].state()
    }
    pub fn status(&self, coord: Coord) -> SearchStatus {
        self.cells[self.ix(coord)].status
    }
    pub fn is_obstacle(&self, coord: Coord) -> bool {
        self.cells[self.ix(coord)].is_obstacle()
    }

    /// Overwrites the tag of a cell. Neighbour snapshots and components are left as
    /// they are.
    pub fn set_state(&mut self, coord: Coord, state: CellState) {
        let ix = self.ix(coord);
        self.cells[ix].set_state(state);
    }

    fn walkable_neighbours(&self, coord: Coord) -> SmallVec<[Coord; N_SMALLVEC_SIZE]> {
        coord
            .neumann_neighborhood(self.rows)
            .into_iter()
            .filter(|n| !self.is_obstacle(*n))
            .collect()
    }

    /// Recomputes the neighbour snapshot of one cell: south, north, east, west, keeping
    /// those inside the grid that are not obstacles right now.
    pub fn refresh_neighbours(&mut self, coord: Coord) {
        let neighbours = self.walkable_neighbours(coord);
        let ix = self.ix(coord);
        self.cells[ix].neighbours = neighbours;
    }

    /// Refreshes every cell. Needed before a search whenever obstacles moved.
    pub fn refresh_all_neighbours(&mut self) {
        debug!("Refreshing neighbours of {} cells", self.cells.len());
        for coord in self.coords().collect::<Vec<_>>() {
            self.refresh_neighbours(coord);
        }
    }

    /// Forgets what the last search marked. Roles are kept.
    pub fn reset_search(&mut self) {
        debug!("Clearing search marks");
        for cell in &mut self.cells {
            cell.status = SearchStatus::Unvisited;
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.rows * self.rows);
        for coord in self.coords().collect::<Vec<_>>() {
            if self.is_obstacle(coord) {
                continue;
            }
            let parent_ix = self.ix(coord);
            // South and east suffice, the other two directions are covered by the neighbour.
            let forward = [
                Coord::new(coord.row + 1, coord.col),
                Coord::new(coord.row, coord.col + 1),
            ];
            for n in forward {
                if self.in_bounds(n) && !self.is_obstacle(n) {
                    let n_ix = self.ix(n);
                    self.components.union(parent_ix, n_ix);
                }
            }
        }
    }

    /// Checks if start and goal are walkable and on the same component. Reflects the
    /// obstacles as of the last [generate_components](Self::generate_components).
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        self.in_bounds(start)
            && self.in_bounds(goal)
            && !self.is_obstacle(start)
            && !self.is_obstacle(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows.max(1)) {
            let line: String = row.iter().map(|c| c.state().glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
