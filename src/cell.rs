use crate::coord::Coord;
use crate::N_SMALLVEC_SIZE;
use smallvec::SmallVec;

/// What a cell is, as placed by the user. Survives between searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Empty,
    Obstacle,
    Source,
    Target,
}

/// What the last search did with a cell. Cleared by [Grid::reset_search](crate::Grid::reset_search).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SearchStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
    Path,
}

/// The single visible tag of a cell, derived from its [Role] and [SearchStatus].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Open,
    Closed,
    Obstacle,
    Source,
    Target,
    Path,
}

impl CellState {
    /// Glyph used by the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Obstacle => '#',
            CellState::Source => 'S',
            CellState::Target => 'T',
            CellState::Path => '*',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    pub role: Role,
    pub status: SearchStatus,
    pub(crate) neighbours: SmallVec<[Coord; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub fn new(coord: Coord) -> Cell {
        Cell {
            coord,
            role: Role::Empty,
            status: SearchStatus::Unvisited,
            neighbours: SmallVec::new(),
        }
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
    /// Walkable neighbours as of the last refresh. Not updated when obstacles change.
    pub fn neighbours(&self) -> &[Coord] {
        &self.neighbours
    }
    pub fn is_obstacle(&self) -> bool {
        self.role == Role::Obstacle
    }

    /// Roles placed by the user take precedence over search status.
    pub fn state(&self) -> CellState {
        match (self.role, self.status) {
            (Role::Obstacle, _) => CellState::Obstacle,
            (Role::Source, _) => CellState::Source,
            (Role::Target, _) => CellState::Target,
            (Role::Empty, SearchStatus::Unvisited) => CellState::Empty,
            (Role::Empty, SearchStatus::Open) => CellState::Open,
            (Role::Empty, SearchStatus::Closed) => CellState::Closed,
            (Role::Empty, SearchStatus::Path) => CellState::Path,
        }
    }

    /// Overwrites the tag. Role tags reset the search status; search tags leave the role alone.
    pub fn set_state(&mut self, state: CellState) {
        match state {
            CellState::Empty => self.set_role(Role::Empty),
            CellState::Obstacle => self.set_role(Role::Obstacle),
            CellState::Source => self.set_role(Role::Source),
            CellState::Target => self.set_role(Role::Target),
            CellState::Open => self.status = SearchStatus::Open,
            CellState::Closed => self.status = SearchStatus::Closed,
            CellState::Path => self.status = SearchStatus::Path,
        }
    }

    fn set_role(&mut self, role: Role) {
        self.role = role;
        self.status = SearchStatus::Unvisited;
    }
}
