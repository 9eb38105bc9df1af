//! A* over the neighbour snapshots of a [Grid] with the Manhattan heuristic and unit
//! edge costs. All bookkeeping is keyed by [Coord] and lives only for one call.
use crate::cell::{CellState, Role};
use crate::coord::Coord;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::EDGE_COST;
use fxhash::{FxHashMap, FxHashSet};
use log::{info, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry. Cells carry no meaningful order, so ties on `f_score` are broken by
/// insertion sequence: the older entry wins.
struct FrontierEntry {
    f_score: usize,
    seq: u64,
    cell: Coord,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.seq == other.seq
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the smallest (f_score, seq)
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The cells walked from source to target, source excluded and target included.
    Found(Vec<Coord>),
    Exhausted,
    Cancelled,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            SearchOutcome::Found(path) => Some(path.as_slice()),
            _ => None,
        }
    }
}

struct SearchContext {
    came_from: FxHashMap<Coord, Coord>,
    g_score: FxHashMap<Coord, usize>,
    f_score: FxHashMap<Coord, usize>,
    open_set: BinaryHeap<FrontierEntry>,
    open_set_membership: FxHashSet<Coord>,
    seq: u64,
}

impl SearchContext {
    fn new(source: Coord, target: Coord) -> SearchContext {
        let mut context = SearchContext {
            came_from: FxHashMap::default(),
            g_score: FxHashMap::default(),
            f_score: FxHashMap::default(),
            open_set: BinaryHeap::new(),
            open_set_membership: FxHashSet::default(),
            seq: 0,
        };
        let f = source.manhattan_distance(&target);
        context.g_score.insert(source, 0);
        context.f_score.insert(source, f);
        context.open_set.push(FrontierEntry {
            f_score: f,
            seq: 0,
            cell: source,
        });
        context.open_set_membership.insert(source);
        context
    }
    fn g(&self, cell: Coord) -> usize {
        self.g_score.get(&cell).copied().unwrap_or(usize::MAX)
    }
    fn f(&self, cell: Coord) -> usize {
        self.f_score.get(&cell).copied().unwrap_or(usize::MAX)
    }
    fn push(&mut self, cell: Coord, f_score: usize) {
        self.seq += 1;
        self.open_set.push(FrontierEntry {
            f_score,
            seq: self.seq,
            cell,
        });
    }
}

/// Runs A* from `source` to `target` and reports whether a path exists.
///
/// Requires `source != target`, both inside `grid`, and fresh neighbour snapshots
/// (see [Grid::refresh_all_neighbours]); otherwise the result is unspecified.
/// `observer` is called once after each expanded cell and once per cell of the
/// reconstructed path. Returning [Cancelled] from it stops the search with `false`.
pub fn search<F>(grid: &mut Grid, source: Coord, target: Coord, observer: F) -> bool
where
    F: FnMut(&Grid) -> Result<(), Cancelled>,
{
    search_path(grid, source, target, observer).is_found()
}

/// Like [search], but returns the path that was found.
///
/// Cells entering the frontier are marked [CellState::Open], expanded cells other than
/// the source [CellState::Closed], and on success every path cell from the target back
/// to the first step [CellState::Path].
pub fn search_path<F>(
    grid: &mut Grid,
    source: Coord,
    target: Coord,
    mut observer: F,
) -> SearchOutcome
where
    F: FnMut(&Grid) -> Result<(), Cancelled>,
{
    info!("Searching for a path from {} to {}", source, target);
    let mut ct = SearchContext::new(source, target);

    while let Some(FrontierEntry { f_score, cell, .. }) = ct.open_set.pop() {
        // A cell whose score improved while open was pushed again under the lower key.
        if f_score > ct.f(cell) {
            continue;
        }
        ct.open_set_membership.remove(&cell);

        if cell == target {
            return match reconstruct_path(grid, &ct.came_from, source, target, &mut observer) {
                Ok(path) => {
                    info!("Found a path of length {} to {}", path.len(), target);
                    SearchOutcome::Found(path)
                }
                Err(Cancelled) => {
                    warn!("Observer cancelled the search during path reconstruction");
                    SearchOutcome::Cancelled
                }
            };
        }

        trace!("Expanding {} with f = {}", cell, f_score);
        let candidate = ct.g(cell) + EDGE_COST;
        let neighbours = grid.cell_at(cell.row, cell.col).neighbours.clone();
        for neighbour in neighbours {
            if candidate < ct.g(neighbour) {
                let f = candidate + neighbour.manhattan_distance(&target);
                ct.came_from.insert(neighbour, cell);
                ct.g_score.insert(neighbour, candidate);
                ct.f_score.insert(neighbour, f);
                if ct.open_set_membership.insert(neighbour) {
                    grid.set_state(neighbour, CellState::Open);
                }
                ct.push(neighbour, f);
            }
        }

        if observer(grid).is_err() {
            warn!("Observer cancelled the search while expanding {}", cell);
            return SearchOutcome::Cancelled;
        }

        if cell != source {
            grid.set_state(cell, CellState::Closed);
        }
    }
    warn!("Frontier exhausted: {} is not reachable from {}", target, source);
    SearchOutcome::Exhausted
}

/// Walks `came_from` back from the target, marking and reporting each cell before the
/// source. Returns the cells in walking order from the first step to the target.
///
/// If the observer cancels, the cells marked so far are put back to Closed so no
/// partial path is left on the grid.
fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &FxHashMap<Coord, Coord>,
    source: Coord,
    target: Coord,
    observer: &mut F,
) -> Result<Vec<Coord>, Cancelled>
where
    F: FnMut(&Grid) -> Result<(), Cancelled>,
{
    let mut path: Vec<Coord> =
        std::iter::successors(Some(target), |cell| came_from.get(cell).copied())
            .take_while(|cell| *cell != source)
            .collect();
    for (marked, &cell) in path.iter().enumerate() {
        grid.set_state(cell, CellState::Path);
        if let Err(cancelled) = observer(grid) {
            for &undo in &path[..=marked] {
                grid.set_state(undo, CellState::Closed);
            }
            return Err(cancelled);
        }
    }
    for (coord, role) in [(target, Role::Target), (source, Role::Source)] {
        if let Some(cell) = grid.cell_mut(coord) {
            cell.role = role;
        }
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::SearchStatus;

    fn prepared_grid(
        rows: usize,
        obstacles: &[(usize, usize)],
        source: Coord,
        target: Coord,
    ) -> Grid {
        let mut grid = Grid::new(rows, rows as u32 * 10);
        for &(row, col) in obstacles {
            grid.set_state(Coord::new(row, col), CellState::Obstacle);
        }
        grid.set_state(source, CellState::Source);
        grid.set_state(target, CellState::Target);
        grid.refresh_all_neighbours();
        grid
    }

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn frontier_pops_lowest_score_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (f_score, seq, row) in [(5, 1, 0), (3, 4, 1), (3, 2, 2), (7, 0, 3)] {
            heap.push(FrontierEntry {
                f_score,
                seq,
                cell: Coord::new(row, 0),
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.cell.row)).collect();
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    /// Asserts that the straight 4 step route along the row is taken.
    #[test]
    fn straight_line_on_empty_grid() {
        let (source, target) = (Coord::new(0, 0), Coord::new(0, 4));
        let mut grid = prepared_grid(5, &[], source, target);
        let outcome = search_path(&mut grid, source, target, |_: &Grid| Ok(()));
        assert_eq!(
            outcome,
            SearchOutcome::Found(coords(&[(0, 1), (0, 2), (0, 3), (0, 4)]))
        );
    }

    #[test]
    fn observer_called_per_frame_and_per_path_cell() {
        let (source, target) = (Coord::new(0, 0), Coord::new(0, 4));
        let mut grid = prepared_grid(5, &[], source, target);
        let mut frames = 0;
        let found = search(&mut grid, source, target, |_: &Grid| {
            frames += 1;
            Ok(())
        });
        assert!(found);
        // Four expanded cells before the target is popped, then four path cells.
        assert_eq!(frames, 8);
    }

    #[test]
    fn path_cells_reported_from_target_backwards() {
        let (source, target) = (Coord::new(0, 0), Coord::new(0, 2));
        let mut grid = prepared_grid(3, &[], source, target);
        let mut marked = Vec::new();
        search(&mut grid, source, target, |g: &Grid| {
            let path_cells: Vec<Coord> = g
                .coords()
                .filter(|c| g.status(*c) == SearchStatus::Path)
                .collect();
            if path_cells.len() > marked.len() {
                marked = path_cells;
            }
            Ok(())
        });
        assert_eq!(marked, coords(&[(0, 1), (0, 2)]));
        assert_eq!(grid.state(source), CellState::Source);
        assert_eq!(grid.state(target), CellState::Target);
        assert_eq!(grid.status(target), SearchStatus::Path);
        assert_eq!(grid.status(source), SearchStatus::Unvisited);
    }

    #[test]
    fn blocked_middle_row_has_no_path() {
        let (source, target) = (Coord::new(0, 0), Coord::new(2, 0));
        let mut grid = prepared_grid(3, &[(1, 0), (1, 1), (1, 2)], source, target);
        let outcome = search_path(&mut grid, source, target, |_: &Grid| Ok(()));
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert!(grid.coords().all(|c| grid.status(c) != SearchStatus::Path));
        assert_eq!(grid.state(Coord::new(0, 1)), CellState::Closed);
        assert_eq!(grid.state(Coord::new(0, 2)), CellState::Closed);
        assert_eq!(grid.state(Coord::new(2, 1)), CellState::Empty);
    }

    #[test]
    fn adjacent_obstacle_forces_detour() {
        let (source, target) = (Coord::new(0, 0), Coord::new(0, 4));
        let mut grid = prepared_grid(5, &[(0, 1)], source, target);
        let outcome = search_path(&mut grid, source, target, |_: &Grid| Ok(()));
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), source.manhattan_distance(&target) + 2);
        assert_eq!(
            path,
            coords(&[(1, 0), (1, 1), (1, 2), (0, 2), (0, 3), (0, 4)]).as_slice()
        );
    }

    #[test]
    fn cancelling_observer_stops_search() {
        let (source, target) = (Coord::new(0, 0), Coord::new(9, 9));
        let mut grid = prepared_grid(10, &[], source, target);
        let mut calls = 0;
        let outcome = search_path(&mut grid, source, target, |_: &Grid| {
            calls += 1;
            if calls == 3 {
                Err(Cancelled)
            } else {
                Ok(())
            }
        });
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(calls, 3);
        assert!(grid.coords().all(|c| grid.status(c) != SearchStatus::Path));
    }

    #[test]
    fn cancelling_during_reconstruction_reports_no_path() {
        let (source, target) = (Coord::new(0, 0), Coord::new(0, 2));
        let mut grid = prepared_grid(3, &[], source, target);
        let mut calls = 0;
        let found = search(&mut grid, source, target, |_: &Grid| {
            calls += 1;
            // Two frames, then both path cells; stop at the second one.
            if calls > 3 {
                Err(Cancelled)
            } else {
                Ok(())
            }
        });
        assert!(!found);
        assert_eq!(calls, 4);
        assert!(grid.coords().all(|c| grid.status(c) != SearchStatus::Path));
        assert_eq!(grid.status(target), SearchStatus::Closed);
        assert_eq!(grid.state(Coord::new(0, 1)), CellState::Closed);
        assert_eq!(grid.state(target), CellState::Target);
    }
}
