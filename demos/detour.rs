use grid_astar::{search, search_path, CellState, Coord, Grid};

// A wall with a single gap forces a detour, then closing the gap makes the target
// unreachable:
//  ______
// |S # T|
// |  #  |
// |  #  |
// |     |
// |  #  |
//  ______

fn main() {
    env_logger::init();
    let mut grid = Grid::new(5, 500);
    let source = Coord::new(0, 0);
    let target = Coord::new(0, 4);
    for row in [0, 1, 2, 4] {
        grid.set_state(Coord::new(row, 2), CellState::Obstacle);
    }
    grid.set_state(source, CellState::Source);
    grid.set_state(target, CellState::Target);
    grid.refresh_all_neighbours();
    let outcome = search_path(&mut grid, source, target, |_: &Grid| Ok(()));
    println!("{grid}");
    println!("{:?}", outcome.path());

    grid.reset_search();
    grid.set_state(Coord::new(3, 2), CellState::Obstacle);
    // Without a refresh the old neighbour lists would still lead through the gap.
    grid.refresh_all_neighbours();
    let found = search(&mut grid, source, target, |_: &Grid| Ok(()));
    println!("{grid}");
    println!("Reachable after closing the gap: {found}");
}
