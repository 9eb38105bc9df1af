use grid_astar::{search_path, CellState, Coord, Grid};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S   T|
// |     |
// |     |
// |     |
// |     |
//  _____
// where
// - S marks the source
// - T marks the target
//
// Every frame the search reports is printed.

fn main() {
    env_logger::init();
    let mut grid = Grid::new(5, 500);
    let source = Coord::new(0, 0);
    let target = Coord::new(0, 4);
    grid.set_state(source, CellState::Source);
    grid.set_state(target, CellState::Target);
    grid.refresh_all_neighbours();
    let mut frame = 0;
    let outcome = search_path(&mut grid, source, target, |g: &Grid| {
        frame += 1;
        println!("Frame {frame}:\n{g}");
        Ok(())
    });
    println!("Path:");
    for p in outcome.path().unwrap_or_default() {
        println!("{}", p);
    }
}
