use grid_astar::{Cancelled, Editor, Grid, GridConfig};

// Replays a sequence of clicks on a 10x10 board of 200 pixels, the way a front end
// would forward pointer input, then runs the search and stops it early.

fn main() -> grid_astar::Result<()> {
    env_logger::init();
    let mut editor = Editor::new(GridConfig::new(10, 200)?);
    let clicks = [(5, 5), (190, 190), (100, 20), (100, 40), (100, 60), (100, 80)];
    for (x, y) in clicks {
        let cell = editor.cell_at_pixel(x, y)?;
        editor.primary(cell)?;
    }
    if let Some(outcome) = editor.run(|_: &Grid| Ok(())) {
        println!("{}", editor.grid());
        println!("{:?}", outcome.path());
    }

    // A front end would return Cancelled when the window is closed mid-search.
    let mut frames = 0;
    let outcome = editor.run(|_: &Grid| {
        frames += 1;
        if frames > 5 {
            Err(Cancelled)
        } else {
            Ok(())
        }
    });
    println!("After cancelling: {:?}", outcome);
    println!("{}", editor.grid());
    Ok(())
}
