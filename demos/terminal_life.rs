//! # Conway's Game of Life - Terminal Demo
//!
//! Seeds a random soup, runs the controller on the wall-clock timer, and
//! redraws the grid in the terminal through a `GridView` implementation.
//! Runs for a fixed number of generations and exits.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use lifegrid::prelude::*;

const GENERATIONS: u64 = 120;
const SOUP_FILL: f64 = 0.3;

/// Renders each generation as a block of ANSI text.
struct TerminalView;

impl GridView for TerminalView {
    fn on_grid_replaced(&mut self, grid: &GridState) {
        // Repaint in place: home the cursor instead of scrolling.
        print!("\x1b[H");
        draw(grid);
    }
}

fn draw(grid: &GridState) {
    let mut frame = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let cell = grid.get(row, col).expect("in-bounds by loop construction");
            frame.push_str(if cell.is_alive() { "██" } else { "  " });
        }
        frame.push('\n');
    }
    print!("{frame}");
    let _ = io::stdout().flush();
}

fn seed_soup(controller: &mut RunController<TerminalView>) -> anyhow::Result<()> {
    use rand::Rng;
    let mut rng = rand::rng();

    let (columns, rows) = controller.grid().dimensions();
    let mut gesture = PaintGesture::new();
    gesture.begin(PaintMode::Draw);
    for row in 0..rows {
        for col in 0..columns {
            if rng.random_bool(SOUP_FILL) {
                gesture.apply(controller, row, col)?;
            }
        }
    }
    gesture.end();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Conway's Game of Life - terminal demo");
    println!("Random soup, {GENERATIONS} generations, fast preset.");
    println!();

    let mut controller = lifegrid::default().with_view(TerminalView);
    controller.set_density(Density::Small);
    controller.set_speed(Speed::Fast);
    seed_soup(&mut controller)?;

    // Clear the screen once, then let the view repaint in place.
    print!("\x1b[2J\x1b[H");
    draw(controller.grid());

    controller.start();
    while controller.generation() < GENERATIONS {
        controller.poll();
        thread::sleep(Duration::from_millis(10));
    }
    controller.stop();

    println!();
    println!(
        "Done: {} generations, {} cells alive.",
        controller.generation(),
        controller.grid().live_count()
    );
    Ok(())
}
