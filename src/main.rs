// Entry point for the line-command Minesweeper game
// Prompts for board dimensions, generates the board and runs the session

use std::error::Error;
use std::io::{self, BufRead, Write};

use log::info;
use rand::thread_rng;

// Module declarations
mod lns_board; // Mine-count sampling and board generation
mod lns_game; // Reveal engine, flag toggle and win evaluation
mod lns_grid; // Cell and grid data model
mod lns_render; // Cell-to-symbol mapping and board snapshots
mod lns_ui; // Command parsing, colored output and the session loop

use lns_game::Game;
use lns_ui::{LineCommandSource, TerminalDisplay, run_session};

/// Ask for a board dimension on its own line.
/// Returns None unless the line parses as a positive number.
fn prompt_dimension(prompt: &str) -> Result<Option<usize>, Box<dyn Error>> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{prompt}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse::<usize>().ok().filter(|&n| n > 0))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Some(rows) = prompt_dimension("Enter the number of rows for the grid:")? else {
        println!("Invalid input. Exiting the game.");
        return Ok(());
    };
    let Some(cols) = prompt_dimension("Enter the number of columns for the grid:")? else {
        println!("Invalid input. Exiting the game.");
        return Ok(());
    };

    let mut rng = thread_rng();
    let num_mines = lns_board::mine_count(rows, cols, &mut rng);
    println!("Number of Mines: {num_mines}");
    info!("starting a {rows}x{cols} game with {num_mines} mines");

    let mut game = Game::new(lns_board::generate(rows, cols, num_mines, &mut rng));
    let stdin = io::stdin();
    let mut source = LineCommandSource::new(stdin.lock(), io::stdout());
    let mut sink = TerminalDisplay::new(io::stdout());
    let status = run_session(&mut game, &mut source, &mut sink)?;
    info!("session ended: {status:?}");
    Ok(())
}
