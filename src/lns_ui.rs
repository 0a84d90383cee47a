// Terminal frontend
// Command parsing, colored board output and the synchronous session loop

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::lns_game::{Game, Status};
use crate::lns_render::snapshot;

/// A player command with coordinates already validated against the board
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Reveal(usize, usize),
    ToggleFlag(usize, usize),
    Quit,
}

/// Where commands come from. Implementations own prompting, parsing and
/// coordinate validation; the core only ever sees commands that fit the
/// rows x cols board. `None` means the input ended.
pub trait CommandSource {
    fn next_command(&mut self, rows: usize, cols: usize) -> io::Result<Option<Command>>;
}

/// Where board snapshots and the game result go
pub trait DisplaySink {
    /// Called once at game start and after every accepted command
    fn show_board(&mut self, rows: &[Vec<char>]) -> io::Result<()>;
    /// Called once at game end with the fully disclosed board
    fn game_over(&mut self, status: Status, disclosed: &[Vec<char>]) -> io::Result<()>;
}

const PROMPT: &str = "Enter the row and column to reveal (e.g., 0 1), \
                      mark/unmark a cell with \"?\" (e.g., 0 1 ?), or \"q\" to quit:";

/// Line-based command reader speaking the `<row> <col> [?]` syntax.
/// Re-prompts on anything that does not parse or is off the board, so
/// invalid input never reaches the game.
pub struct LineCommandSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineCommandSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineCommandSource { input, output }
    }
}

impl<R: BufRead, W: Write> CommandSource for LineCommandSource<R, W> {
    fn next_command(&mut self, rows: usize, cols: usize) -> io::Result<Option<Command>> {
        loop {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_command(&line, rows, cols) {
                Some(command) => return Ok(Some(command)),
                None => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }
    }
}

/// Parse one input line against the board extent
fn parse_command(line: &str, rows: usize, cols: usize) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    let marker = parts.next();
    if parts.next().is_some() || row >= rows || col >= cols {
        return None;
    }
    match marker {
        None => Some(Command::Reveal(row, col)),
        Some("?") => Some(Command::ToggleFlag(row, col)),
        Some(_) => None,
    }
}

/// Board printer with the classic per-number colors
pub struct TerminalDisplay<W> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        TerminalDisplay { out }
    }

    fn symbol_color(symbol: char) -> Color {
        match symbol {
            '*' => Color::Red,
            '?' => Color::Yellow,
            '1' => Color::Blue,
            '2' => Color::Green,
            '3' => Color::Red,
            '4' => Color::DarkBlue,
            '5' => Color::DarkRed,
            '6' => Color::Cyan,
            '7' => Color::Magenta,
            '8' => Color::DarkYellow,
            '.' => Color::DarkGrey,
            _ => Color::White,
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show_board(&mut self, rows: &[Vec<char>]) -> io::Result<()> {
        queue!(self.out, Print("Board:\n"))?;
        for row in rows {
            for &symbol in row {
                queue!(
                    self.out,
                    SetForegroundColor(Self::symbol_color(symbol)),
                    Print(symbol),
                    ResetColor,
                    Print(' ')
                )?;
            }
            queue!(self.out, Print('\n'))?;
        }
        self.out.flush()
    }

    fn game_over(&mut self, status: Status, disclosed: &[Vec<char>]) -> io::Result<()> {
        match status {
            Status::Lost => writeln!(self.out, "GAME OVER")?,
            Status::Won => writeln!(self.out, "YOU WON")?,
            Status::InProgress => {}
        }
        self.show_board(disclosed)
    }
}

/// Drive one game to its end: show the board, pull commands, apply them
/// to the game and re-show after every accepted command. Each command
/// runs to completion before the next one is read.
///
/// Returns the final status; `InProgress` means the player quit.
pub fn run_session<S, D>(
    game: &mut Game,
    source: &mut S,
    sink: &mut D,
) -> Result<Status, Box<dyn Error>>
where
    S: CommandSource,
    D: DisplaySink,
{
    let (rows, cols) = (game.grid().rows(), game.grid().cols());
    sink.show_board(&snapshot(game.grid(), false))?;
    loop {
        let command = match source.next_command(rows, cols)? {
            Some(command) => command,
            None => return Ok(Status::InProgress),
        };
        debug!("command: {command:?}");
        match command {
            Command::Quit => return Ok(Status::InProgress),
            Command::Reveal(row, col) => {
                game.reveal(row, col)?;
            }
            Command::ToggleFlag(row, col) => game.toggle_flag(row, col)?,
        }
        if game.status().is_terminal() {
            sink.game_over(game.status(), &snapshot(game.grid(), true))?;
            return Ok(game.status());
        }
        sink.show_board(&snapshot(game.grid(), false))?;
    }
}
