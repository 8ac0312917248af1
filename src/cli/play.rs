//! Play command implementation: an interactive game on stdin/stdout.
//!
//! Coordinates typed here are 1-based, matching the labels on the board.

use super::{seed_or_random, CliError};
use jungle::render::{render_ascii, render_text};
use jungle::{Coord, Direction, Draw, GameState, PlayerId, Setup};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  r c r c     move the piece at row r, column c to the given cell
  r c w|a|s|d move the piece at row r, column c up/left/down/right
  moves r c   list where the piece at row r, column c can go
  history     list the moves played so far
  board       show the board
  help        show this help
  quit        leave the game
";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Move between two cells.
    Move { from: Coord, to: Coord },
    /// Move one step in a direction.
    Step { from: Coord, direction: Direction },
    /// List legal moves from a cell.
    Moves(Coord),
    /// Show the board.
    Board,
    /// List the moves played so far.
    History,
    /// Show the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the first player or draw is invalid, or on I/O failure.
pub(crate) fn execute(
    first: Option<u8>,
    seed: Option<u64>,
    draw: Option<&[usize]>,
    plain: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let first = match draw {
        Some(&[p1, p2]) => {
            let seed = seed_or_random(seed);
            let (p1_card, p2_card, first) = Draw::shuffled(seed).reveal(p1, p2)?;
            writeln!(out, "Player 1 drew {p1_card}, Player 2 drew {p2_card}.")?;
            first
        }
        Some(_) => return Err(CliError::new("--draw takes exactly two card numbers")),
        None => PlayerId::try_from(first.unwrap_or(1)).map_err(CliError::new)?,
    };
    writeln!(out, "{first} moves first.")?;

    let mut state = GameState::new(&Setup::with_first(first))?;
    let stdin = io::stdin();
    session(&mut state, stdin.lock(), &mut out, plain)
}

/// Run the read-eval-print loop until the game ends, input runs out or the
/// player quits.
fn session<R: BufRead, W: Write>(
    state: &mut GameState,
    input: R,
    out: &mut W,
    plain: bool,
) -> Result<(), CliError> {
    let render = |state: &GameState| {
        if plain {
            render_text(state)
        } else {
            render_ascii(state)
        }
    };

    write!(out, "{}", render(state))?;
    writeln!(out, "Type 'help' for commands.")?;
    prompt(state, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(state, out)?;
            continue;
        }

        match parse_command(&line) {
            Err(reason) => writeln!(out, "{reason}")?,
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => write!(out, "{HELP}")?,
            Ok(Command::Board) => write!(out, "{}", render(state))?,
            Ok(Command::History) => {
                if state.history().is_empty() {
                    writeln!(out, "No moves yet.")?;
                }
                for (i, line) in state.history().iter().enumerate() {
                    writeln!(out, "{:>3}. {line}", i + 1)?;
                }
            }
            Ok(Command::Moves(from)) => {
                let targets: Vec<String> = state
                    .legal_moves_from(from)
                    .iter()
                    .map(|plan| format!("{} {}", plan.direction.key(), plan.landing))
                    .collect();
                if targets.is_empty() {
                    writeln!(out, "No moves from {from}.")?;
                } else {
                    writeln!(out, "Moves from {from}: {}", targets.join(", "))?;
                }
            }
            Ok(Command::Move { from, to }) => submit(state, from, to, out, &render)?,
            Ok(Command::Step { from, direction }) => {
                submit(state, from, from.offset(direction), out, &render)?;
            }
        }

        if let Some(winner) = state.winner() {
            writeln!(out, "Game over. {winner} wins!")?;
            return Ok(());
        }
        prompt(state, out)?;
    }

    Ok(())
}

/// Submit a move and report the outcome.
fn submit<W: Write>(
    state: &mut GameState,
    from: Coord,
    to: Coord,
    out: &mut W,
    render: &dyn Fn(&GameState) -> String,
) -> Result<(), CliError> {
    match state.submit_move(from, to) {
        Ok(result) => {
            writeln!(out, "{}", result.message)?;
            write!(out, "{}", render(state))?;
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn prompt<W: Write>(state: &GameState, out: &mut W) -> Result<(), CliError> {
    write!(out, "{} > ", state.current_turn())?;
    out.flush()?;
    Ok(())
}

/// Parse one line of input.
fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit" | "q" | "exit"] => Ok(Command::Quit),
        ["help" | "h" | "?"] => Ok(Command::Help),
        ["board" | "b"] => Ok(Command::Board),
        ["history"] => Ok(Command::History),
        ["moves" | "m", r, c] => Ok(Command::Moves(parse_coord(r, c)?)),
        [r, c, key] => {
            let mut chars = key.chars();
            let direction = match (chars.next(), chars.next()) {
                (Some(ch), None) => Direction::from_key(ch),
                _ => None,
            }
            .ok_or_else(|| format!("Unknown direction '{key}'. Use w, a, s or d."))?;
            Ok(Command::Step {
                from: parse_coord(r, c)?,
                direction,
            })
        }
        [r1, c1, r2, c2] => Ok(Command::Move {
            from: parse_coord(r1, c1)?,
            to: parse_coord(r2, c2)?,
        }),
        _ => Err(format!("Unrecognised command '{}'. Type 'help'.", line.trim())),
    }
}

/// Parse a 1-based row and column.
fn parse_coord(row: &str, col: &str) -> Result<Coord, String> {
    let parse = |s: &str| -> Result<u8, String> {
        s.parse::<u8>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| format!("'{s}' is not a row or column (they start at 1)."))
    };
    Ok(Coord::new(parse(row)?, parse(col)?))
}
