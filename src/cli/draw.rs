//! Draw command implementation.

use super::{seed_or_random, CliError};
use jungle::Draw;

/// Execute the draw command.
///
/// # Errors
///
/// Returns an error if either pick is invalid.
pub(crate) fn execute(seed: Option<u64>, p1: usize, p2: usize) -> Result<(), CliError> {
    let seed = seed_or_random(seed);
    let draw = Draw::shuffled(seed);
    let (p1_card, p2_card, first) = draw.reveal(p1, p2)?;

    println!("Shuffled with seed {seed}");
    println!("  Player 1 drew card {p1}: {p1_card} (rank {})", p1_card.rank());
    println!("  Player 2 drew card {p2}: {p2_card} (rank {})", p2_card.rank());
    println!("{first} moves first.");
    Ok(())
}
