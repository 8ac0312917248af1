//! Board command implementation.

use super::output::JsonBoard;
use super::{CliError, OutputFormat};
use jungle::render::render_ascii;
use jungle::{GameState, Setup};

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the opening position cannot be built or serialized.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    let state = GameState::new(&Setup::default())?;
    match format {
        OutputFormat::Text => print!("{}", render_ascii(&state)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonBoard::from_state(&state))?;
            println!("{json}");
        }
    }
    Ok(())
}
