//! Run command implementation.

use super::output::{format_step, format_text, JsonScriptResult};
use super::{CliError, OutputFormat};
use jungle::render::render_ascii;
use jungle::script::{run_script, MoveScript};
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or aborts on a rejected
/// move.
pub(crate) fn execute(script: &Path, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let moves = MoveScript::load(script)?;

    if !quiet && format == OutputFormat::Text {
        println!(
            "Playing {} moves from {}...",
            moves.moves.len(),
            script.display()
        );
        println!();
    }

    let report = run_script(&moves)?;

    match format {
        OutputFormat::Text => {
            if !quiet {
                for step in &report.steps {
                    println!("{}", format_step(step));
                }
                println!();
                print!("{}", render_ascii(&report.state));
                println!();
            }
            print!("{}", format_text(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonScriptResult::from_report(&report))?;
            println!("{json}");
        }
    }

    Ok(())
}
