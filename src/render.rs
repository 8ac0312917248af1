//! Board rendering for terminals and for plain-text consumers.
//!
//! Both renderers only read through [`GameState::query_cell`] and the
//! board's piece lists, so they never affect play.
//!
//! [`GameState::query_cell`]: crate::game::GameState::query_cell

mod ascii;
mod text;

pub use ascii::render_ascii;
pub use text::render_text;
