//! Reading game descriptions and writing results.
//!
//! - [`input`]: whitespace-separated integer descriptions (flag, player
//!   count, action counts, payoffs)
//! - [`output`]: the same table layout as text, or a JSON report

pub mod input;
pub mod output;

pub use input::{parse_game, parse_game_file, GameInput};
pub use output::{render_text, EliminationReport};
