//! Iterated Elimination of Strictly Dominated Strategies (IESDS).
//!
//! This module reduces an n-player normal-form game by repeatedly removing
//! strictly dominated actions until none is left.
//!
//! # Overview
//!
//! An action is strictly dominated when some alternative pays its player
//! strictly more against every combination of the other players' actions.
//! Two kinds of alternative are considered:
//!
//! - **Pure**: another single action of the same player
//! - **Mixed**: a probabilistic mixture of exactly two other actions
//!
//! Removing an action can make other actions dominated, so the process is
//! repeated. Pure domination is always retried first; mixtures are only
//! examined once no pure domination is left anywhere.
//!
//! # Usage
//!
//! 1. Build a `GameMatrix` (or parse one with [`crate::format`])
//! 2. Create an `Eliminator` with an `EliminationConfig`
//! 3. Call `run()`
//! 4. Read the surviving labels and payoffs from `matrix()`
//!
//! # Example
//!
//! ```
//! use iesds_solver::iesds::{eliminate, EliminationConfig, GameMatrix};
//!
//! // Row player's third action loses to a 50/50 mix of the first two.
//! let game = GameMatrix::from_flat(
//!     &[3, 2],
//!     &[4, 1, 0, 0,
//!       0, 0, 4, 1,
//!       1, 0, 1, 0],
//! ).unwrap();
//!
//! let outcome = eliminate(game, EliminationConfig::default()).unwrap();
//! assert_eq!(outcome.matrix.labels(0), &[1, 2]);
//! assert_eq!(outcome.stats.mixed_removals, 1);
//! ```
//!
//! # Known quirk
//!
//! The driver also stops as soon as the table has one row and one group of
//! payoffs (`GameMatrix::is_singleton`). For a single-player game that is
//! the same as the player having one action left.

pub mod config;
pub mod dominance;
pub mod error;
pub mod matrix;
pub mod mixed;
pub mod pure;
pub mod solver;

// Re-export main types for convenient access
pub use config::{ConfigError, EliminationConfig, EliminationStats};
pub use dominance::{DominanceCheck, Domination, Dominator, Phase};
pub use error::IesdsError;
pub use matrix::{GameMatrix, Payoff, PlayerSlice};
pub use mixed::MixedDominance;
pub use pure::PureDominance;
pub use solver::{eliminate, scan_order, Elimination, EliminationOutcome, Eliminator, ScanState};
