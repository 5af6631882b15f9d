//! # IESDS Solver
//!
//! Iterated Elimination of Strictly Dominated Strategies for n-player
//! normal-form games (up to 5 players with up to 10 actions each).
//!
//! ## Features
//!
//! - **Pure Domination**: Removes actions beaten by another single action
//! - **Mixed Domination**: Removes actions beaten by a mixture of two actions
//! - **Deterministic Order**: Same game, same removals, same result
//! - **Text and JSON Output**: Reduced games in the input layout or as a report
//!
//! ## Quick Start
//!
//! ```
//! use iesds_solver::format::{parse_game, render_text};
//! use iesds_solver::iesds::{eliminate, EliminationConfig};
//!
//! let input = parse_game("1 2 2 2 3 3 0 5 5 0 1 1", &EliminationConfig::default()).unwrap();
//! let config = input.apply_to(EliminationConfig::default());
//! let outcome = eliminate(input.matrix, config).unwrap();
//!
//! assert_eq!(render_text(&outcome.matrix), "2\n2\n2\n1 1\n");
//! ```
//!
//! ## Modules
//!
//! - [`iesds`]: Payoff table, domination checkers and elimination driver
//! - [`format`]: Text input and text/JSON output
//! - [`games`]: Textbook and random games
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Eliminator (state machine)                   │
//! │        PureScan  ──▶  MixedScan  ──▶  Done                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ DominanceCheck per player slice
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌──────────┐        ┌────────────┐        ┌────────────┐
//!    │   Pure   │        │   Mixed    │        │ GameMatrix │
//!    │Dominance │        │ Dominance  │        │  removals  │
//!    └──────────┘        └────────────┘        └────────────┘
//! ```

#![warn(missing_docs)]

/// Elimination engine.
///
/// This is the core module: the game representation, both domination tests
/// and the driver that alternates between them.
pub mod iesds;

/// Game description parsing and result rendering.
pub mod format;

/// Game catalog module.
///
/// Contains textbook games with known reductions and a seeded generator.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use iesds::{
    eliminate, EliminationConfig, EliminationStats, Eliminator, GameMatrix, IesdsError, ScanState,
};
