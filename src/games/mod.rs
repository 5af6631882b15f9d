//! Ready-made games for the elimination driver.
//!
//! These serve as:
//!
//! 1. **Validation**: games with known reductions (Prisoner's Dilemma, a
//!    mixture-only domination) check the driver end to end.
//!
//! 2. **Benchmarks**: seeded random games of any shape give reproducible
//!    workloads.
//!
//! ## Available Games
//!
//! - [`classic`]: textbook games with hand-checked reductions
//! - [`random`]: uniformly random payoff tables from a seed

pub mod classic;
pub mod random;

pub use classic::{
    catalog, matching_pennies, mixed_dominance_example, prisoners_dilemma, three_player_cascade,
};
pub use random::random_game;
