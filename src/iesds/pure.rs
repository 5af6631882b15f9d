//! Domination by a single other action.

use crate::iesds::dominance::{DominanceCheck, Domination, Phase};
use crate::iesds::matrix::{Payoff, PlayerSlice};

/// Finds actions strictly dominated by another single action.
///
/// Candidates are scanned lowest index first, and for each candidate the
/// dominators are tried lowest index first. The first candidate with any
/// dominator is reported, not the "most" dominated one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureDominance;

impl PureDominance {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }
}

/// Check whether `action` pays strictly less than `other` at every coordinate.
///
/// A single tie or better coordinate is enough to block domination.
pub fn strictly_below(action: &[Payoff], other: &[Payoff]) -> bool {
    action.iter().zip(other).all(|(a, b)| a < b)
}

impl DominanceCheck for PureDominance {
    fn phase(&self) -> Phase {
        Phase::Pure
    }

    fn find_dominated(&self, slice: &PlayerSlice) -> Option<Domination> {
        let actions = slice.actions();
        actions.iter().enumerate().find_map(|(i, candidate)| {
            actions
                .iter()
                .position(|other| strictly_below(candidate, other))
                .map(|j| Domination::pure(i, j))
        })
    }
}
