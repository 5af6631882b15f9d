//! Shared interface of the domination checkers.
//!
//! Both checkers look at one player's payoffs at a time and report the first
//! dominated action they find, so the driver can run either of them over the
//! players in the same order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::iesds::matrix::PlayerSlice;

/// What beat a dominated action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dominator {
    /// Another single action, by surviving position.
    Pure(usize),
    /// A mixture of two actions, by surviving position.
    ///
    /// Any weight on `first` in `[min_weight, max_weight]` (the rest on
    /// `second`) was accepted by the feasibility test.
    Mixed {
        /// Action receiving weight `p`.
        first: usize,
        /// Action receiving weight `1 - p`.
        second: usize,
        /// Smallest accepted `p`.
        min_weight: f64,
        /// Largest accepted `p`.
        max_weight: f64,
    },
}

/// A dominated action found in a player's slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domination {
    /// Surviving position of the dominated action.
    pub dominated: usize,
    /// The action(s) that dominate it.
    pub by: Dominator,
}

impl Domination {
    /// Domination by a single action.
    pub fn pure(dominated: usize, by: usize) -> Self {
        Self {
            dominated,
            by: Dominator::Pure(by),
        }
    }

    /// Check if a single action is the dominator.
    pub fn is_pure(&self) -> bool {
        matches!(self.by, Dominator::Pure(_))
    }
}

impl fmt::Display for Domination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.by {
            Dominator::Pure(by) => write!(f, "#{} < #{}", self.dominated, by),
            Dominator::Mixed {
                first,
                second,
                min_weight,
                max_weight,
            } => write!(
                f,
                "#{} < p*#{} + (1-p)*#{}, p in [{:.3}, {:.3}]",
                self.dominated, first, second, min_weight, max_weight
            ),
        }
    }
}

/// Which kind of domination a checker looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Domination by a single action.
    Pure,
    /// Domination by a mixture of two actions.
    Mixed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Pure => write!(f, "pure"),
            Phase::Mixed => write!(f, "mixed"),
        }
    }
}

/// A test for strictly dominated actions within one player's payoffs.
pub trait DominanceCheck {
    /// The kind of domination this checker detects.
    fn phase(&self) -> Phase;

    /// Find the first dominated action in `slice`, if any.
    ///
    /// Which action counts as "first" is part of each checker's contract;
    /// the driver relies on it for deterministic results.
    fn find_dominated(&self, slice: &PlayerSlice) -> Option<Domination>;
}
